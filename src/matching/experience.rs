use lazy_static::lazy_static;
use regex::Regex;

use crate::ExperienceLevel;

lazy_static! {
    // "5+ years of experience" / "5 years experience" / "minimum 5 years" /
    // "at least 5 years"
    static ref YEARS_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(\d+)\+?\s*years?\s*of\s*experience").unwrap(),
        Regex::new(r"(\d+)\+?\s*years?\s*experience").unwrap(),
        Regex::new(r"minimum\s*(\d+)\s*years?").unwrap(),
        Regex::new(r"at\s*least\s*(\d+)\s*years?").unwrap(),
    ];
}

/// Level keyword tiers, checked in this order; the first tier with a hit
/// wins. Ordering matters: "analyst" must claim "senior analyst" postings
/// before the senior tier sees "senior".
static LEVEL_KEYWORDS: &[(ExperienceLevel, &[&str])] = &[
    (
        ExperienceLevel::Junior,
        &["junior", "associate", "analyst", "coordinator", "entry level"],
    ),
    (
        ExperienceLevel::Mid,
        &["senior analyst", "specialist", "manager", "lead"],
    ),
    (
        ExperienceLevel::Senior,
        &["senior", "principal", "director", "head of"],
    ),
    (
        ExperienceLevel::Director,
        &["director", "vp", "vice president", "chief", "executive"],
    ),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceMatchResult {
    /// 0–100.
    pub score: f64,
    pub required_level: ExperienceLevel,
    pub required_years: u32,
    pub calculation: String,
}

/// Maximum explicit "N years" requirement found in the text, 0 if none.
pub fn extract_required_years(text: &str) -> u32 {
    let lower = text.to_lowercase();
    let mut required = 0;
    for pattern in YEARS_PATTERNS.iter() {
        for captures in pattern.captures_iter(&lower) {
            if let Ok(years) = captures[1].parse::<u32>() {
                required = required.max(years);
            }
        }
    }
    required
}

/// Infer the required seniority tier from level keywords; defaults to mid
/// when nothing matches.
pub fn infer_required_level(text: &str) -> (ExperienceLevel, Vec<&'static str>) {
    let lower = text.to_lowercase();
    for (level, keywords) in LEVEL_KEYWORDS {
        let hits: Vec<&'static str> = keywords
            .iter()
            .copied()
            .filter(|kw| lower.contains(kw))
            .collect();
        if !hits.is_empty() {
            return (*level, hits);
        }
    }
    (ExperienceLevel::Mid, vec![])
}

/// Compare the candidate's level against what the posting text asks for.
///
/// Penalties are asymmetric: 10 points per rank overqualified (floor 70),
/// 25 points per rank underqualified (floor 20).
pub fn match_experience(
    candidate_level: ExperienceLevel,
    _candidate_years: u32,
    posting_text: &str,
) -> ExperienceMatchResult {
    let required_years = extract_required_years(posting_text);
    let (required_level, keywords) = infer_required_level(posting_text);

    let candidate_rank = candidate_level.rank();
    let required_rank = required_level.rank();
    let delta = candidate_rank - required_rank;

    let mut calculation = String::from("Experience Match Calculation:\n");
    calculation.push_str(&format!(
        "→ Your level: {candidate_level} (score: {candidate_rank})\n"
    ));
    calculation.push_str(&format!(
        "→ Job requires: {required_level} (score: {required_rank})\n"
    ));
    if required_years > 0 {
        calculation.push_str(&format!("→ Required years: {required_years}+\n"));
    }
    if !keywords.is_empty() {
        let shown: Vec<_> = keywords.iter().take(3).copied().collect();
        calculation.push_str(&format!("→ Keywords found: {}\n", shown.join(", ")));
    }

    let score = if delta == 0 {
        calculation.push_str("→ Perfect match: 100%");
        100.0
    } else if delta > 0 {
        let penalty = f64::from(delta) * 10.0;
        let score = (100.0 - penalty).max(70.0);
        calculation.push_str(&format!(
            "→ Overqualified penalty: -{penalty:.0}% = {score:.1}%"
        ));
        score
    } else {
        let penalty = f64::from(-delta) * 25.0;
        let score = (100.0 - penalty).max(20.0);
        calculation.push_str(&format!(
            "→ Underqualified penalty: -{penalty:.0}% = {score:.1}%"
        ));
        score
    };

    ExperienceMatchResult {
        score,
        required_level,
        required_years,
        calculation,
    }
}
