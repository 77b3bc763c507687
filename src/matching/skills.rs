use std::collections::HashSet;

use tracing::warn;

use crate::skill_normalizer::{expand_skill, normalize_skill, normalize_skill_set};

fn fuzzy_threshold() -> f64 {
    std::env::var("JM_FUZZY_THRESHOLD")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(75.0)
}

/// Optional approximate string matching capability. Resolved once when the
/// matcher is constructed; when absent the matcher degrades to direct
/// synonym matching only.
pub trait FuzzyScorer: Send + Sync {
    fn name(&self) -> &'static str;
    /// Similarity ratio in [0, 100].
    fn ratio(&self, a: &str, b: &str) -> f64;
}

/// Normalized Damerau–Levenshtein similarity scaled to 0–100.
pub struct LevenshteinScorer;

impl FuzzyScorer for LevenshteinScorer {
    fn name(&self) -> &'static str {
        "normalized_damerau_levenshtein"
    }

    fn ratio(&self, a: &str, b: &str) -> f64 {
        strsim::normalized_damerau_levenshtein(a, b) * 100.0
    }
}

/// Build the default fuzzy capability, honoring `JM_DISABLE_FUZZY` so the
/// degraded direct-only path stays reachable in production and tests.
pub fn create_fuzzy_scorer() -> Option<Box<dyn FuzzyScorer>> {
    let disabled = std::env::var("JM_DISABLE_FUZZY")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if disabled {
        None
    } else {
        Some(Box::new(LevenshteinScorer))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchResult {
    /// 0–100.
    pub score: f64,
    /// Canonical posting skills the candidate covers. Approximate matches
    /// are annotated as `"skill (~candidate_skill)"`.
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub direct_matches: usize,
    pub fuzzy_matches: usize,
    pub calculation: String,
}

pub struct SkillMatcher {
    fuzzy: Option<Box<dyn FuzzyScorer>>,
    threshold: f64,
}

impl SkillMatcher {
    pub fn new(fuzzy: Option<Box<dyn FuzzyScorer>>) -> Self {
        if fuzzy.is_none() {
            warn!("approximate skill matching unavailable; direct matches only");
        }
        Self {
            fuzzy,
            threshold: fuzzy_threshold(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(create_fuzzy_scorer())
    }

    pub fn fuzzy_enabled(&self) -> bool {
        self.fuzzy.is_some()
    }

    /// Compare candidate skills against a posting's extracted skill set.
    ///
    /// A posting with zero extracted skills scores 0: a posting that states
    /// no requirement cannot be satisfied. Matched and missing lists
    /// together always reconstruct the full posting skill set.
    pub fn match_skills(
        &self,
        candidate_skills: &[String],
        posting_skills: &[String],
    ) -> SkillMatchResult {
        if posting_skills.is_empty() {
            return SkillMatchResult {
                score: 0.0,
                matched_skills: vec![],
                missing_skills: vec![],
                direct_matches: 0,
                fuzzy_matches: 0,
                calculation: "No skills required by posting → 0% match".into(),
            };
        }

        let candidate_norm = normalize_skill_set(candidate_skills);

        // Dedupe posting skills by canonical form, preserving input order.
        let mut posting_canon: Vec<String> = Vec::new();
        let mut seen = HashSet::new();
        for skill in posting_skills {
            let canonical = normalize_skill(skill);
            if seen.insert(canonical.clone()) {
                posting_canon.push(canonical);
            }
        }
        let total = posting_canon.len();

        let mut matched_skills = Vec::new();
        let mut missing_skills = Vec::new();
        let mut direct_matches = 0;
        for skill in posting_canon {
            if expand_skill(&skill).iter().any(|s| candidate_norm.contains(s)) {
                matched_skills.push(skill);
                direct_matches += 1;
            } else {
                missing_skills.push(skill);
            }
        }

        let mut fuzzy_matches = 0;
        if let Some(scorer) = &self.fuzzy {
            if !candidate_skills.is_empty() {
                missing_skills.retain(|missing| {
                    match best_fuzzy_match(scorer.as_ref(), missing, candidate_skills) {
                        Some((candidate, ratio)) if ratio > self.threshold => {
                            matched_skills.push(format!("{missing} (~{candidate})"));
                            fuzzy_matches += 1;
                            false
                        }
                        _ => true,
                    }
                });
            }
        }

        let score = matched_skills.len() as f64 / total as f64 * 100.0;

        let mut calculation = format!(
            "Skills Match: {}/{} = {:.1}%\n→ Direct matches: {}\n",
            matched_skills.len(),
            total,
            score,
            direct_matches
        );
        if fuzzy_matches > 0 {
            calculation.push_str(&format!("→ Similar skills: {fuzzy_matches}\n"));
        }
        calculation.push_str(&format!("→ Missing skills: {}", missing_skills.len()));

        SkillMatchResult {
            score,
            matched_skills,
            missing_skills,
            direct_matches,
            fuzzy_matches,
            calculation,
        }
    }
}

/// Best similarity between a missing posting skill and the candidate's
/// skills (canonical forms). Ties keep the earliest candidate skill so the
/// annotation is deterministic.
fn best_fuzzy_match(
    scorer: &dyn FuzzyScorer,
    missing: &str,
    candidate_skills: &[String],
) -> Option<(String, f64)> {
    let mut best: Option<(String, f64)> = None;
    for skill in candidate_skills {
        let canonical = normalize_skill(skill);
        if canonical.is_empty() {
            continue;
        }
        let ratio = scorer.ratio(missing, &canonical);
        match &best {
            Some((_, best_ratio)) if ratio <= *best_ratio => {}
            _ => best = Some((canonical, ratio)),
        }
    }
    best
}
