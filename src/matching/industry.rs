/// Industry category → keywords signalling that category in posting text or
/// the employer name.
static INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "supply chain",
        &["supply chain", "logistics", "procurement", "distribution"],
    ),
    (
        "manufacturing",
        &["manufacturing", "production", "factory", "automotive"],
    ),
    (
        "retail",
        &["retail", "consumer goods", "fmcg", "cpg", "e-commerce"],
    ),
    (
        "technology",
        &["technology", "software", "tech", "saas", "digital"],
    ),
    (
        "consulting",
        &["consulting", "advisory", "deloitte", "mckinsey", "pwc"],
    ),
    (
        "finance",
        &["finance", "banking", "investment", "financial services"],
    ),
];

#[derive(Debug, Clone, PartialEq)]
pub struct IndustryMatchResult {
    /// 0–100.
    pub score: f64,
    pub direct_matches: usize,
    pub calculation: String,
}

/// Score topical alignment between the candidate's industry labels and the
/// posting text plus employer name.
///
/// No candidate industries is neutral (50), not a penalty. Absence of any
/// keyword signal scores 40 rather than 0: a missing keyword does not prove
/// a missing fit.
pub fn match_industry(
    candidate_industries: &[String],
    posting_text: &str,
    company: &str,
) -> IndustryMatchResult {
    if candidate_industries.is_empty() {
        return IndustryMatchResult {
            score: 50.0,
            direct_matches: 0,
            calculation: "No candidate industry info → neutral 50%".into(),
        };
    }

    let text = format!("{posting_text} {company}").to_lowercase();
    let claimed: Vec<String> = candidate_industries
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();

    let mut direct_matches = 0;
    for (category, keywords) in INDUSTRY_KEYWORDS {
        if claimed.iter().any(|c| c.as_str() == *category)
            && keywords.iter().any(|kw| text.contains(kw))
        {
            direct_matches += 1;
        }
    }

    if direct_matches > 0 {
        let score = (80.0 + direct_matches as f64 * 10.0).min(100.0);
        return IndustryMatchResult {
            score,
            direct_matches,
            calculation: format!(
                "Industry match: {direct_matches} category keyword hit(s) → {score:.1}%"
            ),
        };
    }

    for industry in &claimed {
        if !industry.is_empty() && text.contains(industry.as_str()) {
            return IndustryMatchResult {
                score: 70.0,
                direct_matches: 0,
                calculation: format!("Industry partial match: \"{industry}\" appears in posting → 70%"),
            };
        }
    }

    IndustryMatchResult {
        score: 40.0,
        direct_matches: 0,
        calculation: "No industry alignment signal → 40%".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_candidate_industries_is_neutral() {
        let result = match_industry(&[], "logistics role", "Acme");
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn direct_category_hits_raise_the_score() {
        let result = match_industry(
            &["supply chain".into()],
            "We run global logistics and procurement.",
            "Acme",
        );
        assert_eq!(result.direct_matches, 1);
        assert_eq!(result.score, 90.0);
    }

    #[test]
    fn multiple_categories_cap_at_100() {
        let industries = vec![
            "supply chain".to_string(),
            "manufacturing".to_string(),
            "technology".to_string(),
        ];
        let result = match_industry(
            &industries,
            "Logistics software for factory automation",
            "Acme Tech",
        );
        assert_eq!(result.direct_matches, 3);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn substring_fallback_scores_70() {
        let result = match_industry(
            &["aerospace".into()],
            "Join the leading aerospace supplier.",
            "SkyCorp",
        );
        assert_eq!(result.score, 70.0);
    }

    #[test]
    fn employer_name_counts_as_signal_text() {
        let result = match_industry(&["consulting".into()], "Great role.", "Deloitte");
        assert_eq!(result.direct_matches, 1);
        assert_eq!(result.score, 90.0);
    }

    #[test]
    fn no_signal_scores_40() {
        let result = match_industry(&["healthcare".into()], "Plan our demand.", "Acme");
        assert_eq!(result.score, 40.0);
    }
}
