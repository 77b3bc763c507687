use std::cmp::Ordering;

use tracing::debug;

use super::scoring::{JobMatch, MatchEngine};
use crate::{CandidateProfile, JobPosting, UserPreferences};

/// Priority adjustment for how recently a posting went up.
pub fn freshness_bonus(days_since_posted: u32) -> f64 {
    if days_since_posted <= 1 {
        15.0
    } else if days_since_posted <= 3 {
        10.0
    } else if days_since_posted <= 7 {
        5.0
    } else if days_since_posted > 30 {
        -10.0
    } else {
        0.0
    }
}

/// Overall score adjusted for freshness, clamped to [0, 100].
pub fn priority_score(match_score: f64, days_since_posted: u32) -> f64 {
    (match_score + freshness_bonus(days_since_posted)).clamp(0.0, 100.0)
}

/// Score every posting in the batch and return the matches ordered by
/// priority, highest first. Exact priority ties break by company name then
/// title so the ordering never depends on upstream input order.
pub fn rank_postings(
    engine: &MatchEngine,
    profile: &CandidateProfile,
    preferences: &UserPreferences,
    postings: &[JobPosting],
) -> Vec<JobMatch> {
    let mut matches: Vec<JobMatch> = postings
        .iter()
        .map(|posting| engine.score_posting(profile, preferences, posting))
        .collect();

    matches.sort_by(|a, b| {
        match b
            .priority_score
            .partial_cmp(&a.priority_score)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => a.company.cmp(&b.company).then_with(|| a.title.cmp(&b.title)),
            other => other,
        }
    });

    debug!(postings = postings.len(), "ranked posting batch");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExperienceLevel;

    fn profile() -> CandidateProfile {
        CandidateProfile {
            skills: vec!["anaplan".into(), "excel".into()],
            experience_level: ExperienceLevel::Mid,
            ..CandidateProfile::default()
        }
    }

    fn posting(company: &str, title: &str, days: u32) -> JobPosting {
        JobPosting {
            job_id: format!("{company}-{title}"),
            company: company.into(),
            title: title.into(),
            description: "Anaplan specialist, demand planning".into(),
            days_since_posted: days,
            ..JobPosting::default()
        }
    }

    #[test]
    fn freshness_bonus_tiers() {
        assert_eq!(freshness_bonus(0), 15.0);
        assert_eq!(freshness_bonus(1), 15.0);
        assert_eq!(freshness_bonus(3), 10.0);
        assert_eq!(freshness_bonus(7), 5.0);
        assert_eq!(freshness_bonus(14), 0.0);
        assert_eq!(freshness_bonus(30), 0.0);
        assert_eq!(freshness_bonus(31), -10.0);
    }

    #[test]
    fn priority_clamps_to_100() {
        assert_eq!(priority_score(60.0, 0), 75.0);
        assert_eq!(priority_score(95.0, 0), 100.0);
        assert_eq!(priority_score(5.0, 60), 0.0);
    }

    #[test]
    fn fresher_posting_outranks_identical_stale_one() {
        let engine = MatchEngine::from_env();
        let postings = vec![
            posting("Acme", "Planner", 45),
            posting("Beta", "Planner", 0),
        ];
        let ranked = rank_postings(&engine, &profile(), &UserPreferences::default(), &postings);
        assert_eq!(ranked[0].company, "Beta");
        assert!(ranked[0].priority_score > ranked[1].priority_score);
    }

    #[test]
    fn exact_ties_break_by_company_then_title() {
        let engine = MatchEngine::from_env();
        let postings = vec![
            posting("Zeta", "Planner", 2),
            posting("Acme", "Planner", 2),
            posting("Acme", "Analyst", 2),
        ];
        let ranked = rank_postings(&engine, &profile(), &UserPreferences::default(), &postings);
        let order: Vec<(&str, &str)> = ranked
            .iter()
            .map(|m| (m.company.as_str(), m.title.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![("Acme", "Analyst"), ("Acme", "Planner"), ("Zeta", "Planner")]
        );
    }

    #[test]
    fn empty_batch_ranks_to_empty() {
        let engine = MatchEngine::from_env();
        let ranked = rank_postings(&engine, &profile(), &UserPreferences::default(), &[]);
        assert!(ranked.is_empty());
    }
}
