pub mod error;
pub mod export;
pub mod extraction;
pub mod logging;
pub mod matching;
pub mod skill_normalizer;

use serde::{Deserialize, Serialize};

/// Candidate seniority tier with an ordinal rank used by the experience matcher.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExperienceLevel {
    Junior,
    #[default]
    Mid,
    Senior,
    Director,
}

impl ExperienceLevel {
    /// Ordinal rank: junior=1, mid=2, senior=3, director=4.
    pub fn rank(self) -> i32 {
        match self {
            ExperienceLevel::Junior => 1,
            ExperienceLevel::Mid => 2,
            ExperienceLevel::Senior => 3,
            ExperienceLevel::Director => 4,
        }
    }
}

/// Structured résumé data supplied by the CV parser. Immutable per scoring run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    /// 0 means unknown.
    pub years_experience: u32,
    pub industries: Vec<String>,
    /// Informational only; never consumed by scoring.
    pub completeness_score: f64,
}

/// Per-run user preferences from the UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub remote_preference: bool,
    pub needs_visa: bool,
    /// Carried for collaborators; not used in the scoring formulas.
    pub target_level: Option<ExperienceLevel>,
    pub min_salary: Option<u32>,
}

/// One scraped job posting. Field names follow the upstream spreadsheet
/// export headers so rows deserialize without a mapping layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPosting {
    #[serde(rename = "Job ID")]
    pub job_id: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Vacancy Title")]
    pub title: String,
    #[serde(rename = "Job Description")]
    pub description: String,
    #[serde(rename = "Remote")]
    pub remote: bool,
    #[serde(rename = "Remote Prohibited")]
    pub remote_prohibited: bool,
    #[serde(rename = "Visa Sponsorship or Relocation")]
    pub visa_or_relocation: bool,
    #[serde(rename = "Days_Ago")]
    pub days_since_posted: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn level_ranks_are_ordered() {
        assert!(ExperienceLevel::Junior.rank() < ExperienceLevel::Mid.rank());
        assert!(ExperienceLevel::Mid.rank() < ExperienceLevel::Senior.rank());
        assert!(ExperienceLevel::Senior.rank() < ExperienceLevel::Director.rank());
    }

    #[test]
    fn level_parses_case_insensitively() {
        assert_eq!(
            ExperienceLevel::from_str("Senior").unwrap(),
            ExperienceLevel::Senior
        );
        assert_eq!(
            ExperienceLevel::from_str("DIRECTOR").unwrap(),
            ExperienceLevel::Director
        );
        assert!(ExperienceLevel::from_str("wizard").is_err());
    }

    #[test]
    fn posting_deserializes_spreadsheet_headers_with_defaults() {
        let posting: JobPosting = serde_json::from_str(
            r#"{"Company": "Acme", "Vacancy Title": "Planner", "Remote": true}"#,
        )
        .unwrap();

        assert_eq!(posting.company, "Acme");
        assert_eq!(posting.title, "Planner");
        assert!(posting.remote);
        assert!(!posting.remote_prohibited);
        assert_eq!(posting.days_since_posted, 0);
        assert!(posting.description.is_empty());
    }

    #[test]
    fn profile_defaults_to_mid_level() {
        let profile: CandidateProfile = serde_json::from_str(r#"{"skills": ["sql"]}"#).unwrap();
        assert_eq!(profile.experience_level, ExperienceLevel::Mid);
        assert_eq!(profile.years_experience, 0);
    }
}
