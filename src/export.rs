//! Flat tabular export of ranked matches, one row per posting, for
//! spreadsheet-bound collaborators.

use std::io::Write;

use crate::error::MatchError;
use crate::matching::JobMatch;

const HEADERS: &[&str] = &[
    "Job ID",
    "Company",
    "Vacancy Title",
    "Match Score",
    "Skill Score",
    "Experience Score",
    "Industry Score",
    "Location Score",
    "Priority Score",
    "Matched Skills",
    "Missing Skills",
    "Skill Gaps",
    "Career Growth",
    "Recommendation",
    "Match Reasons",
    "Skill Calculation",
    "Experience Calculation",
    "Industry Calculation",
    "Location Calculation",
    "Weighted Calculation",
];

fn pct(score: f64) -> String {
    format!("{score:.1}")
}

/// Write ranked matches as CSV. Component scores are formatted to one
/// decimal place; list fields are comma-joined; calculation traces are
/// flattened to single-line text columns.
pub fn write_matches_csv<W: Write>(writer: W, matches: &[JobMatch]) -> Result<(), MatchError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADERS)?;

    for m in matches {
        let details = &m.calculation_details;
        let record = vec![
            m.job_id.clone(),
            m.company.clone(),
            m.title.clone(),
            pct(m.match_score),
            pct(m.skill_match_score),
            pct(m.experience_match_score),
            pct(m.industry_match_score),
            pct(m.location_match_score),
            pct(m.priority_score),
            m.matched_skills.join(", "),
            m.missing_skills.join(", "),
            m.skill_gaps.join(", "),
            m.career_growth_indicator.clone(),
            m.recommendation.clone(),
            m.match_reasons.join("; "),
            flatten(&details.skill_calculation),
            flatten(&details.experience_calculation),
            flatten(&details.industry_calculation),
            flatten(&details.location_calculation),
            flatten(&details.weighted_calculation),
        ];
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn flatten(trace: &str) -> String {
    trace.replace('\n', " | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{rank_postings, MatchEngine};
    use crate::{CandidateProfile, JobPosting, UserPreferences};

    fn sample_matches() -> Vec<JobMatch> {
        let profile = CandidateProfile {
            skills: vec!["anaplan".into(), "sql".into()],
            ..CandidateProfile::default()
        };
        let postings = vec![JobPosting {
            job_id: "42".into(),
            company: "Acme".into(),
            title: "Planner".into(),
            description: "Anaplan and SQL, demand planning".into(),
            days_since_posted: 1,
            ..JobPosting::default()
        }];
        rank_postings(
            &MatchEngine::from_env(),
            &profile,
            &UserPreferences::default(),
            &postings,
        )
    }

    #[test]
    fn writes_header_and_one_row_per_match() {
        let mut buffer = Vec::new();
        write_matches_csv(&mut buffer, &sample_matches()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Job ID,Company,Vacancy Title"));
        assert!(lines[1].contains("Acme"));
    }

    #[test]
    fn scores_are_formatted_to_one_decimal() {
        let mut buffer = Vec::new();
        write_matches_csv(&mut buffer, &sample_matches()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let row = text.lines().nth(1).unwrap();
        // Every numeric column carries exactly one decimal place.
        assert!(row.split(',').any(|field| field == "100.0"));
    }

    #[test]
    fn traces_are_flattened_to_single_lines() {
        let mut buffer = Vec::new();
        write_matches_csv(&mut buffer, &sample_matches()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains(" | "));
    }

    #[test]
    fn empty_batch_writes_header_only() {
        let mut buffer = Vec::new();
        write_matches_csv(&mut buffer, &[]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
