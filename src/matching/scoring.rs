use serde::{Deserialize, Serialize};

use super::{
    experience::match_experience,
    industry::match_industry,
    location::match_location,
    pipeline::priority_score,
    skills::SkillMatcher,
    weights::{Weights, MATCH_WEIGHTS},
};
use crate::{extraction::extract_skills, CandidateProfile, ExperienceLevel, JobPosting, UserPreferences};

/// Literal intermediate numbers and the textual justification behind every
/// component score. Audit output only; never read back by scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationDetails {
    pub total_job_skills: usize,
    pub matched_skills_count: usize,
    pub skill_calculation: String,

    pub candidate_experience_level: ExperienceLevel,
    pub required_experience_level: ExperienceLevel,
    pub experience_calculation: String,

    pub candidate_industries: Vec<String>,
    pub industry_calculation: String,

    pub remote_preference: bool,
    pub job_remote: bool,
    pub visa_needed: bool,
    pub job_visa: bool,
    pub location_calculation: String,

    pub score_weights: Weights,
    pub weighted_calculation: String,
}

/// One scored posting. Immutable once produced; ordering happens in the
/// ranking pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub job_id: String,
    pub company: String,
    pub title: String,
    /// Overall weighted score, 0–100.
    pub match_score: f64,
    pub skill_match_score: f64,
    pub experience_match_score: f64,
    pub industry_match_score: f64,
    pub location_match_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_reasons: Vec<String>,
    /// Top missing skills worth closing first.
    pub skill_gaps: Vec<String>,
    pub career_growth_indicator: String,
    pub recommendation: String,
    /// Overall score adjusted for posting freshness, 0–100.
    pub priority_score: f64,
    pub calculation_details: CalculationDetails,
}

/// Scores one posting against one profile and preference set. Holds no
/// cross-call state beyond the fuzzy capability resolved at construction.
pub struct MatchEngine {
    skill_matcher: SkillMatcher,
    weights: Weights,
}

impl MatchEngine {
    pub fn new(skill_matcher: SkillMatcher) -> Self {
        Self {
            skill_matcher,
            weights: MATCH_WEIGHTS,
        }
    }

    pub fn from_env() -> Self {
        Self::new(SkillMatcher::from_env())
    }

    /// Run all four matchers, combine their scores with the fixed weights
    /// and produce the fully explained match record.
    pub fn score_posting(
        &self,
        profile: &CandidateProfile,
        preferences: &UserPreferences,
        posting: &JobPosting,
    ) -> JobMatch {
        let job_skills = extract_skills(&posting.description);

        let skills = self.skill_matcher.match_skills(&profile.skills, &job_skills);
        let experience = match_experience(
            profile.experience_level,
            profile.years_experience,
            &posting.description,
        );
        let industry = match_industry(&profile.industries, &posting.description, &posting.company);
        let location = match_location(posting, preferences);

        let weights = self.weights;
        let match_score = skills.score * weights.skill
            + experience.score * weights.experience
            + industry.score * weights.industry
            + location.score * weights.location;

        let weighted_calculation = format!(
            "Final Score Calculation (Weighted Average):\n\
             → Skills: {:.1}% × {} = {:.1}\n\
             → Experience: {:.1}% × {} = {:.1}\n\
             → Industry: {:.1}% × {} = {:.1}\n\
             → Location: {:.1}% × {} = {:.1}\n\
             → Total: {:.1}%",
            skills.score,
            weights.skill,
            skills.score * weights.skill,
            experience.score,
            weights.experience,
            experience.score * weights.experience,
            industry.score,
            weights.industry,
            industry.score * weights.industry,
            location.score,
            weights.location,
            location.score * weights.location,
            match_score
        );

        let calculation_details = CalculationDetails {
            total_job_skills: job_skills.len(),
            matched_skills_count: skills.matched_skills.len(),
            skill_calculation: skills.calculation.clone(),
            candidate_experience_level: profile.experience_level,
            required_experience_level: experience.required_level,
            experience_calculation: experience.calculation.clone(),
            candidate_industries: profile.industries.clone(),
            industry_calculation: industry.calculation.clone(),
            remote_preference: preferences.remote_preference,
            job_remote: posting.remote,
            visa_needed: preferences.needs_visa,
            job_visa: posting.visa_or_relocation,
            location_calculation: location.calculation.clone(),
            score_weights: weights,
            weighted_calculation,
        };

        let match_reasons = build_match_reasons(
            skills.score,
            skills.matched_skills.len(),
            experience.score,
            industry.score,
            location.score,
        );
        let skill_gaps: Vec<String> = skills.missing_skills.iter().take(3).cloned().collect();

        JobMatch {
            job_id: posting.job_id.clone(),
            company: posting.company.clone(),
            title: posting.title.clone(),
            match_score,
            skill_match_score: skills.score,
            experience_match_score: experience.score,
            industry_match_score: industry.score,
            location_match_score: location.score,
            matched_skills: skills.matched_skills,
            missing_skills: skills.missing_skills,
            match_reasons,
            skill_gaps,
            career_growth_indicator: career_growth_indicator(
                profile.experience_level,
                &posting.description,
            )
            .to_string(),
            recommendation: recommendation(match_score).to_string(),
            priority_score: priority_score(match_score, posting.days_since_posted),
            calculation_details,
        }
    }
}

/// Advisory string derived from the overall score; fixed thresholds.
pub fn recommendation(match_score: f64) -> &'static str {
    if match_score >= 85.0 {
        "Excellent match - Apply immediately"
    } else if match_score >= 70.0 {
        "Strong match - Priority application"
    } else if match_score >= 55.0 {
        "Good match - Consider applying"
    } else if match_score >= 40.0 {
        "Moderate match - Review skill gaps"
    } else {
        "Poor match - Focus on skill development"
    }
}

/// Purely descriptive growth hint comparing the candidate's level with
/// seniority wording in the posting text. Never affects scoring.
pub fn career_growth_indicator(level: ExperienceLevel, posting_text: &str) -> &'static str {
    const SENIOR_INDICATORS: &[&str] =
        &["senior", "lead", "principal", "manager", "director", "head of"];

    let text = posting_text.to_lowercase();
    let has_senior_role = SENIOR_INDICATORS.iter().any(|kw| text.contains(kw));
    let contains_any = |kws: &[&str]| kws.iter().any(|kw| text.contains(kw));

    if level == ExperienceLevel::Junior && has_senior_role {
        "Career advancement opportunity"
    } else if level == ExperienceLevel::Mid && contains_any(&["director", "head of", "vp"]) {
        "Leadership growth path"
    } else if level == ExperienceLevel::Senior && contains_any(&["vp", "chief", "executive"]) {
        "Executive level promotion"
    } else if has_senior_role {
        "Lateral move with growth potential"
    } else {
        "Skill development focus"
    }
}

fn build_match_reasons(
    skill_score: f64,
    matched_count: usize,
    experience_score: f64,
    industry_score: f64,
    location_score: f64,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if skill_score > 80.0 {
        reasons.push(format!("Strong skills match ({matched_count} skills aligned)"));
    } else if skill_score > 60.0 {
        reasons.push("Good skills match with some gaps".into());
    } else if skill_score > 30.0 {
        reasons.push("Partial skills match - learning opportunity".into());
    } else {
        reasons.push("Limited skills match - significant training needed".into());
    }

    if experience_score > 90.0 {
        reasons.push("Perfect experience level match".into());
    } else if experience_score > 70.0 {
        reasons.push("Good experience level fit".into());
    } else if experience_score < 50.0 {
        reasons.push("Experience level mismatch".into());
    }

    if industry_score > 80.0 {
        reasons.push("Strong industry alignment".into());
    } else if industry_score < 50.0 {
        reasons.push("Different industry - career pivot opportunity".into());
    }

    if location_score > 80.0 {
        reasons.push("Excellent location/work arrangement fit".into());
    } else if location_score < 40.0 {
        reasons.push("Location/work arrangement may not be ideal".into());
    }

    reasons
}
