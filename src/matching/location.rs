use crate::{JobPosting, UserPreferences};

#[derive(Debug, Clone, PartialEq)]
pub struct LocationMatchResult {
    /// 0–100.
    pub score: f64,
    pub calculation: String,
}

/// Score remote-work and visa preference alignment. Base 50; each arm
/// applies its first matching rule only; result clamped to [0, 100].
pub fn match_location(posting: &JobPosting, preferences: &UserPreferences) -> LocationMatchResult {
    let mut score: f64 = 50.0;
    let mut adjustments: Vec<String> = Vec::new();

    if preferences.remote_preference && posting.remote && !posting.remote_prohibited {
        score += 30.0;
        adjustments.push("remote preference satisfied: +30".into());
    } else if preferences.remote_preference && posting.remote_prohibited {
        score -= 20.0;
        adjustments.push("remote prohibited against preference: -20".into());
    } else if !preferences.remote_preference && !posting.remote {
        score += 10.0;
        adjustments.push("on-site preference satisfied: +10".into());
    }

    if preferences.needs_visa && posting.visa_or_relocation {
        score += 20.0;
        adjustments.push("visa/relocation offered: +20".into());
    } else if preferences.needs_visa && !posting.visa_or_relocation {
        score -= 30.0;
        adjustments.push("visa needed but not offered: -30".into());
    } else if !preferences.needs_visa {
        score += 5.0;
        adjustments.push("visa not an issue: +5".into());
    }

    let score = score.clamp(0.0, 100.0);
    let calculation = if adjustments.is_empty() {
        format!("Location match: base 50 → {score:.1}%")
    } else {
        format!("Location match: base 50, {} → {score:.1}%", adjustments.join(", "))
    };

    LocationMatchResult { score, calculation }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(remote: bool, prohibited: bool, visa: bool) -> JobPosting {
        JobPosting {
            remote,
            remote_prohibited: prohibited,
            visa_or_relocation: visa,
            ..JobPosting::default()
        }
    }

    fn prefs(remote: bool, visa: bool) -> UserPreferences {
        UserPreferences {
            remote_preference: remote,
            needs_visa: visa,
            ..UserPreferences::default()
        }
    }

    #[test]
    fn remote_match_without_visa_need_scores_85() {
        let result = match_location(&posting(true, false, false), &prefs(true, false));
        assert_eq!(result.score, 85.0);
    }

    #[test]
    fn remote_prohibited_penalizes_remote_seekers() {
        // 50 - 20 + 5 = 35
        let result = match_location(&posting(true, true, false), &prefs(true, false));
        assert_eq!(result.score, 35.0);
    }

    #[test]
    fn onsite_preference_gets_a_small_bonus() {
        // 50 + 10 + 5 = 65
        let result = match_location(&posting(false, false, false), &prefs(false, false));
        assert_eq!(result.score, 65.0);
    }

    #[test]
    fn visa_sponsorship_rewards_those_who_need_it() {
        // 50 + 30 + 20 = 100
        let result = match_location(&posting(true, false, true), &prefs(true, true));
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn missing_visa_support_is_the_biggest_penalty() {
        // 50 - 30 = 20 (no remote rule applies: pref=false but job remote)
        let result = match_location(&posting(true, false, false), &prefs(false, true));
        assert_eq!(result.score, 20.0);
    }

    #[test]
    fn score_stays_in_range() {
        for remote in [false, true] {
            for prohibited in [false, true] {
                for visa in [false, true] {
                    for pref_remote in [false, true] {
                        for pref_visa in [false, true] {
                            let result = match_location(
                                &posting(remote, prohibited, visa),
                                &prefs(pref_remote, pref_visa),
                            );
                            assert!((0.0..=100.0).contains(&result.score));
                        }
                    }
                }
            }
        }
    }
}
