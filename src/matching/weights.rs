use serde::{Deserialize, Serialize};

/// Fixed component weights for the overall match score. Must sum to 1.0.
pub const MATCH_WEIGHTS: Weights = Weights {
    skill: 0.40,
    experience: 0.25,
    industry: 0.20,
    location: 0.15,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub skill: f64,
    pub experience: f64,
    pub industry: f64,
    pub location: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skill + self.experience + self.industry + self.location
    }
}
