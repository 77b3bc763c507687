pub mod experience;
pub mod industry;
pub mod location;
pub mod pipeline;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use pipeline::rank_postings;
pub use scoring::{CalculationDetails, JobMatch, MatchEngine};
pub use skills::SkillMatcher;
