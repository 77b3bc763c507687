use thiserror::Error;

/// Failures of the crate's outer surfaces (file/JSON/CSV I/O). The scoring
/// core itself degrades to documented defaults instead of erroring.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}
