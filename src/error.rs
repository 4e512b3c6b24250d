use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("length mismatch: {labels} labels vs {scores} scores")]
    LengthMismatch { labels: usize, scores: usize },
    #[error("label at index {index} is {value}, expected 0 or 1")]
    NonBinaryLabel { index: usize, value: u8 },
    #[error("only one class present in labels; ROC AUC is not defined")]
    UndefinedAuc,
    #[error("score at index {index} is not finite")]
    NonFiniteScore { index: usize },
    #[error("empty input")]
    EmptyInput,
    #[error("report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MetricsError>;
