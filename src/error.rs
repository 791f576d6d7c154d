use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Catalog is missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid catalog record at row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },

    #[error("Catalog contains no food items")]
    EmptyCatalog,

    #[error("Invalid meal distribution: {0}")]
    InvalidDistribution(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
