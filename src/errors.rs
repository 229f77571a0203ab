use thiserror::Error;

/// Error type that captures journal validation and persistence failures.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid record field(s): {}", fields.join(", "))]
    InvalidRecord { fields: Vec<String> },
    #[error("Category name cannot be empty")]
    EmptyCategoryName,
    #[error("Category `{0}` already exists")]
    DuplicateCategory(String),
}
