//! Error types for Sumbox

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SumboxError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("No input given. Pass a JSON document or use --file")]
    MissingInput,
}

pub type Result<T> = std::result::Result<T, SumboxError>;
