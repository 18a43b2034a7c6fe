//! Error types

use thiserror::Error;

/// Shared error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Could not find a column for {field} (available columns: {available:?})")]
    ColumnNotFound {
        field: String,
        available: Vec<String>,
    },

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
