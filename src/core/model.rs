//! Result model
//!
//! A run either produces a [`VowelReport`] or fails with exactly one
//! [`RunError`]. The `Display` of each error is the line shown to the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::file_reader::ReadError;
use crate::core::tokenizer::TokenStats;

/// Successful outcome of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VowelReport {
    /// Input path as given by the caller
    pub path: String,

    /// Full raw text of the file
    pub content: String,

    /// Unique vowel words in first-seen order
    pub words: Vec<String>,

    /// Per-stage token counts
    pub stats: TokenStats,
}

/// Terminal failure of one run
#[derive(Debug, Error)]
pub enum RunError {
    #[error("File does not exist: {0}")]
    MissingFile(String),

    #[error("Unable to read the file: {0}")]
    Read(#[from] ReadError),

    #[error("An error occurred: {0}")]
    Unexpected(String),
}

impl RunError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            RunError::MissingFile(_) => "MISSING_FILE",
            RunError::Read(_) => "READ_ERROR",
            RunError::Unexpected(_) => "UNEXPECTED_ERROR",
        }
    }

    /// Classify a failure coming out of the reader capability
    pub fn from_reader(err: anyhow::Error) -> Self {
        match err.downcast::<ReadError>() {
            Ok(read) => RunError::Read(read),
            Err(other) => RunError::Unexpected(other.to_string()),
        }
    }
}

/// Serialized form of a [`RunError`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
}

impl From<&RunError> for ErrorInfo {
    fn from(err: &RunError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}
