//! Reference backends for the visualization API
//!
//! [`MemorySource`] keeps visualizations in memory; [`FileSource`] stores
//! one JSON document per visualization in a directory.

pub mod sources;

use dv_core::ApiError;
use thiserror::Error;
use tokio::task::JoinError;

// Re-exports
pub use sources::{FileSource, MemorySource};

/// Errors that can occur in backend operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Visualization not found: {0}")]
    NotFound(String),

    #[error("Invalid visualization id: {0}")]
    InvalidId(String),

    #[error("Join error: {0}")]
    Join(#[from] JoinError),
}

impl From<DataError> for ApiError {
    fn from(error: DataError) -> Self {
        let status = match &error {
            DataError::NotFound(_) => 404,
            DataError::InvalidId(_) => 400,
            DataError::Json(_) => 422,
            DataError::Io(_) | DataError::Join(_) => 500,
        };
        ApiError::with_status(status).with_message(error.to_string())
    }
}
