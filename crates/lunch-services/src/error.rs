//! Store error types.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the backing-file stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file is missing or could not be parsed.
    #[error("Data unavailable at {}: {reason}", .path.display())]
    DataUnavailable { path: PathBuf, reason: String },

    /// Writing the backing file failed. The in-memory change stands.
    #[error("Failed to persist {}: {reason}", .path.display())]
    Persistence { path: PathBuf, reason: String },

    /// Writing the backing file failed and the change was dropped with it.
    #[error("Failed to save {}, change discarded: {reason}", .path.display())]
    Discarded { path: PathBuf, reason: String },

    /// Input rejected before anything changed.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl StoreError {
    pub fn data_unavailable(path: &Path, reason: impl ToString) -> Self {
        Self::DataUnavailable {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn persistence(path: &Path, reason: impl ToString) -> Self {
        Self::Persistence {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Turn a write failure into one whose change did not survive.
    pub fn discarded(self) -> Self {
        match self {
            Self::Persistence { path, reason } => Self::Discarded { path, reason },
            other => other,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// True when the operation took effect in memory despite the error.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
