//! Application layer errors.
//!
//! Failures in orchestration and I/O. Scanning and validation failures are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while reading sources or writing artifacts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("I/O error at {path}: {reason}")]
    IoFailure { path: PathBuf, reason: String },

    /// Artifact already exists and overwriting was not requested.
    #[error("Refusing to overwrite existing file {path}")]
    ArtifactExists { path: PathBuf },

    /// In-memory filesystem lock poisoned.
    #[error("Filesystem store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    pub fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::IoFailure {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::IoFailure { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the path exists and you have permission to read/write it".into(),
            ],
            Self::ArtifactExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite generated files".into(),
                "Or choose a different --output directory or --name".into(),
            ],
            Self::StoreLockError => vec![
                "An earlier write panicked while holding the in-memory store".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoFailure { .. } => ErrorCategory::Io,
            Self::ArtifactExists { .. } => ErrorCategory::Conflict,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
