//! Unified error handling for uvmgen core.
//!
//! Wraps domain and application errors behind one type with categories and
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for uvmgen-core operations.
#[derive(Debug, Error, Clone)]
pub enum UvmgenError {
    /// Errors from the domain layer (scanning, descriptor validation).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, existing artifacts).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl UvmgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    /// Refusing to clobber something that already exists.
    Conflict,
    Io,
    Internal,
}

/// Convenient result type alias.
pub type UvmgenResult<T> = Result<T, UvmgenError>;
