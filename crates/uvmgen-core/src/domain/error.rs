// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry into reports)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Scanner Errors
    // ========================================================================
    /// No module header matched. `target` is the requested name, if any;
    /// `available` lists every header seen while scanning.
    #[error("{}", module_not_found_message(.target))]
    ModuleNotFound {
        target: Option<String>,
        available: Vec<String>,
    },

    #[error("Module '{module}' declares no recognizable ports")]
    NoPortsFound { module: String },

    #[error("Module '{module}' has no 'endmodule' before end of input")]
    UnterminatedModule { module: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Malformed environment descriptor: {field} {reason}")]
    MalformedDescriptor { field: &'static str, reason: String },

    #[error("Invalid port: {0}")]
    InvalidPort(String),
}

fn module_not_found_message(target: &Option<String>) -> String {
    match target {
        Some(name) => format!("Module '{name}' not found"),
        None => "No module declaration found".to_string(),
    }
}

impl DomainError {
    /// Shorthand for a descriptor validation failure.
    pub fn malformed(field: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedDescriptor {
            field,
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ModuleNotFound { target, available } => {
                let mut out = Vec::new();
                if available.is_empty() {
                    out.push("The source contains no 'module <name>' header".into());
                    out.push("Check that you passed the HDL file, not a header or filelist".into());
                } else {
                    if let Some(name) = target {
                        out.push(format!("No module named '{name}' was declared"));
                    }
                    out.push("Modules declared in this file:".into());
                    for name in available {
                        out.push(format!("  • {name}"));
                    }
                    out.push("Pick one with --top <MODULE>".into());
                }
                out
            }
            Self::NoPortsFound { module } => vec![
                format!("'{module}' was found but no input/output/inout lines were recognized"),
                "Ports must start a line with their direction keyword".into(),
                "Drop --strict to accept a port-less module".into(),
            ],
            Self::UnterminatedModule { module } => vec![
                format!("Add 'endmodule' after the body of '{module}'"),
                "Drop --strict to accept a truncated file".into(),
            ],
            Self::MalformedDescriptor { field, .. } => vec![
                format!("Fix the '{field}' value and try again"),
                "Names may contain only letters, digits and '_' and must not start with a digit"
                    .into(),
            ],
            Self::InvalidPort(msg) => vec![format!("Details: {msg}")],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModuleNotFound { .. } => ErrorCategory::NotFound,
            Self::NoPortsFound { .. }
            | Self::UnterminatedModule { .. }
            | Self::MalformedDescriptor { .. }
            | Self::InvalidPort(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_not_found_message_names_target() {
        let err = DomainError::ModuleNotFound {
            target: Some("alu".into()),
            available: vec!["fifo".into()],
        };
        assert_eq!(err.to_string(), "Module 'alu' not found");
        assert!(err.suggestions().iter().any(|s| s.contains("fifo")));
    }

    #[test]
    fn module_not_found_without_target() {
        let err = DomainError::ModuleNotFound {
            target: None,
            available: vec![],
        };
        assert_eq!(err.to_string(), "No module declaration found");
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn malformed_descriptor_is_validation() {
        let err = DomainError::malformed("env_name", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Malformed environment descriptor: env_name must not be empty"
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
