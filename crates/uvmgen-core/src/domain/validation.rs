use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::error::DomainError;

/// Verilog simple identifier. Module and port names may carry `$` after the
/// first character; the scanner matches names with this same pattern.
pub(crate) const HDL_IDENT: &str = r"[A-Za-z_][A-Za-z0-9_$]*";

static HDL_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{HDL_IDENT}$")).expect("identifier regex"));

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// `env_name` feeds every identifier and file name, so it must be a
    /// plain identifier: `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn validate_env_name(name: &str) -> Result<(), DomainError> {
        Self::validate_identifier("env_name", name)
    }

    pub fn validate_module_name(name: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::malformed("dut_module", "must not be empty"));
        }
        if !HDL_IDENTIFIER.is_match(name) {
            return Err(DomainError::malformed(
                "dut_module",
                format!("'{name}' is not a Verilog identifier"),
            ));
        }
        Ok(())
    }

    pub fn validate_dut_file(file: &str) -> Result<(), DomainError> {
        if file.trim().is_empty() {
            return Err(DomainError::malformed("dut_file", "must not be empty"));
        }
        if file.contains('"') || file.contains('\n') {
            return Err(DomainError::malformed(
                "dut_file",
                format!("'{file}' cannot appear inside an `include string"),
            ));
        }
        Ok(())
    }

    pub fn validate_agent_count(count: u32) -> Result<(), DomainError> {
        if count == 0 {
            return Err(DomainError::malformed(
                "agent_count",
                "must be at least 1 (the environment needs one agent to connect the scoreboard)",
            ));
        }
        Ok(())
    }

    pub fn validate_file_extension(ext: &str) -> Result<(), DomainError> {
        if ext.is_empty() {
            return Err(DomainError::malformed("file_extension", "must not be empty"));
        }
        if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::malformed(
                "file_extension",
                format!("'{ext}' must be alphanumeric without a leading dot"),
            ));
        }
        Ok(())
    }

    fn validate_identifier(field: &'static str, name: &str) -> Result<(), DomainError> {
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return Err(DomainError::malformed(field, "must not be empty"));
        };
        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(DomainError::malformed(
                field,
                format!("'{name}' must start with a letter or '_'"),
            ));
        }
        if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(DomainError::malformed(
                field,
                format!("'{name}' contains invalid character '{bad}'"),
            ));
        }
        Ok(())
    }
}
