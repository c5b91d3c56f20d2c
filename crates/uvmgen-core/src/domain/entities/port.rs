use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::PortDirection};

/// One signal of a module.
///
/// `width` is the bracketed range exactly as written in the source (`[7:0]`,
/// `[WIDTH-1:0]`, `[3:0][7:0]`) or empty for a scalar. It is never evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Port {
    name: String,
    direction: PortDirection,
    width: String,
}

impl Port {
    pub fn new(
        name: impl Into<String>,
        direction: PortDirection,
        width: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidPort("port name cannot be empty".into()));
        }
        Ok(Self {
            name,
            direction,
            width: width.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> PortDirection {
        self.direction
    }

    pub fn width(&self) -> &str {
        &self.width
    }

    pub fn is_scalar(&self) -> bool {
        self.width.is_empty()
    }
}

/// Renders the declaration form, `input [7:0] data`.
impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_scalar() {
            write!(f, "{} {}", self.direction, self.name)
        } else {
            write!(f, "{} {} {}", self.direction, self.width, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_declaration() {
        let p = Port::new("abc", PortDirection::Input, "[7:0]").unwrap();
        assert_eq!(p.to_string(), "input [7:0] abc");

        let s = Port::new("clk", PortDirection::Input, "").unwrap();
        assert_eq!(s.to_string(), "input clk");
        assert!(s.is_scalar());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            Port::new("  ", PortDirection::Output, ""),
            Err(DomainError::InvalidPort(_))
        ));
    }
}
