//! Domain value objects: PortDirection, SignalKind, ArtifactKind.
//!
//! # Design
//!
//! These are pure value types: `Copy` and compared by value.
//! Naming (identifiers, file names) for artifact kinds lives in
//! `naming.rs`; this file only defines the types, their string
//! representations and the `PortDirection` keyword parser.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── PortDirection ────────────────────────────────────────────────────────────

/// Direction keyword of a module port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    Input,
    Output,
    Inout,
}

impl PortDirection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::Inout => "inout",
        }
    }

    pub const fn is_bidirectional(&self) -> bool {
        matches!(self, Self::Inout)
    }

    /// Signal kind used when the port is mirrored into the generated interface.
    ///
    /// Bidirectional ports must be resolved nets, so `inout` maps to `wire`;
    /// everything else is a `logic` variable the driver can assign.
    pub const fn signal_kind(&self) -> SignalKind {
        if self.is_bidirectional() {
            SignalKind::Wire
        } else {
            SignalKind::Logic
        }
    }
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(Self::Input),
            "output" => Ok(Self::Output),
            "inout" => Ok(Self::Inout),
            other => Err(DomainError::InvalidPort(format!(
                "unknown direction '{other}'. Valid: input, output, inout"
            ))),
        }
    }
}

// ── SignalKind ───────────────────────────────────────────────────────────────

/// SystemVerilog declaration keyword for an interface signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Logic,
    Wire,
}

impl SignalKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Logic => "logic",
            Self::Wire => "wire",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// The eleven files that make up one verification environment.
///
/// Declaration order is elaboration order: anything a kind references is
/// declared before it. [`ArtifactKind::ALL`] preserves that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Interface,
    Item,
    Driver,
    Monitor,
    Agent,
    Scoreboard,
    Env,
    SequenceLibrary,
    TestLibrary,
    Package,
    TestbenchTop,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 11] = [
        Self::Interface,
        Self::Item,
        Self::Driver,
        Self::Monitor,
        Self::Agent,
        Self::Scoreboard,
        Self::Env,
        Self::SequenceLibrary,
        Self::TestLibrary,
        Self::Package,
        Self::TestbenchTop,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Item => "item",
            Self::Driver => "driver",
            Self::Monitor => "monitor",
            Self::Agent => "agent",
            Self::Scoreboard => "scoreboard",
            Self::Env => "env",
            Self::SequenceLibrary => "sequence-library",
            Self::TestLibrary => "test-library",
            Self::Package => "package",
            Self::TestbenchTop => "testbench-top",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
