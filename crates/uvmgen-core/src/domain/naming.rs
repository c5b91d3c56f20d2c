//! Naming scheme shared by every renderer.
//!
//! Every class, module, package and file name in a generated environment is
//! `<env_name>_<suffix>`. This module is the only place those suffixes are
//! spelled out; renderers reach them through [`RenderContext`] placeholders,
//! so renaming a role here renames it consistently in all eleven artifacts.
//!
//! | Role       | Identifier          | Artifact kind     | File                   |
//! |------------|---------------------|-------------------|------------------------|
//! | `If`       | `<env>_if`          | `Interface`       | `<env>_if.<ext>`       |
//! | `Item`     | `<env>_item`        | `Item`            | `<env>_item.<ext>`     |
//! | `Driver`   | `<env>_driver`      | `Driver`          | `<env>_drv.<ext>`      |
//! | `Monitor`  | `<env>_monitor`     | `Monitor`         | `<env>_mon.<ext>`      |
//! | `Agent`    | `<env>_agent`       | `Agent`           | `<env>_agent.<ext>`    |
//! | `Scoreboard` | `<env>_scoreboard` | `Scoreboard`     | `<env>_scoreboard.<ext>` |
//! | `Env`      | `<env>_env`         | `Env`             | `<env>_env.<ext>`      |
//! | `BaseSeq`  | `<env>_base_seq`    | `SequenceLibrary` | `<env>_seq_lib.<ext>`  |
//! | `BaseTest` | `<env>_base_test`   | `TestLibrary`     | `<env>_test_lib.<ext>` |
//! | `Pkg`      | `<env>_pkg`         | `Package`         | `<env>_pkg.<ext>`      |
//! | `TbTop`    | `<env>_tb_top`      | `TestbenchTop`    | `<env>_tb_top.<ext>`   |
//!
//! [`RenderContext`]: crate::domain::render::RenderContext

use std::fmt;
use std::path::PathBuf;

use crate::domain::value_objects::ArtifactKind;

/// A named participant of the environment (one per artifact kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    If,
    Item,
    Driver,
    Monitor,
    Agent,
    Scoreboard,
    Env,
    BaseSeq,
    BaseTest,
    Pkg,
    TbTop,
}

impl Role {
    pub const ALL: [Role; 11] = [
        Self::If,
        Self::Item,
        Self::Driver,
        Self::Monitor,
        Self::Agent,
        Self::Scoreboard,
        Self::Env,
        Self::BaseSeq,
        Self::BaseTest,
        Self::Pkg,
        Self::TbTop,
    ];

    /// Identifier suffix appended to the environment name.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Item => "item",
            Self::Driver => "driver",
            Self::Monitor => "monitor",
            Self::Agent => "agent",
            Self::Scoreboard => "scoreboard",
            Self::Env => "env",
            Self::BaseSeq => "base_seq",
            Self::BaseTest => "base_test",
            Self::Pkg => "pkg",
            Self::TbTop => "tb_top",
        }
    }

    /// Placeholder key under which templates reference this identifier.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::If => "IF",
            Self::Item => "ITEM",
            Self::Driver => "DRIVER",
            Self::Monitor => "MONITOR",
            Self::Agent => "AGENT",
            Self::Scoreboard => "SCOREBOARD",
            Self::Env => "ENV",
            Self::BaseSeq => "BASE_SEQ",
            Self::BaseTest => "BASE_TEST",
            Self::Pkg => "PKG",
            Self::TbTop => "TB_TOP",
        }
    }

    /// `<env_name>_<suffix>`.
    pub fn ident(&self, env_name: &str) -> String {
        format!("{env_name}_{}", self.suffix())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl ArtifactKind {
    /// The class/module/package this artifact declares.
    pub const fn role(&self) -> Role {
        match self {
            Self::Interface => Role::If,
            Self::Item => Role::Item,
            Self::Driver => Role::Driver,
            Self::Monitor => Role::Monitor,
            Self::Agent => Role::Agent,
            Self::Scoreboard => Role::Scoreboard,
            Self::Env => Role::Env,
            Self::SequenceLibrary => Role::BaseSeq,
            Self::TestLibrary => Role::BaseTest,
            Self::Package => Role::Pkg,
            Self::TestbenchTop => Role::TbTop,
        }
    }

    /// File-name suffix; differs from the role suffix for a few kinds
    /// (`drv`, `mon`, `seq_lib`, `test_lib`).
    pub const fn file_suffix(&self) -> &'static str {
        match self {
            Self::Interface => "if",
            Self::Item => "item",
            Self::Driver => "drv",
            Self::Monitor => "mon",
            Self::Agent => "agent",
            Self::Scoreboard => "scoreboard",
            Self::Env => "env",
            Self::SequenceLibrary => "seq_lib",
            Self::TestLibrary => "test_lib",
            Self::Package => "pkg",
            Self::TestbenchTop => "tb_top",
        }
    }

    /// Placeholder key for this artifact's file name (`<KEY>_FILE`).
    pub fn file_key(&self) -> String {
        format!("{}_FILE", self.file_suffix().to_ascii_uppercase())
    }

    pub fn file_name(&self, env_name: &str, extension: &str) -> String {
        format!("{env_name}_{}.{extension}", self.file_suffix())
    }

    /// Path relative to the output root: `<env_name>/<file_name>`.
    pub fn relative_path(&self, env_name: &str, extension: &str) -> PathBuf {
        PathBuf::from(env_name).join(self.file_name(env_name, extension))
    }
}

/// Instance name of the environment inside the base test.
pub fn env_instance(env_name: &str) -> String {
    format!("{}0", Role::Env.ident(env_name))
}
