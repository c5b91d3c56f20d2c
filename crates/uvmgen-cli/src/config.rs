//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `UVMGEN_*` environment variables, `__` between nested keys
//!    (`UVMGEN_GENERATE__AGENT_COUNT=2`)
//! 3. Config file: `--config FILE`, else the platform config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uvmgen_core::domain::{
    DomainValidator,
    entities::environment::{DEFAULT_AGENT_COUNT, DEFAULT_FILE_EXTENSION},
};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `uvmgen generate`.
    pub generate: GenerateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub agent_count: u32,
    pub file_extension: String,
    pub overwrite: bool,
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            agent_count: DEFAULT_AGENT_COUNT,
            file_extension: DEFAULT_FILE_EXTENSION.into(),
            overwrite: false,
            strict: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, file and environment.
    ///
    /// A file passed via `--config` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let config = Self::builder(&path, required)?
            .add_source(
                Environment::with_prefix("UVMGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        let loaded: Self = config
            .try_deserialize()
            .context("Configuration has invalid values")?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Defaults overlaid with one TOML file, without the environment layer.
    fn builder(
        path: &Path,
        required: bool,
    ) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;
        Ok(Config::builder().add_source(defaults).add_source(
            File::from(path.to_path_buf())
                .format(FileFormat::Toml)
                .required(required),
        ))
    }

    /// Reject values `generate` would refuse later anyway.
    pub fn validate(&self) -> anyhow::Result<()> {
        DomainValidator::validate_agent_count(self.generate.agent_count)
            .context("generate.agent_count")?;
        DomainValidator::validate_file_extension(&self.generate.file_extension)
            .context("generate.file_extension")?;
        Ok(())
    }

    /// Look up one value by dotted key, rendered as a string.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "generate.agent_count" => self.generate.agent_count.to_string(),
            "generate.file_extension" => self.generate.file_extension.clone(),
            "generate.overwrite" => self.generate.overwrite.to_string(),
            "generate.strict" => self.generate.strict.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key [`AppConfig::get`] understands.
    pub const KEYS: [&'static str; 6] = [
        "generate.agent_count",
        "generate.file_extension",
        "generate.overwrite",
        "generate.strict",
        "output.no_color",
        "output.format",
    ];

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.uvmgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "uvmgen", "uvmgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".uvmgen.toml"))
    }

    /// The defaults as a TOML document, for `uvmgen init`.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("uvmgen.toml");
        fs::write(&path, body).unwrap();
        path
    }

    // Reads the file layer only; the environment layer is process-global.
    fn load_file(path: &Path) -> anyhow::Result<AppConfig> {
        let cfg: AppConfig = AppConfig::builder(path, true)?.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[test]
    fn defaults_match_descriptor_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.generate.agent_count, 1);
        assert_eq!(cfg.generate.file_extension, "sv");
        assert!(!cfg.generate.overwrite);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[generate]\nagent_count = 4\n");
        let cfg = load_file(&path).unwrap();
        assert_eq!(cfg.generate.agent_count, 4);
        assert_eq!(cfg.generate.file_extension, "sv");
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[generate]\nfile_extension = \"svh\"\nstrict = true\n\n[output]\nno_color = true\n",
        );
        let cfg = load_file(&path).unwrap();
        assert_eq!(cfg.generate.file_extension, "svh");
        assert!(cfg.generate.strict);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn zero_agents_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[generate]\nagent_count = 0\n");
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("generate.agent_count"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn default_toml_round_trips() {
        let text = AppConfig::default_toml().unwrap();
        assert!(text.contains("[generate]"));
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("generate.agent_count").as_deref(), Some("1"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert!(cfg.get("does.not.exist").is_none());
        for key in AppConfig::KEYS {
            assert!(cfg.get(key).is_some(), "{key}");
        }
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
