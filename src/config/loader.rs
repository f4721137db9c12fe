//! Config structs and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (`ACCRUE_*`)
//! 3. `.accrue.toml` in the working directory
//! 4. `~/.config/accrue/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;
use crate::models::{Arithmetic, Format};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub simple: SimpleConfig,
}

/// Output rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: plain, terminal, or json.
    pub format: Format,
    /// Decimal places for real-valued results. Integer results are
    /// unaffected.
    pub decimal_places: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: Format::Plain,
            decimal_places: 2,
        }
    }
}

/// Simple interest calculator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimpleConfig {
    /// Integer (reference-faithful, truncating) or float arithmetic.
    pub arithmetic: Arithmetic,
}

impl Default for SimpleConfig {
    fn default() -> Self {
        Self {
            arithmetic: Arithmetic::Integer,
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then the working-directory config, then
    /// applies environment variable overrides.
    pub fn load(working_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        if let Some(dir) = working_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        config.apply_env_vars(env)?;

        Ok(config)
    }

    /// Load a config from a specific file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// The global config file path (`~/.config/accrue/config.toml`).
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one; `other` wins for fields that
    /// differ from the built-in defaults.
    fn merge(&mut self, other: Config) {
        let defaults = Config::default();
        if other.output.format != defaults.output.format {
            self.output.format = other.output.format;
        }
        if other.output.decimal_places != defaults.output.decimal_places {
            self.output.decimal_places = other.output.decimal_places;
        }
        if other.simple.arithmetic != defaults.simple.arithmetic {
            self.simple.arithmetic = other.simple.arithmetic;
        }
    }

    /// Apply `ACCRUE_*` environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) -> Result<(), ConfigError> {
        if let Some(value) = env.var(constants::ENV_FORMAT) {
            self.output.format = value.parse().map_err(|_| ConfigError::InvalidEnv {
                name: constants::ENV_FORMAT,
                value,
            })?;
        }
        if let Some(value) = env.var(constants::ENV_DECIMAL_PLACES) {
            self.output.decimal_places =
                value.parse().map_err(|_| ConfigError::InvalidEnv {
                    name: constants::ENV_DECIMAL_PLACES,
                    value,
                })?;
        }
        if let Some(value) = env.var(constants::ENV_SIMPLE_ARITHMETIC) {
            self.simple.arithmetic = value.parse().map_err(|_| ConfigError::InvalidEnv {
                name: constants::ENV_SIMPLE_ARITHMETIC,
                value,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_reference_faithful() {
        let config = Config::default();
        assert_eq!(config.output.format, Format::Plain);
        assert_eq!(config.output.decimal_places, 2);
        assert_eq!(config.simple.arithmetic, Arithmetic::Integer);
    }

    #[test]
    fn load_file_parses_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(constants::CONFIG_FILENAME);
        std::fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

        let config = Config::load_file(&path).unwrap();
        assert_eq!(config.output.format, Format::Json);
        // Unspecified sections keep defaults
        assert_eq!(config.output.decimal_places, 2);
        assert_eq!(config.simple.arithmetic, Arithmetic::Integer);
    }

    #[test]
    fn load_file_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(constants::CONFIG_FILENAME);
        std::fs::write(&path, "[output\nformat = json").unwrap();

        let err = Config::load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFile { .. }));
    }

    #[test]
    fn load_file_reports_missing_file() {
        let err = Config::load_file(Path::new("/nonexistent/.accrue.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn merge_overrides_only_non_default_fields() {
        let mut base = Config::default();
        base.output.decimal_places = 4;

        let mut overlay = Config::default();
        overlay.output.format = Format::Terminal;

        base.merge(overlay);
        assert_eq!(base.output.format, Format::Terminal);
        // Overlay carried the default decimal_places, so base keeps 4
        assert_eq!(base.output.decimal_places, 4);
    }

    #[test]
    fn env_vars_override_config() {
        let mut config = Config::default();
        let env = Env::mock([
            (constants::ENV_FORMAT, "terminal"),
            (constants::ENV_DECIMAL_PLACES, "6"),
            (constants::ENV_SIMPLE_ARITHMETIC, "float"),
        ]);
        config.apply_env_vars(&env).unwrap();
        assert_eq!(config.output.format, Format::Terminal);
        assert_eq!(config.output.decimal_places, 6);
        assert_eq!(config.simple.arithmetic, Arithmetic::Float);
    }

    #[test]
    fn bad_env_value_is_rejected() {
        let mut config = Config::default();
        let env = Env::mock([(constants::ENV_FORMAT, "xml")]);
        let err = config.apply_env_vars(&env).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv {
                name: constants::ENV_FORMAT,
                ..
            }
        ));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = Config::default();
        config.output.format = Format::Json;
        config.simple.arithmetic = Arithmetic::Float;

        let rendered = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
