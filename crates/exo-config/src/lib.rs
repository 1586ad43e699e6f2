//! # exo-config
//!
//! Layered configuration loading for exoprofile using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`EXOPROFILE_*` prefix, `__` as separator)
//! 2. An explicit config file passed by the caller (`--config`)
//! 3. Project-level `.exoprofile/config.toml`
//! 4. User-level `~/.config/exoprofile/config.toml`
//! 5. Built-in defaults
//!
//! Figment maps `EXOPROFILE_LIFEFORM__BASE_SIZE` -> `lifeform.base_size`,
//! `EXOPROFILE_CLASSIFIER__THRESHOLD` -> `classifier.threshold`, etc.
//!
//! ```no_run
//! use exo_config::ExoConfig;
//!
//! let config = ExoConfig::load_with_dotenv(None).expect("config");
//! let request = config.lifeform.request();
//! ```

mod classifier;
mod error;
mod lifeform;
mod output;

pub use classifier::ClassifierConfig;
pub use error::ConfigError;
pub use lifeform::LifeformConfig;
pub use output::OutputConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExoConfig {
    #[serde(default)]
    pub lifeform: LifeformConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl ExoConfig {
    /// Load and validate configuration from all sources.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingFile` if `config_file` does not exist,
    /// `ConfigError::Figment` if a source cannot be parsed, or
    /// `ConfigError::InvalidValue` if a value is out of range.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        // Toml::file silently skips missing files; an explicit path must exist.
        if let Some(path) = config_file.filter(|path| !path.is_file()) {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }

        let config: Self = Self::figment(config_file).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(config_file)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer more providers.
    #[must_use]
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".exoprofile/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("EXOPROFILE_").split("__"))
    }

    /// Reject values the pipeline cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lifeform.validate()?;
        self.classifier.validate()?;
        if self.output.path.trim().is_empty() {
            return Err(ConfigError::invalid("output.path", "must not be empty"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("exoprofile").join("config.toml"))
    }
}
