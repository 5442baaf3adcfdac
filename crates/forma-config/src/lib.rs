//! # forma-config
//!
//! Layered configuration loading for Forma using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FORMA_*` prefix, `__` as separator)
//! 2. Project-level `.forma/config.toml`
//! 3. User-level `~/.config/forma/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FORMA_GENERAL__DEFAULT_FORMAT` -> `general.default_format`,
//! `FORMA_VALIDATION__CATALOG_PATH` -> `validation.catalog_path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use forma_config::FormaConfig;
//!
//! let config = FormaConfig::load_with_dotenv().expect("config");
//!
//! if let Some(path) = config.validation.catalog() {
//!     println!("reference catalog: {}", path.display());
//! }
//! ```

mod error;
mod general;
mod validation;

pub use error::ConfigError;
pub use general::{GeneralConfig, OUTPUT_FORMATS};
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project-local config directory.
pub const PROJECT_DIR: &str = ".forma";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FormaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl FormaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load a `.env` file from the current directory (if
    /// present) before building the figment.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration, additionally merging an explicit TOML file on top
    /// of the standard files but below environment variables.
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        let figment = Self::file_layers()
            .merge(Toml::file(path))
            .merge(Self::env_provider());
        Self::from_figment(figment)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        Self::file_layers().merge(Self::env_provider())
    }

    /// Extract and validate a config from an arbitrary figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.general.validate()?;
        Ok(config)
    }

    fn file_layers() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    fn env_provider() -> Env {
        Env::prefixed("FORMA_").split("__")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("forma").join("config.toml"))
    }
}
