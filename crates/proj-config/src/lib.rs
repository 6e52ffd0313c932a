//! # proj-config
//!
//! Layered configuration loading for the project tracker using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PROJECTS_*` prefix, `__` as separator)
//! 2. Project-level `.projects/config.toml`
//! 3. User-level `~/.config/projects/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PROJECTS_DATABASE__PATH` -> `database.path`,
//! `PROJECTS_GENERAL__DEFAULT_FORMAT` -> `general.default_format`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use proj_config::{ConnectionTarget, ProjectsConfig};
//!
//! let config = ProjectsConfig::load_with_dotenv().expect("config");
//! match config.database.target().expect("valid target") {
//!     ConnectionTarget::Local(path) => println!("local store at {}", path.display()),
//!     ConnectionTarget::Remote { url, .. } => println!("remote store at {url}"),
//! }
//! ```

mod database;
mod error;
mod general;

pub use database::{ConnectionTarget, DatabaseConfig};
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
const LOCAL_CONFIG_PATH: &str = ".projects/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProjectsConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ProjectsConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal; values may come from the real environment.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("PROJECTS_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("projects").join("config.toml"))
    }
}
