//! # citivus-config
//!
//! Layered studio configuration for Citivus using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CITIVUS_*` prefix, `__` as separator)
//! 2. Project-level `.citivus/config.toml`
//! 3. User-level `~/.config/citivus/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CITIVUS_PROJECT__PROJECT_ID` -> `project.project_id`,
//! `CITIVUS_PLUGINS__VISION_TOOL` -> `plugins.vision_tool`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use citivus_config::StudioConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = StudioConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = StudioConfig::load().expect("config");
//!
//! if config.project.is_configured() {
//!     println!("Project: {}/{}", config.project.project_id, config.project.dataset);
//! }
//! ```

mod error;
mod plugins;
mod project;

pub use error::ConfigError;
pub use plugins::PluginsConfig;
pub use project::ProjectConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default studio workspace name.
fn default_name() -> String {
    "default".to_string()
}

/// Default studio display title.
fn default_title() -> String {
    "Citivus".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StudioConfig {
    /// Studio workspace name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Studio display title.
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub plugins: PluginsConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            title: default_title(),
            project: ProjectConfig::default(),
            plugins: PluginsConfig::default(),
        }
    }
}

impl StudioConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`StudioConfig::load_with_dotenv`] if
    /// you need `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`CITIVUS_*` prefix)
    /// 2. `.citivus/config.toml` (project-local)
    /// 3. `~/.config/citivus/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to parse or merge.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment. This is the typical entry
    /// point for hosts and tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to parse or merge.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".citivus/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("CITIVUS_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("citivus").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or the current dir
    /// looking for a `.env` file. Silently does nothing if none is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
