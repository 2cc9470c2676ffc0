//! Hosted project coordinates.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default dataset name on the hosted platform.
fn default_dataset() -> String {
    "production".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// Hosted project identifier the schema registry is deployed to.
    #[serde(default)]
    pub project_id: String,

    /// Dataset within the project.
    #[serde(default = "default_dataset")]
    pub dataset: String,
}

impl ProjectConfig {
    /// Whether the project section has enough to reach the platform.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.project_id.is_empty()
    }

    /// Gate for hosts that need a deploy target before doing anything.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `project_id` is unset.
    pub fn ensure_configured(&self) -> Result<(), ConfigError> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(ConfigError::NotConfigured { section: "project" })
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            dataset: default_dataset(),
        }
    }
}
