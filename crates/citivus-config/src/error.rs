//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source failed to parse or the merged figment did not extract.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A config section is missing the fields needed to reach the platform.
    #[error("Configuration section '{section}' is not configured")]
    NotConfigured { section: &'static str },
}
