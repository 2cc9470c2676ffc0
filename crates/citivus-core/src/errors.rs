//! Cross-cutting error types for Citivus.
//!
//! Domain-specific errors (schema validation, configuration) are defined in
//! their respective crates; this module covers what the core types themselves
//! can reject.

use thiserror::Error;

/// Errors raised by the core content types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A slug string is not in canonical form.
    #[error("Invalid slug '{value}': {reason}")]
    InvalidSlug { value: String, reason: String },

    /// Data failed a structural constraint.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
