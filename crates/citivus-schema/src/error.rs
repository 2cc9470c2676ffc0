//! Schema validation error types.

use thiserror::Error;

use crate::validate::Violation;

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested type name was not found in the registry.
    #[error("Unknown type: {0}")]
    UnknownType(String),

    /// A document did not pass the declared validation rules.
    #[error("Validation failed: {violations:?}")]
    ValidationFailed {
        /// Individual violations with field paths.
        violations: Vec<Violation>,
    },

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}
