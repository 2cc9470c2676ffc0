//! Central registry of all Citivus type definitions.
//!
//! The registry is the ordered collection handed to the platform's
//! configuration entry point: built once at startup, read-only afterwards.
//! Declaration order is part of the contract (it drives the editor's type
//! listing), so types live in a `Vec` with a name index on the side.

use std::collections::HashMap;

use serde_json::Value;

use crate::defs::{author, blog_post, blog_section, category};
use crate::error::SchemaError;
use crate::types::TypeDef;
use crate::validate::{validate_document, Violation};

/// Ordered, immutable collection of every declared content type.
pub struct SchemaRegistry {
    types: Vec<TypeDef>,
    index: HashMap<&'static str, usize>,
}

impl SchemaRegistry {
    /// Build the registry with all four Citivus types in declaration order.
    #[must_use]
    pub fn new() -> Self {
        let types = vec![blog_post(), blog_section(), author(), category()];
        let index = types
            .iter()
            .enumerate()
            .map(|(position, def)| (def.name, position))
            .collect();
        tracing::debug!(type_count = types.len(), "schema registry built");
        Self { types, index }
    }

    /// Get a type definition by name. Returns `None` if not declared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.index.get(name).map(|&position| &self.types[position])
    }

    /// All type names, in declaration order.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        self.types.iter().map(|def| def.name).collect()
    }

    /// All type definitions, in declaration order.
    #[must_use]
    pub fn types(&self) -> &[TypeDef] {
        &self.types
    }

    /// Number of declared types.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Validate a candidate document against a declared type.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::UnknownType` if the type name is not declared,
    /// or `SchemaError::ValidationFailed` with every violation found.
    pub fn validate(&self, name: &str, doc: &Value) -> Result<(), SchemaError> {
        let violations = validate_document(self, name, doc)?;
        if violations.is_empty() {
            Ok(())
        } else {
            tracing::debug!(
                type_name = name,
                violation_count = violations.len(),
                "document failed validation"
            );
            Err(SchemaError::ValidationFailed { violations })
        }
    }

    /// Validate and hand back the violation list directly, for hosts that
    /// render per-field messages instead of matching on the error.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::UnknownType` if the type name is not declared.
    pub fn check(&self, name: &str, doc: &Value) -> Result<Vec<Violation>, SchemaError> {
        validate_document(self, name, doc)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
