//! # citivus-schema
//!
//! Schema declarations, validation, previews, and orderings for the Citivus
//! content model.
//!
//! This crate provides:
//! - The declarative type model (`TypeDef`, `FieldDef`, field options)
//! - Validation rules as composable pure predicates, plus a document walker
//!   that collects per-field violations
//! - The four Citivus type definitions (`blogPost`, `blogSection`, `author`,
//!   `category`)
//! - `SchemaRegistry`: the ordered, load-once collection handed to the
//!   platform's configuration entry point
//! - Preview composition and listing orderings
//! - `SchemaExport`: JSON Schemas generated from the typed entities in
//!   `citivus-core`, for editor plugins and CI
//!
//! ## Architecture
//!
//! Entity types live in `citivus-core` with `#[derive(JsonSchema)]`; this
//! crate declares how the platform edits and validates them. Everything here
//! is plain data built once at startup — persistence, querying, rendering,
//! and asset handling stay inside the external platform.

pub mod defs;
mod error;
pub mod export;
pub mod orderings;
pub mod preview;
pub mod registry;
pub mod rules;
pub mod types;
pub mod validate;

pub use error::SchemaError;
pub use export::SchemaExport;
pub use registry::SchemaRegistry;
pub use types::{FieldDef, FieldType, Rule, TypeDef, TypeKind};
pub use validate::{validate_document, Violation};
