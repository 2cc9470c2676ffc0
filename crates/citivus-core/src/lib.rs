//! # citivus-core
//!
//! Typed content entities and shared vocabulary for the Citivus blog model.
//!
//! This crate provides the foundational types shared across all Citivus crates:
//! - Entity structs for every content shape (blog posts, sections, authors, categories)
//! - The closed `SectionBlock` sum type for rich section content
//! - Style/list/decorator/language enums matching the platform wire values
//! - Slug derivation (`Slug::derive`) with the 96-character cap
//! - Cross-cutting error types
//!
//! Entity structs derive `Serialize`, `Deserialize`, and `JsonSchema`; the
//! schemars validation attributes on their fields (length bounds, numeric
//! minimums) are the single source of truth for the exported JSON Schemas in
//! `citivus-schema`.

pub mod blocks;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod slug;
