//! The closed rich-content sum type for section bodies.
//!
//! Every element of a section's `content` array is exactly one of three
//! kinds, discriminated by the platform's `_type` tag: a portable-text block,
//! an inline image, or a code block. The enum is exhaustive on purpose —
//! adding a block kind must force every consumer match to be revisited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Hotspot, Reference};
use crate::enums::{BlockStyle, CodeLanguage, ListKind};

/// One element of a section's rich-content array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "_type")]
pub enum SectionBlock {
    /// Portable-text block: styled paragraph, heading, quote, or list item.
    #[serde(rename = "block")]
    Text(TextBlock),

    /// Inline image with alt text and caption.
    #[serde(rename = "image")]
    Image(ImageBlock),

    /// Code block with language selection.
    #[serde(rename = "code")]
    Code(CodeBlock),
}

impl SectionBlock {
    /// Wire-level `_type` tag of this block.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "block",
            Self::Image(_) => "image",
            Self::Code(_) => "code",
        }
    }
}

/// A portable-text block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    /// Paragraph style. Defaults to `normal`.
    #[serde(default)]
    pub style: BlockStyle,

    /// Set when this block renders as a list item.
    #[serde(default)]
    pub list_item: Option<ListKind>,

    /// Inline spans making up the block text.
    pub children: Vec<Span>,

    /// Link annotations referenced by span marks.
    #[serde(default)]
    pub mark_defs: Vec<LinkAnnotation>,
}

/// An inline run of text with optional marks.
///
/// Marks are either decorator names (`strong`, `em`, `code`) or the `key` of
/// a [`LinkAnnotation`] in the enclosing block's `markDefs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Span {
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

impl Span {
    /// Plain span with no marks.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Vec::new(),
        }
    }
}

/// A link annotation attached to one or more spans in a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LinkAnnotation {
    /// Key that span marks use to point at this annotation.
    #[serde(rename = "_key")]
    pub key: String,
    pub href: String,
}

/// An image element inside section content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ImageBlock {
    /// Weak reference to the image asset document.
    pub asset: Reference,

    /// Focal-point crop metadata, consumed by the platform's asset pipeline.
    #[serde(default)]
    pub hotspot: Option<Hotspot>,

    /// Alternative text.
    #[serde(default)]
    pub alt: Option<String>,

    #[serde(default)]
    pub caption: Option<String>,
}

/// A code element inside section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CodeBlock {
    /// Selected language. Defaults to JavaScript, matching the editor default.
    #[serde(default)]
    pub language: CodeLanguage,

    #[serde(default)]
    pub filename: Option<String>,

    pub code: String,
}
