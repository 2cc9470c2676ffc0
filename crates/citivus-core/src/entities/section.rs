use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::SectionImage;
use crate::blocks::SectionBlock;
use crate::slug::Slug;

/// A reusable content block embedded inside a blog post.
///
/// Sections have no identity outside their parent post's `sections` array.
/// `order` is caller-assigned and validated only as a positive integer:
/// neither uniqueness nor contiguity is enforced, so presentation-time sort
/// stability is the consuming application's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BlogSection {
    #[schemars(length(min = 1))]
    pub title: String,

    /// Derived from `title` at edit time, ≤ 96 chars. Hand-edits stick.
    pub slug: Slug,

    /// Rich content: text blocks, inline images, code blocks.
    #[schemars(length(min = 1))]
    pub content: Vec<SectionBlock>,

    /// Optional standalone section image.
    #[serde(default)]
    pub image: Option<SectionImage>,

    /// Position of this section within the post, starting at 1.
    #[schemars(range(min = 1))]
    pub order: u32,
}
