use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{BlogSection, FeaturedImage, Reference};
use crate::slug::Slug;

/// One entry in a post's table of contents.
///
/// Intended to mirror the titles and order of the post's sections, but the
/// platform edits it independently: nothing keeps the two in sync. Hosts
/// that want derivation can call [`TocEntry::from_sections`] in a save hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TocEntry {
    pub title: String,
    pub slug: Slug,
    #[schemars(range(min = 1))]
    pub order: u32,
}

impl TocEntry {
    /// Derive table-of-contents entries from a post's sections.
    ///
    /// Pure: copies each section's title, slug, and order without touching
    /// the sections themselves.
    #[must_use]
    pub fn from_sections(sections: &[BlogSection]) -> Vec<Self> {
        sections
            .iter()
            .map(|section| Self {
                title: section.title.clone(),
                slug: section.slug.clone(),
                order: section.order,
            })
            .collect()
    }
}

/// Optional search-engine metadata. No cross-validation against the post's
/// own title or excerpt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    #[serde(default)]
    pub meta_description: Option<String>,

    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

/// The top-level blog content entity.
///
/// Owns its sections; holds weak references to exactly one author and one
/// category. Slug uniqueness across posts is the platform's job and is not
/// expressed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[schemars(length(min = 1, max = 100))]
    pub title: String,

    /// Derived from `title` at edit time, ≤ 96 chars.
    pub slug: Slug,

    #[schemars(length(min = 1, max = 200))]
    pub excerpt: String,

    /// Independently edited; see [`TocEntry`] for the drift caveat.
    #[serde(default)]
    pub table_of_contents: Vec<TocEntry>,

    /// The post body. At least one section.
    #[schemars(length(min = 1))]
    pub sections: Vec<BlogSection>,

    pub featured_image: FeaturedImage,

    /// Weak reference to an `author` document.
    pub author: Reference,

    /// Weak reference to a `category` document.
    pub category: Reference,

    #[serde(default)]
    pub tags: Option<Vec<String>>,

    pub publish_date: DateTime<Utc>,

    /// Free text, e.g. "8 min read".
    #[serde(default)]
    pub read_time: Option<String>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub seo: Option<Seo>,
}
