//! URL slug derivation and the `{current}` slug wrapper.
//!
//! Slugs are derived one-way from a source title at edit time: transliterate
//! to ASCII, lowercase, collapse non-alphanumeric runs to single hyphens, and
//! cap at [`MAX_SLUG_LEN`] without splitting mid-word. Editors may hand-edit
//! the result afterwards, so [`Slug::new`] accepts any already-canonical
//! value; derivation is not re-enforced as a running invariant.

use deunicode::deunicode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

/// Hard upper bound on slug length, matching the platform's slug field option.
pub const MAX_SLUG_LEN: usize = 96;

/// A URL-safe identifier derived from a human-readable title.
///
/// Wire shape matches the platform's slug value: `{"current": "hello-world"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Slug {
    /// Canonical slug value: lowercase ASCII alphanumerics and single hyphens.
    #[schemars(length(min = 1, max = 96))]
    pub current: String,
}

impl Slug {
    /// Wrap an already-canonical slug value.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidSlug`] if the value is empty, exceeds
    /// [`MAX_SLUG_LEN`], contains characters outside `[a-z0-9-]`, or has
    /// leading, trailing, or doubled hyphens.
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        match canonical_error(&value) {
            None => Ok(Self { current: value }),
            Some(reason) => Err(CoreError::InvalidSlug {
                value,
                reason: reason.to_string(),
            }),
        }
    }

    /// Derive a slug from a source title.
    ///
    /// Pure and deterministic: the same title always yields the same slug.
    /// Titles longer than [`MAX_SLUG_LEN`] are truncated at the last word
    /// boundary that fits.
    #[must_use]
    pub fn derive(source: &str) -> Self {
        Self {
            current: slugify(source),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.current
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.current)
    }
}

/// Slugify a title: transliterate, lowercase, hyphenate, cap at 96.
#[must_use]
pub fn slugify(source: &str) -> String {
    let mut slug = String::with_capacity(source.len());
    let mut pending_hyphen = false;

    for ch in deunicode(source).chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.len() > MAX_SLUG_LEN {
        // Cut at the last hyphen that fits so words stay intact; a single
        // 96+ character word is truncated hard.
        let cut = slug[..=MAX_SLUG_LEN]
            .rfind('-')
            .unwrap_or(MAX_SLUG_LEN);
        slug.truncate(cut);
    }

    slug
}

/// Why a slug value is not canonical, or `None` if it is.
fn canonical_error(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("slug must not be empty");
    }
    if value.len() > MAX_SLUG_LEN {
        return Some("slug exceeds 96 characters");
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Some("slug may only contain lowercase letters, digits, and hyphens");
    }
    if value.starts_with('-') || value.ends_with('-') {
        return Some("slug must not start or end with a hyphen");
    }
    if value.contains("--") {
        return Some("slug must not contain consecutive hyphens");
    }
    None
}
