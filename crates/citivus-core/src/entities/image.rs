use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Reference;

/// Focal-point crop metadata attached to an image value.
///
/// Declared here, consumed entirely by the platform's asset pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Hotspot {
    pub x: f64,
    pub y: f64,
    pub height: f64,
    pub width: f64,
}

/// A blog post's featured image: asset reference, hotspot, alt text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeaturedImage {
    /// Weak reference to the image asset document.
    pub asset: Reference,

    #[serde(default)]
    pub hotspot: Option<Hotspot>,

    /// Alternative text.
    #[serde(default)]
    pub alt: Option<String>,
}

/// An optional standalone image on a section, with alt text and caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SectionImage {
    pub asset: Reference,

    #[serde(default)]
    pub hotspot: Option<Hotspot>,

    #[serde(default)]
    pub alt: Option<String>,

    #[serde(default)]
    pub caption: Option<String>,
}
