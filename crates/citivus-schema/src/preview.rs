//! Preview selection and composition for editor listing rows.
//!
//! A [`PreviewSpec`](crate::types::PreviewSpec) names `(key, dot-path)`
//! pairs; the paths resolve against the raw document value. Reference
//! resolution is the platform's job, so a path that crosses an unresolved
//! reference (e.g. `author.name` on a bare `{_ref}`) simply yields nothing
//! and the prepare step must cope with the absence.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::types::TypeDef;

/// Resolved selection values, keyed by the spec's selection keys.
#[derive(Debug, Clone, Default)]
pub struct PreviewSelection(BTreeMap<&'static str, Value>);

impl PreviewSelection {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Selection value as a non-empty string, if it is one.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
    }
}

/// Display values composed for one listing row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewValues {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Raw media value (an image), passed through for the platform to render.
    pub media: Option<Value>,
}

/// Resolve a dot path like `"author.name"` against a document value.
#[must_use]
pub fn select_path<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(doc, |value, segment| value.get(segment))
}

/// Compute the preview row for a document, if its type declares one.
#[must_use]
pub fn preview(type_def: &TypeDef, doc: &Value) -> Option<PreviewValues> {
    let spec = type_def.preview.as_ref()?;
    let mut selection = PreviewSelection::default();
    for &(key, path) in spec.select {
        if let Some(value) = select_path(doc, path) {
            selection.0.insert(key, value.clone());
        }
    }
    Some((spec.prepare)(&selection))
}

/// Blog post rows: title, featured image, and `"by {author}"` only when the
/// author name resolved to a non-empty string.
#[must_use]
pub fn blog_post_prepare(selection: &PreviewSelection) -> PreviewValues {
    PreviewValues {
        title: selection.get_str("title").map(str::to_string),
        subtitle: selection.get_str("author").map(|author| format!("by {author}")),
        media: selection.get("media").cloned(),
    }
}

/// Section rows: title plus `"Section {order}"`.
#[must_use]
pub fn blog_section_prepare(selection: &PreviewSelection) -> PreviewValues {
    // as_f64 so float-encoded orders (2.0) still produce a subtitle; Display
    // drops the fractionless ".0" on its own
    PreviewValues {
        title: selection.get_str("title").map(str::to_string),
        subtitle: selection
            .get("order")
            .and_then(Value::as_f64)
            .map(|order| format!("Section {order}")),
        media: None,
    }
}
