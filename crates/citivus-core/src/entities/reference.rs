use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default `_type` tag for reference values.
fn reference_type() -> String {
    "reference".to_string()
}

/// A weak link to another document by identifier.
///
/// Resolution happens inside the platform at read time; this value carries no
/// ownership and no guarantee the target exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Reference {
    /// Identifier of the referenced document.
    #[serde(rename = "_ref")]
    pub id: String,

    /// Always `"reference"` on the wire.
    #[serde(rename = "_type", default = "reference_type")]
    pub type_tag: String,
}

impl Reference {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_tag: reference_type(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let json = serde_json::to_value(Reference::new("author-1")).unwrap();
        assert_eq!(json["_ref"], "author-1");
        assert_eq!(json["_type"], "reference");
    }

    #[test]
    fn type_tag_defaults_when_absent() {
        let reference: Reference = serde_json::from_str(r#"{"_ref":"cat-2"}"#).unwrap();
        assert_eq!(reference, Reference::new("cat-2"));
    }
}
