use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An editorial identity. Referenced by blog posts.
///
/// Only `name` is modeled explicitly; any further identity fields the studio
/// adds later are carried opaquely so they survive a roundtrip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Author {
    #[schemars(length(min = 1))]
    pub name: String,

    /// Opaque extension fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Author {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extension_fields_survive_roundtrip() {
        let json = serde_json::json!({
            "name": "Jane Doe",
            "bio": "Writes about compilers",
            "avatar": {"asset": {"_ref": "image-1", "_type": "reference"}},
        });
        let author: Author = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(author.name, "Jane Doe");
        assert_eq!(author.extra["bio"], "Writes about compilers");
        assert_eq!(serde_json::to_value(&author).unwrap(), json);
    }
}
