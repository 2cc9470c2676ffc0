use crate::types::{FieldDef, FieldType, Rule, TypeDef, TypeKind};

/// The `author` document type: an editorial identity referenced by posts.
///
/// Kept minimal on purpose — `name` only. Extra identity fields the studio
/// grows later ride along as opaque document content.
#[must_use]
pub fn author() -> TypeDef {
    TypeDef {
        name: "author",
        title: "Author",
        kind: TypeKind::Document,
        fields: vec![FieldDef::new("name", "Name", FieldType::String).rules([Rule::Required])],
        preview: None,
        orderings: vec![],
    }
}
