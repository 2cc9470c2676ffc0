use crate::types::{FieldDef, FieldType, Rule, TypeDef, TypeKind};

/// The `category` document type: a named taxonomy label referenced by posts.
#[must_use]
pub fn category() -> TypeDef {
    TypeDef {
        name: "category",
        title: "Category",
        kind: TypeKind::Document,
        fields: vec![FieldDef::new("name", "Name", FieldType::String).rules([Rule::Required])],
        preview: None,
        orderings: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_a_document_with_required_name() {
        let def = category();
        assert_eq!(def.kind, TypeKind::Document);
        assert!(def.field("name").unwrap().is_required());
    }
}
