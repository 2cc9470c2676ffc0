//! The declarative schema model: type definitions, fields, and options.
//!
//! Every content type the platform edits is described by a [`TypeDef`] built
//! once at registry construction and never mutated afterwards. A `TypeDef`
//! is plain data — no dynamic dispatch, no reflection — apart from the
//! preview `prepare` function pointer, which is a pure value-to-value map.

use citivus_core::enums::{BlockStyle, CodeLanguage, Decorator, ListKind, SortDirection};

use crate::preview::{PreviewSelection, PreviewValues};

/// Whether a type is independently addressable or only ever embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// Top-level content entity with its own identity.
    Document,
    /// Embedded value type, owned by its parent.
    Object,
}

/// One declared content type: name, kind, ordered fields, optional preview,
/// and zero or more listing orderings.
#[derive(Debug, Clone)]
pub struct TypeDef {
    /// Unique type name, e.g. `"blogPost"`.
    pub name: &'static str,
    /// Display title shown in the editor.
    pub title: &'static str,
    pub kind: TypeKind,
    /// Fields in declaration order. Order is part of the editor contract.
    pub fields: Vec<FieldDef>,
    pub preview: Option<PreviewSpec>,
    pub orderings: Vec<OrderingSpec>,
}

impl TypeDef {
    /// Look up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One declared field: name, display title, type, and validation rule chain.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: &'static str,
    pub title: &'static str,
    pub field_type: FieldType,
    /// Rules applied in order at save time. Empty means optional, anything goes.
    pub rules: Vec<Rule>,
    pub description: Option<&'static str>,
    /// Editor input placeholder.
    pub placeholder: Option<&'static str>,
}

impl FieldDef {
    #[must_use]
    pub const fn new(name: &'static str, title: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            title,
            field_type,
            rules: Vec::new(),
            description: None,
            placeholder: None,
        }
    }

    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules = rules.into_iter().collect();
        self
    }

    #[must_use]
    pub const fn description(mut self, text: &'static str) -> Self {
        self.description = Some(text);
        self
    }

    #[must_use]
    pub const fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    /// Whether the rule chain contains [`Rule::Required`].
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }
}

/// A validation rule: an independent pure predicate over a candidate value.
///
/// See [`crate::rules`] for evaluation semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Value must be present and non-empty.
    Required,
    /// String must be at least this many characters.
    MinLength(usize),
    /// String must be at most this many characters.
    MaxLength(usize),
    /// Number must be at least this value.
    Min(f64),
    /// Number must be at most this value.
    Max(f64),
    /// Array must have at least this many items.
    MinItems(usize),
    /// Array must have at most this many items.
    MaxItems(usize),
}

/// The closed set of field value types.
#[derive(Debug, Clone)]
pub enum FieldType {
    String,
    /// Multi-line text with an editor row hint.
    Text { rows: u8 },
    Slug(SlugOptions),
    Number,
    /// Boolean with an initial value.
    Boolean { initial: bool },
    Datetime,
    Url,
    Image(ImageOptions),
    Array(ArrayDef),
    /// Weak reference to another document type.
    Reference { to: &'static str },
    /// Anonymous inline object with its own field list.
    Object(Vec<FieldDef>),
}

/// Options for slug fields: derivation source and length cap.
#[derive(Debug, Clone, Copy)]
pub struct SlugOptions {
    /// Name of the sibling field the slug is derived from.
    pub source: &'static str,
    pub max_length: usize,
}

/// Options for image fields.
#[derive(Debug, Clone)]
pub struct ImageOptions {
    /// Whether the platform records focal-point crop metadata.
    pub hotspot: bool,
    /// Extra fields carried alongside the asset (alt text, caption).
    pub fields: Vec<FieldDef>,
}

/// An array field: member types plus an optional editor layout.
#[derive(Debug, Clone)]
pub struct ArrayDef {
    pub of: Vec<ArrayMember>,
    pub layout: Option<ArrayLayout>,
}

impl ArrayDef {
    #[must_use]
    pub const fn of(members: Vec<ArrayMember>) -> Self {
        Self {
            of: members,
            layout: None,
        }
    }
}

/// Editor layout hint for array fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayLayout {
    Tags,
}

/// One allowed member type of an array field.
#[derive(Debug, Clone)]
pub enum ArrayMember {
    /// A named embedded type resolved through the registry, e.g. `"blogSection"`.
    Type(&'static str),
    /// Plain string member.
    String,
    /// Portable-text block member.
    Block(BlockOptions),
    /// Inline image member.
    Image(ImageOptions),
    /// Code block member.
    Code(CodeOptions),
    /// Anonymous object member with its own field list.
    Object(Vec<FieldDef>),
}

impl ArrayMember {
    /// The `_type` tag that identifies elements of this member, if any.
    /// Anonymous object and plain string members are untagged.
    #[must_use]
    pub const fn tag(&self) -> Option<&'static str> {
        match self {
            Self::Type(name) => Some(name),
            Self::Block(_) => Some("block"),
            Self::Image(_) => Some("image"),
            Self::Code(_) => Some("code"),
            Self::String | Self::Object(_) => None,
        }
    }
}

/// Options for portable-text block members.
#[derive(Debug, Clone)]
pub struct BlockOptions {
    pub styles: &'static [BlockStyle],
    pub lists: &'static [ListKind],
    pub decorators: &'static [Decorator],
    /// Inline annotation objects (e.g. links) usable as span marks.
    pub annotations: Vec<AnnotationDef>,
}

/// An annotation object type available inside block marks.
#[derive(Debug, Clone)]
pub struct AnnotationDef {
    pub name: &'static str,
    pub title: &'static str,
    pub fields: Vec<FieldDef>,
}

/// Options for code block members.
#[derive(Debug, Clone)]
pub struct CodeOptions {
    /// Default language preselected in the editor.
    pub language: CodeLanguage,
    pub language_alternatives: &'static [CodeLanguage],
    pub with_filename: bool,
}

/// Preview selection and composition for a type's editor listing row.
#[derive(Debug, Clone)]
pub struct PreviewSpec {
    /// `(key, dot-path)` pairs resolved against the document.
    pub select: &'static [(&'static str, &'static str)],
    /// Pure composition of the resolved selection into display values.
    pub prepare: fn(&PreviewSelection) -> PreviewValues,
}

/// A named, declarative sort specification consumed by listing views.
#[derive(Debug, Clone)]
pub struct OrderingSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub by: &'static [(&'static str, SortDirection)],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_builder_collects_rules_and_description() {
        let field = FieldDef::new("title", "Title", FieldType::String)
            .rules([Rule::Required, Rule::MaxLength(100)])
            .description("Post headline");
        assert!(field.is_required());
        assert_eq!(field.rules.len(), 2);
        assert_eq!(field.description, Some("Post headline"));
        assert_eq!(field.placeholder, None);
    }

    #[test]
    fn array_member_tags() {
        assert_eq!(ArrayMember::Type("blogSection").tag(), Some("blogSection"));
        assert_eq!(
            ArrayMember::Code(CodeOptions {
                language: CodeLanguage::Javascript,
                language_alternatives: CodeLanguage::ALL,
                with_filename: true,
            })
            .tag(),
            Some("code")
        );
        assert_eq!(ArrayMember::String.tag(), None);
        assert_eq!(ArrayMember::Object(vec![]).tag(), None);
    }
}
