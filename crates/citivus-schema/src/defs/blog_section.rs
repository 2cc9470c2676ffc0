use citivus_core::enums::{BlockStyle, CodeLanguage, Decorator, ListKind};

use crate::preview::blog_section_prepare;
use crate::types::{
    AnnotationDef, ArrayDef, ArrayMember, BlockOptions, CodeOptions, FieldDef, FieldType,
    ImageOptions, PreviewSpec, Rule, SlugOptions, TypeDef, TypeKind,
};

/// The `blogSection` object type: a reusable content block embedded in posts.
///
/// Not independently addressable — sections exist only inside a post's
/// `sections` array.
#[must_use]
pub fn blog_section() -> TypeDef {
    TypeDef {
        name: "blogSection",
        title: "Blog Section",
        kind: TypeKind::Object,
        fields: vec![
            FieldDef::new("title", "Section Title", FieldType::String).rules([Rule::Required]),
            FieldDef::new(
                "slug",
                "Section Slug",
                FieldType::Slug(SlugOptions {
                    source: "title",
                    max_length: 96,
                }),
            )
            .rules([Rule::Required]),
            FieldDef::new(
                "content",
                "Content",
                FieldType::Array(ArrayDef::of(vec![
                    ArrayMember::Block(BlockOptions {
                        styles: BlockStyle::ALL,
                        lists: ListKind::ALL,
                        decorators: Decorator::ALL,
                        annotations: vec![AnnotationDef {
                            name: "link",
                            title: "Link",
                            fields: vec![FieldDef::new("href", "URL", FieldType::Url)],
                        }],
                    }),
                    ArrayMember::Image(ImageOptions {
                        hotspot: true,
                        fields: vec![
                            FieldDef::new("alt", "Alternative Text", FieldType::String),
                            FieldDef::new("caption", "Caption", FieldType::String),
                        ],
                    }),
                    ArrayMember::Code(CodeOptions {
                        language: CodeLanguage::Javascript,
                        language_alternatives: CodeLanguage::ALL,
                        with_filename: true,
                    }),
                ])),
            )
            .rules([Rule::Required]),
            // Optional — sections may or may not carry a standalone image.
            FieldDef::new(
                "image",
                "Section Image",
                FieldType::Image(ImageOptions {
                    hotspot: true,
                    fields: vec![
                        FieldDef::new("alt", "Alternative Text", FieldType::String),
                        FieldDef::new("caption", "Caption", FieldType::String),
                    ],
                }),
            ),
            FieldDef::new("order", "Section Order", FieldType::Number)
                .rules([Rule::Required, Rule::Min(1.0)])
                .description("Order in which this section appears in the blog post"),
        ],
        preview: Some(PreviewSpec {
            select: &[("title", "title"), ("order", "order")],
            prepare: blog_section_prepare,
        }),
        orderings: vec![],
    }
}
