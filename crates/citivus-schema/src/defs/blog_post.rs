use citivus_core::enums::SortDirection;

use crate::preview::blog_post_prepare;
use crate::types::{
    ArrayDef, ArrayLayout, ArrayMember, FieldDef, FieldType, ImageOptions, OrderingSpec,
    PreviewSpec, Rule, SlugOptions, TypeDef, TypeKind,
};

/// The `blogPost` document type: the top-level content entity.
#[must_use]
pub fn blog_post() -> TypeDef {
    TypeDef {
        name: "blogPost",
        title: "Blog Post",
        kind: TypeKind::Document,
        fields: vec![
            FieldDef::new("title", "Title", FieldType::String)
                .rules([Rule::Required, Rule::MaxLength(100)]),
            FieldDef::new(
                "slug",
                "Slug",
                FieldType::Slug(SlugOptions {
                    source: "title",
                    max_length: 96,
                }),
            )
            .rules([Rule::Required]),
            FieldDef::new("excerpt", "Excerpt", FieldType::Text { rows: 3 })
                .rules([Rule::Required, Rule::MaxLength(200)]),
            FieldDef::new(
                "tableOfContents",
                "Table of Contents",
                FieldType::Array(ArrayDef::of(vec![ArrayMember::Object(vec![
                    FieldDef::new("title", "Section Title", FieldType::String)
                        .rules([Rule::Required]),
                    FieldDef::new(
                        "slug",
                        "Section Slug",
                        FieldType::Slug(SlugOptions {
                            source: "title",
                            max_length: 96,
                        }),
                    )
                    .rules([Rule::Required]),
                    FieldDef::new("order", "Order", FieldType::Number)
                        .rules([Rule::Required, Rule::Min(1.0)]),
                ])])),
            )
            .description("This will be automatically generated from your blog sections"),
            FieldDef::new(
                "sections",
                "Blog Sections",
                FieldType::Array(ArrayDef::of(vec![ArrayMember::Type("blogSection")])),
            )
            .rules([Rule::Required, Rule::MinItems(1)])
            .description("Add multiple sections to build your blog post content"),
            FieldDef::new(
                "featuredImage",
                "Featured Image",
                FieldType::Image(ImageOptions {
                    hotspot: true,
                    fields: vec![FieldDef::new("alt", "Alternative Text", FieldType::String)],
                }),
            )
            .rules([Rule::Required]),
            FieldDef::new("author", "Author", FieldType::Reference { to: "author" })
                .rules([Rule::Required]),
            FieldDef::new("category", "Category", FieldType::Reference { to: "category" })
                .rules([Rule::Required]),
            FieldDef::new(
                "tags",
                "Tags",
                FieldType::Array(ArrayDef {
                    of: vec![ArrayMember::String],
                    layout: Some(ArrayLayout::Tags),
                }),
            ),
            FieldDef::new("publishDate", "Publish Date", FieldType::Datetime)
                .rules([Rule::Required]),
            FieldDef::new("readTime", "Read Time", FieldType::String)
                .placeholder("e.g., 8 min read"),
            FieldDef::new("featured", "Featured Post", FieldType::Boolean { initial: false }),
            FieldDef::new(
                "seo",
                "SEO",
                FieldType::Object(vec![
                    FieldDef::new(
                        "metaDescription",
                        "Meta Description",
                        FieldType::Text { rows: 3 },
                    ),
                    FieldDef::new(
                        "keywords",
                        "Keywords",
                        FieldType::Array(ArrayDef::of(vec![ArrayMember::String])),
                    ),
                ]),
            ),
        ],
        preview: Some(PreviewSpec {
            select: &[
                ("title", "title"),
                ("author", "author.name"),
                ("media", "featuredImage"),
            ],
            prepare: blog_post_prepare,
        }),
        orderings: vec![
            OrderingSpec {
                name: "publishDateDesc",
                title: "Publish Date, New",
                by: &[("publishDate", SortDirection::Desc)],
            },
            OrderingSpec {
                name: "publishDateAsc",
                title: "Publish Date, Old",
                by: &[("publishDate", SortDirection::Asc)],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_is_a_document_type() {
        assert_eq!(blog_post().kind, TypeKind::Document);
    }

    #[test]
    fn field_order_matches_the_editor_layout() {
        let names: Vec<_> = blog_post().fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            [
                "title",
                "slug",
                "excerpt",
                "tableOfContents",
                "sections",
                "featuredImage",
                "author",
                "category",
                "tags",
                "publishDate",
                "readTime",
                "featured",
                "seo",
            ]
        );
    }

    #[test]
    fn title_caps_at_100_characters() {
        let title = blog_post();
        let rules = &title.field("title").unwrap().rules;
        assert!(rules.contains(&Rule::MaxLength(100)));
    }

    #[test]
    fn excerpt_caps_at_200_characters() {
        let def = blog_post();
        assert!(def
            .field("excerpt")
            .unwrap()
            .rules
            .contains(&Rule::MaxLength(200)));
    }

    #[test]
    fn sections_require_at_least_one_entry() {
        let def = blog_post();
        let rules = &def.field("sections").unwrap().rules;
        assert!(rules.contains(&Rule::Required));
        assert!(rules.contains(&Rule::MinItems(1)));
    }

    #[test]
    fn toc_is_optional_and_independently_editable() {
        // no rule chain: the ToC may drift from sections (documented gap)
        assert!(blog_post().field("tableOfContents").unwrap().rules.is_empty());
    }

    #[test]
    fn references_target_author_and_category() {
        let def = blog_post();
        let FieldType::Reference { to } = def.field("author").unwrap().field_type else {
            panic!("author must be a reference");
        };
        assert_eq!(to, "author");
        let FieldType::Reference { to } = def.field("category").unwrap().field_type else {
            panic!("category must be a reference");
        };
        assert_eq!(to, "category");
    }

    #[test]
    fn tags_use_the_tags_layout() {
        let def = blog_post();
        let FieldType::Array(array) = &def.field("tags").unwrap().field_type else {
            panic!("tags must be an array");
        };
        assert_eq!(array.layout, Some(ArrayLayout::Tags));
    }

    #[test]
    fn declares_both_publish_date_orderings() {
        let def = blog_post();
        let names: Vec<_> = def.orderings.iter().map(|o| o.name).collect();
        assert_eq!(names, ["publishDateDesc", "publishDateAsc"]);
    }
}
