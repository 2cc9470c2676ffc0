//! Serde roundtrip and JsonSchema validation tests for all entity types.

use schemars::schema_for;
use citivus_core::blocks::{CodeBlock, ImageBlock, LinkAnnotation, SectionBlock, Span, TextBlock};
use citivus_core::entities::*;
use citivus_core::enums::*;
use citivus_core::slug::Slug;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_section(title: &str, order: u32) -> BlogSection {
    BlogSection {
        title: title.to_string(),
        slug: Slug::derive(title),
        content: vec![
            SectionBlock::Text(TextBlock {
                style: BlockStyle::H2,
                list_item: None,
                children: vec![
                    Span::plain("See the "),
                    Span {
                        text: "manual".into(),
                        marks: vec!["strong".into(), "lnk1".into()],
                    },
                ],
                mark_defs: vec![LinkAnnotation {
                    key: "lnk1".into(),
                    href: "https://example.com/manual".into(),
                }],
            }),
            SectionBlock::Image(ImageBlock {
                asset: Reference::new("image-figure1"),
                hotspot: None,
                alt: Some("A figure".into()),
                caption: Some("Figure 1".into()),
            }),
            SectionBlock::Code(CodeBlock {
                language: CodeLanguage::Python,
                filename: Some("demo.py".into()),
                code: "print('hi')".into(),
            }),
        ],
        image: None,
        order,
    }
}

roundtrip_and_validate!(
    category_roundtrip,
    Category,
    Category {
        name: "Engineering".into(),
    }
);

roundtrip_and_validate!(author_roundtrip, Author, Author::named("Jane Doe"));

roundtrip_and_validate!(
    section_roundtrip,
    BlogSection,
    sample_section("Getting Started", 1)
);

roundtrip_and_validate!(
    post_minimal_roundtrip,
    BlogPost,
    BlogPost {
        title: "Hello World, Part 1!".into(),
        slug: Slug::derive("Hello World, Part 1!"),
        excerpt: "An introduction.".into(),
        table_of_contents: vec![],
        sections: vec![sample_section("Intro", 1)],
        featured_image: FeaturedImage {
            asset: Reference::new("image-hero"),
            hotspot: None,
            alt: None,
        },
        author: Reference::new("author-jane"),
        category: Reference::new("category-eng"),
        tags: None,
        publish_date: "2024-03-01T09:00:00Z".parse().unwrap(),
        read_time: None,
        featured: false,
        seo: None,
    }
);

roundtrip_and_validate!(
    post_full_roundtrip,
    BlogPost,
    BlogPost {
        title: "Hello World, Part 2!".into(),
        slug: Slug::derive("Hello World, Part 2!"),
        excerpt: "A deeper dive.".into(),
        table_of_contents: vec![
            TocEntry {
                title: "Intro".into(),
                slug: Slug::derive("Intro"),
                order: 1,
            },
            TocEntry {
                title: "Details".into(),
                slug: Slug::derive("Details"),
                order: 2,
            },
        ],
        sections: vec![sample_section("Intro", 1), sample_section("Details", 2)],
        featured_image: FeaturedImage {
            asset: Reference::new("image-hero2"),
            hotspot: Some(Hotspot {
                x: 0.4,
                y: 0.6,
                height: 0.8,
                width: 0.8,
            }),
            alt: Some("Hero".into()),
        },
        author: Reference::new("author-jane"),
        category: Reference::new("category-eng"),
        tags: Some(vec!["rust".into(), "blog".into()]),
        publish_date: "2024-04-01T09:00:00Z".parse().unwrap(),
        read_time: Some("12 min read".into()),
        featured: true,
        seo: Some(Seo {
            meta_description: Some("A deeper dive into hello world.".into()),
            keywords: Some(vec!["hello".into(), "world".into()]),
        }),
    }
);

#[test]
fn generated_post_schema_rejects_overlong_title() {
    let schema = serde_json::to_value(schema_for!(BlogPost)).unwrap();
    let mut instance =
        serde_json::to_value(&BlogPost {
            title: "x".repeat(101),
            slug: Slug::derive("x"),
            excerpt: "E".into(),
            table_of_contents: vec![],
            sections: vec![sample_section("S", 1)],
            featured_image: FeaturedImage {
                asset: Reference::new("image-1"),
                hotspot: None,
                alt: None,
            },
            author: Reference::new("author-1"),
            category: Reference::new("category-1"),
            tags: None,
            publish_date: "2024-03-01T09:00:00Z".parse().unwrap(),
            read_time: None,
            featured: false,
            seo: None,
        })
        .unwrap();

    let errors = validate_against_schema(&schema, &instance);
    assert!(!errors.is_empty(), "101-char title should fail maxLength");

    // Exactly 100 characters passes.
    instance["title"] = serde_json::Value::String("x".repeat(100));
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "100-char title should pass: {errors:?}");
}

#[test]
fn generated_section_schema_rejects_zero_order() {
    let schema = serde_json::to_value(schema_for!(BlogSection)).unwrap();
    let mut instance = serde_json::to_value(sample_section("S", 1)).unwrap();
    instance["order"] = serde_json::json!(0);
    let errors = validate_against_schema(&schema, &instance);
    assert!(!errors.is_empty(), "order 0 should fail minimum");
}
