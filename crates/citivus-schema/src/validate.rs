//! Structural validation of candidate documents against type declarations.
//!
//! [`validate_document`] walks a [`TypeDef`]'s field list over a raw
//! `serde_json::Value`, applies each field's rule chain, and recurses into
//! slugs, references, images, objects, and arrays (embedded named types
//! resolve through the registry). It is pure and synchronous, and collects
//! every violation instead of failing fast — the host surfaces the list to
//! the editor at save time.

use chrono::DateTime;
use serde_json::Value;

use crate::registry::SchemaRegistry;
use crate::rules::check_all;
use crate::types::{
    ArrayMember, BlockOptions, CodeOptions, FieldDef, FieldType, ImageOptions, SlugOptions,
};
use crate::SchemaError;

/// One failed validation rule, with the path of the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted field path, e.g. `sections[0].order`.
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validate a candidate document against a registered type.
///
/// Returns every violation found; an empty list means the document passes.
///
/// # Errors
///
/// Returns [`SchemaError::UnknownType`] if `type_name` is not registered.
pub fn validate_document(
    registry: &SchemaRegistry,
    type_name: &str,
    doc: &Value,
) -> Result<Vec<Violation>, SchemaError> {
    let type_def = registry
        .get(type_name)
        .ok_or_else(|| SchemaError::UnknownType(type_name.to_string()))?;

    let mut violations = Vec::new();
    if doc.is_object() {
        validate_fields(registry, &type_def.fields, doc, "", &mut violations);
    } else {
        violations.push(Violation {
            path: String::new(),
            message: "Expected an object".to_string(),
        });
    }
    Ok(violations)
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn push(out: &mut Vec<Violation>, path: &str, message: impl Into<String>) {
    out.push(Violation {
        path: path.to_string(),
        message: message.into(),
    });
}

fn validate_fields(
    registry: &SchemaRegistry,
    fields: &[FieldDef],
    doc: &Value,
    prefix: &str,
    out: &mut Vec<Violation>,
) {
    for field in fields {
        let path = join(prefix, field.name);
        let value = doc.get(field.name);

        for message in check_all(&field.rules, value) {
            push(out, &path, message);
        }

        match value {
            None | Some(Value::Null) => {}
            Some(value) => validate_value(registry, &field.field_type, value, &path, out),
        }
    }
}

#[allow(clippy::too_many_lines)]
fn validate_value(
    registry: &SchemaRegistry,
    field_type: &FieldType,
    value: &Value,
    path: &str,
    out: &mut Vec<Violation>,
) {
    match field_type {
        FieldType::String | FieldType::Text { .. } | FieldType::Url => {
            if !value.is_string() {
                push(out, path, "Expected a string");
            }
        }
        FieldType::Number => {
            if !value.is_number() {
                push(out, path, "Expected a number");
            }
        }
        FieldType::Boolean { .. } => {
            if !value.is_boolean() {
                push(out, path, "Expected a boolean");
            }
        }
        FieldType::Datetime => match value.as_str() {
            Some(s) => {
                if DateTime::parse_from_rfc3339(s).is_err() {
                    push(out, path, "Expected an RFC 3339 datetime");
                }
            }
            None => push(out, path, "Expected a string"),
        },
        FieldType::Slug(options) => validate_slug(options, value, path, out),
        FieldType::Reference { .. } => validate_reference(value, path, out),
        FieldType::Image(options) => validate_image(registry, options, value, path, out),
        FieldType::Object(fields) => {
            if value.is_object() {
                validate_fields(registry, fields, value, path, out);
            } else {
                push(out, path, "Expected an object");
            }
        }
        FieldType::Array(array) => match value.as_array() {
            Some(elements) => {
                for (index, element) in elements.iter().enumerate() {
                    let element_path = format!("{path}[{index}]");
                    validate_element(registry, &array.of, element, &element_path, out);
                }
            }
            None => push(out, path, "Expected an array"),
        },
    }
}

fn validate_slug(options: &SlugOptions, value: &Value, path: &str, out: &mut Vec<Violation>) {
    let Some(current) = value.get("current").and_then(Value::as_str) else {
        push(out, path, "Expected a slug with a 'current' string");
        return;
    };
    if current.is_empty() {
        push(out, path, "Slug must not be empty");
    } else if current.chars().count() > options.max_length {
        push(
            out,
            path,
            format!("Slug must be at most {} characters long", options.max_length),
        );
    }
}

fn validate_reference(value: &Value, path: &str, out: &mut Vec<Violation>) {
    match value.get("_ref").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => {}
        _ => push(out, path, "Expected a reference with a '_ref' id"),
    }
}

fn validate_image(
    registry: &SchemaRegistry,
    options: &ImageOptions,
    value: &Value,
    path: &str,
    out: &mut Vec<Violation>,
) {
    if !value.is_object() {
        push(out, path, "Expected an image object");
        return;
    }
    // The asset itself may still be unset in a draft, but once present it
    // must be a well-formed weak reference.
    if let Some(asset) = value.get("asset") {
        validate_reference(asset, &join(path, "asset"), out);
    }
    validate_fields(registry, &options.fields, value, path, out);
}

/// Dispatch one array element to the member type it matches.
fn validate_element(
    registry: &SchemaRegistry,
    members: &[ArrayMember],
    element: &Value,
    path: &str,
    out: &mut Vec<Violation>,
) {
    // Plain string members are untagged.
    if element.is_string() {
        if members.iter().any(|m| matches!(m, ArrayMember::String)) {
            return;
        }
        push(out, path, "Unexpected string element");
        return;
    }

    if let Some(tag) = element.get("_type").and_then(Value::as_str) {
        let Some(member) = members.iter().find(|m| m.tag() == Some(tag)) else {
            push(out, path, format!("Unexpected element type '{tag}'"));
            return;
        };
        validate_member(registry, member, element, path, out);
        return;
    }

    // Untagged object: unambiguous only if exactly one anonymous member exists.
    let mut anonymous = members
        .iter()
        .filter(|m| matches!(m, ArrayMember::Object(_)));
    match (anonymous.next(), anonymous.next()) {
        (Some(member), None) => validate_member(registry, member, element, path, out),
        _ => push(out, path, "Element is missing a '_type' tag"),
    }
}

fn validate_member(
    registry: &SchemaRegistry,
    member: &ArrayMember,
    element: &Value,
    path: &str,
    out: &mut Vec<Violation>,
) {
    match member {
        ArrayMember::String => {}
        ArrayMember::Type(name) => match registry.get(name) {
            Some(type_def) => validate_fields(registry, &type_def.fields, element, path, out),
            None => push(out, path, format!("Unknown member type '{name}'")),
        },
        ArrayMember::Object(fields) => validate_fields(registry, fields, element, path, out),
        ArrayMember::Block(options) => validate_block(options, element, path, out),
        ArrayMember::Image(options) => validate_image(registry, options, element, path, out),
        ArrayMember::Code(options) => validate_code(options, element, path, out),
    }
}

fn validate_block(options: &BlockOptions, element: &Value, path: &str, out: &mut Vec<Violation>) {
    if let Some(style) = element.get("style").and_then(Value::as_str) {
        if !options.styles.iter().any(|s| s.as_str() == style) {
            push(out, path, format!("Style '{style}' is not allowed here"));
        }
    }
    if let Some(list) = element.get("listItem").and_then(Value::as_str) {
        if !options.lists.iter().any(|l| l.as_str() == list) {
            push(out, path, format!("List kind '{list}' is not allowed here"));
        }
    }
    match element.get("children").and_then(Value::as_array) {
        Some(children) => {
            for (index, child) in children.iter().enumerate() {
                if child.get("text").and_then(Value::as_str).is_none() {
                    push(
                        out,
                        &format!("{path}.children[{index}]"),
                        "Expected a span with a 'text' string",
                    );
                }
            }
        }
        None => push(out, path, "Block must have a 'children' array"),
    }
}

fn validate_code(options: &CodeOptions, element: &Value, path: &str, out: &mut Vec<Violation>) {
    if element.get("code").and_then(Value::as_str).is_none() {
        push(out, path, "Code block must have a 'code' string");
    }
    if let Some(language) = element.get("language").and_then(Value::as_str) {
        if !options
            .language_alternatives
            .iter()
            .any(|l| l.as_str() == language)
        {
            push(out, path, format!("Language '{language}' is not offered here"));
        }
    }
}
