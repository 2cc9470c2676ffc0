//! Applying declared orderings to document listings.
//!
//! Orderings are query-time sort specifications the platform's listing UI
//! consumes; [`apply_ordering`] reproduces their semantics over raw document
//! values so listings can be checked and composed host-side.

use std::cmp::Ordering;

use chrono::DateTime;
use serde_json::Value;

use citivus_core::enums::SortDirection;

use crate::preview::select_path;
use crate::types::OrderingSpec;

/// Stable-sort documents by an ordering spec.
///
/// Datetime strings compare as instants; other strings compare
/// lexicographically; numbers numerically. Documents missing a sort field
/// sort last regardless of direction.
pub fn apply_ordering(docs: &mut [Value], spec: &OrderingSpec) {
    docs.sort_by(|a, b| {
        for &(field, direction) in spec.by {
            let ordering = match (select_path(a, field), select_path(b, field)) {
                (Some(left), Some(right)) => {
                    let cmp = compare_values(left, right);
                    match direction {
                        SortDirection::Asc => cmp,
                        SortDirection::Desc => cmp.reverse(),
                    }
                }
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
}

fn compare_values(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::String(a), Value::String(b)) => {
            match (
                DateTime::parse_from_rfc3339(a),
                DateTime::parse_from_rfc3339(b),
            ) {
                (Ok(a), Ok(b)) => a.cmp(&b),
                _ => a.cmp(b),
            }
        }
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::blog_post;
    use serde_json::json;

    fn posts() -> Vec<Value> {
        vec![
            json!({"title": "B", "publishDate": "2024-02-01T00:00:00Z"}),
            json!({"title": "C", "publishDate": "2024-03-01T12:30:00Z"}),
            json!({"title": "A", "publishDate": "2024-01-15T09:00:00Z"}),
        ]
    }

    fn ordering(name: &str) -> OrderingSpec {
        blog_post()
            .orderings
            .into_iter()
            .find(|o| o.name == name)
            .expect("declared ordering")
    }

    #[test]
    fn publish_date_desc_is_non_increasing() {
        let mut docs = posts();
        apply_ordering(&mut docs, &ordering("publishDateDesc"));
        let titles: Vec<_> = docs.iter().map(|d| d["title"].as_str().unwrap()).collect();
        assert_eq!(titles, ["C", "B", "A"]);
    }

    #[test]
    fn publish_date_asc_is_non_decreasing() {
        let mut docs = posts();
        apply_ordering(&mut docs, &ordering("publishDateAsc"));
        let titles: Vec<_> = docs.iter().map(|d| d["title"].as_str().unwrap()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn datetimes_compare_as_instants_across_offsets() {
        // +02:00 makes this earlier than the Z-suffixed value even though it
        // sorts later as a plain string
        let mut docs = vec![
            json!({"title": "utc", "publishDate": "2024-02-01T09:00:00Z"}),
            json!({"title": "offset", "publishDate": "2024-02-01T10:00:00+02:00"}),
        ];
        apply_ordering(&mut docs, &ordering("publishDateAsc"));
        assert_eq!(docs[0]["title"], "offset");
    }

    #[test]
    fn missing_field_sorts_last_in_both_directions() {
        for name in ["publishDateAsc", "publishDateDesc"] {
            let mut docs = vec![
                json!({"title": "undated"}),
                json!({"title": "dated", "publishDate": "2024-02-01T00:00:00Z"}),
            ];
            apply_ordering(&mut docs, &ordering(name));
            assert_eq!(docs[1]["title"], "undated", "direction {name}");
        }
    }
}
