//! Rule evaluation: each [`Rule`] is an independent pure predicate over a
//! candidate JSON value, returning pass or a human-readable message.
//!
//! Chains apply sequentially. An absent (or `null`) value only trips
//! [`Rule::Required`]; every other rule is skipped so optional fields stay
//! optional. Enforcement and reporting happen in whatever host performs
//! save-time checks — nothing here retries or recovers.

use serde_json::Value;

use crate::types::Rule;

impl Rule {
    /// Evaluate this rule against a candidate value.
    ///
    /// `None` and `Value::Null` both mean "absent".
    ///
    /// # Errors
    ///
    /// Returns the human-readable failure message.
    pub fn check(&self, value: Option<&Value>) -> Result<(), String> {
        let value = match value {
            None | Some(Value::Null) => {
                return match self {
                    Self::Required => Err("Required".to_string()),
                    _ => Ok(()),
                };
            }
            Some(v) => v,
        };

        match self {
            Self::Required => check_not_empty(value),
            Self::MinLength(min) => match value.as_str() {
                Some(s) if s.chars().count() < *min => {
                    Err(format!("Must be at least {min} characters long"))
                }
                Some(_) => Ok(()),
                None => Err("Expected a string".to_string()),
            },
            Self::MaxLength(max) => match value.as_str() {
                Some(s) if s.chars().count() > *max => {
                    Err(format!("Must be at most {max} characters long"))
                }
                Some(_) => Ok(()),
                None => Err("Expected a string".to_string()),
            },
            Self::Min(min) => match value.as_f64() {
                Some(n) if n < *min => Err(format!("Must be greater than or equal to {min}")),
                Some(_) => Ok(()),
                None => Err("Expected a number".to_string()),
            },
            Self::Max(max) => match value.as_f64() {
                Some(n) if n > *max => Err(format!("Must be less than or equal to {max}")),
                Some(_) => Ok(()),
                None => Err("Expected a number".to_string()),
            },
            Self::MinItems(min) => match value.as_array() {
                Some(items) if items.len() < *min => {
                    Err(format!("Must have at least {min} items"))
                }
                Some(_) => Ok(()),
                None => Err("Expected an array".to_string()),
            },
            Self::MaxItems(max) => match value.as_array() {
                Some(items) if items.len() > *max => {
                    Err(format!("Must have at most {max} items"))
                }
                Some(_) => Ok(()),
                None => Err("Expected an array".to_string()),
            },
        }
    }
}

/// Required semantics beyond plain presence: empty strings, arrays, and
/// objects all count as missing, matching the platform's save-time behavior.
fn check_not_empty(value: &Value) -> Result<(), String> {
    let empty = match value {
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if empty {
        Err("Required".to_string())
    } else {
        Ok(())
    }
}

/// Apply a rule chain sequentially, collecting every failure message.
#[must_use]
pub fn check_all(rules: &[Rule], value: Option<&Value>) -> Vec<String> {
    rules
        .iter()
        .filter_map(|rule| rule.check(value).err())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn required_fails_on_absent_and_null() {
        assert!(Rule::Required.check(None).is_err());
        assert!(Rule::Required.check(Some(&Value::Null)).is_err());
    }

    #[rstest]
    #[case(json!(""))]
    #[case(json!([]))]
    #[case(json!({}))]
    fn required_fails_on_empty_values(#[case] value: Value) {
        assert!(Rule::Required.check(Some(&value)).is_err());
    }

    #[rstest]
    #[case(json!("x"))]
    #[case(json!(0))]
    #[case(json!(false))]
    #[case(json!(["a"]))]
    fn required_passes_on_present_values(#[case] value: Value) {
        assert!(Rule::Required.check(Some(&value)).is_ok());
    }

    #[test]
    fn non_required_rules_skip_absent_values() {
        assert!(Rule::MaxLength(5).check(None).is_ok());
        assert!(Rule::Min(1.0).check(Some(&Value::Null)).is_ok());
        assert!(Rule::MinItems(1).check(None).is_ok());
    }

    #[test]
    fn max_length_boundary() {
        let exactly = json!("x".repeat(100));
        let over = json!("x".repeat(101));
        assert!(Rule::MaxLength(100).check(Some(&exactly)).is_ok());
        assert!(Rule::MaxLength(100).check(Some(&over)).is_err());
    }

    #[test]
    fn max_length_counts_chars_not_bytes() {
        let value = json!("éé");
        assert!(Rule::MaxLength(2).check(Some(&value)).is_ok());
    }

    #[rstest]
    #[case(json!(0), false)]
    #[case(json!(-3), false)]
    #[case(json!(1), true)]
    #[case(json!(42), true)]
    fn min_one_accepts_positive_integers(#[case] value: Value, #[case] ok: bool) {
        assert_eq!(Rule::Min(1.0).check(Some(&value)).is_ok(), ok);
    }

    #[test]
    fn min_items_boundary() {
        assert!(Rule::MinItems(1).check(Some(&json!([]))).is_err());
        assert!(Rule::MinItems(1).check(Some(&json!([1]))).is_ok());
    }

    #[test]
    fn type_mismatch_reports_expected_type() {
        let err = Rule::Min(1.0).check(Some(&json!("nope"))).unwrap_err();
        assert_eq!(err, "Expected a number");
        let err = Rule::MaxLength(5).check(Some(&json!(7))).unwrap_err();
        assert_eq!(err, "Expected a string");
    }

    #[test]
    fn chains_collect_every_failure() {
        let messages = check_all(&[Rule::Required, Rule::MaxLength(3)], Some(&json!("toolong")));
        assert_eq!(messages.len(), 1);
        let messages = check_all(&[Rule::Required, Rule::MaxLength(3)], None);
        assert_eq!(messages, vec!["Required".to_string()]);
    }
}
