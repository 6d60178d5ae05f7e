//! Response Normalizer: pulls the JSON object out of free-form model output
//! and enforces the task's shape contract.
//!
//! Extraction is permissive: the span runs from the FIRST `{` to
//! the LAST `}` in the text, which tolerates prose and markdown fences around
//! the object. Known limitation: two separate objects, or stray braces in
//! surrounding prose, produce a span that fails to parse and therefore falls
//! back. `extract_json_object` is the only place that knows this rule.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::generation::task::TaskKind;

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("no JSON object found in model output")]
    NoJsonObject,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model output is JSON but not an object")]
    NotAnObject,

    #[error("result is missing required key '{0}'")]
    MissingKey(&'static str),
}

/// Greedy first-`{`-to-last-`}` span, or `None` if no such pair exists.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Checks that `object` carries every required key for `task`.
/// A key set to `null` or an empty string counts as missing.
pub fn check_shape(task: TaskKind, object: &Map<String, Value>) -> Result<(), ShapeError> {
    match task
        .required_keys()
        .iter()
        .find(|k| !object.get(**k).is_some_and(is_filled))
    {
        Some(missing) => Err(ShapeError::MissingKey(*missing)),
        None => Ok(()),
    }
}

fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

/// Extracts, parses and validates. On success the parsed object is returned
/// as-is: no coercion beyond the required-key check.
pub fn normalize(task: TaskKind, text: &str) -> Result<Value, ShapeError> {
    let span = extract_json_object(text).ok_or(ShapeError::NoJsonObject)?;
    let value: Value = serde_json::from_str(span)?;
    let object = value.as_object().ok_or(ShapeError::NotAnObject)?;
    check_shape(task, object)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_object_from_prose_and_fences() {
        let text = "Here is the result:\n```json\n{\"contact\":{\"name\":\"A\"},\"summary\":\"x\"}\n```";
        let value = normalize(TaskKind::Resume, text).unwrap();
        assert_eq!(value, json!({"contact": {"name": "A"}, "summary": "x"}));
    }

    #[test]
    fn test_text_without_braces_fails() {
        assert!(extract_json_object("I cannot help with that.").is_none());
        assert!(matches!(
            normalize(TaskKind::Resume, "I cannot help with that."),
            Err(ShapeError::NoJsonObject)
        ));
    }

    #[test]
    fn test_closing_before_opening_is_not_an_object() {
        assert!(extract_json_object("} oops {").is_none());
    }

    #[test]
    fn test_missing_required_key_is_rejected_not_partial() {
        let text = r#"{"contact": {"name": "A"}}"#;
        match normalize(TaskKind::Resume, text) {
            Err(ShapeError::MissingKey(key)) => assert_eq!(key, "summary"),
            other => panic!("expected MissingKey, got {other:?}"),
        }
    }

    #[test]
    fn test_unparsable_span_is_parse_error() {
        let text = r#"{"profileScore": 70, "headline": {"current": "x",}"#;
        assert!(matches!(
            normalize(TaskKind::ProfileOptimization, text),
            Err(ShapeError::Parse(_))
        ));
    }

    #[test]
    fn test_two_objects_in_one_reply_fail_by_design() {
        let text = r#"{"messages": []} and also {"messages": []}"#;
        assert!(matches!(
            normalize(TaskKind::ConnectionMessage, text),
            Err(ShapeError::Parse(_))
        ));
    }

    #[test]
    fn test_nested_braces_inside_object_are_kept() {
        let text = r#"Sure! {"messages": [{"type": "Brief", "text": "Hi {Name}"}]} Hope it helps."#;
        let value = normalize(TaskKind::ConnectionMessage, text).unwrap();
        assert_eq!(value["messages"][0]["text"], "Hi {Name}");
    }

    #[test]
    fn test_values_are_returned_unmodified() {
        // profileScore as a string is accepted: only emptiness is checked, not type.
        let text = r#"{"profileScore": "high", "headline": {}, "quickWins": [], "extra": 1}"#;
        let value = normalize(TaskKind::ProfileOptimization, text).unwrap();
        assert_eq!(value["profileScore"], "high");
        assert_eq!(value["quickWins"], json!([]));
        assert_eq!(value["extra"], 1);
    }

    #[test]
    fn test_null_or_empty_required_value_counts_as_missing() {
        match normalize(TaskKind::Resume, r#"{"contact": null, "summary": "x"}"#) {
            Err(ShapeError::MissingKey(key)) => assert_eq!(key, "contact"),
            other => panic!("expected MissingKey, got {other:?}"),
        }
        match normalize(TaskKind::Resume, r#"{"contact": {"name": "A"}, "summary": "  "}"#) {
            Err(ShapeError::MissingKey(key)) => assert_eq!(key, "summary"),
            other => panic!("expected MissingKey, got {other:?}"),
        }
        assert!(normalize(TaskKind::Resume, r#"{"contact": null, "summary": ""}"#).is_err());
    }

    #[test]
    fn test_check_shape_accepts_complete_object() {
        let object = json!({"targetCompanies": [], "connectionMessages": []});
        assert!(check_shape(
            TaskKind::NetworkingSuggestions,
            object.as_object().unwrap()
        )
        .is_ok());
    }
}
