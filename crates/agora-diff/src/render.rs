//! Display rendering of field values.
//!
//! Structured fields are lists of small records. Each list item becomes one
//! bullet line labelled by the first non-empty preferred key of the record,
//! or by its canonical JSON when none of those keys are set. Values that do
//! not have the expected shape are shown as canonical JSON.

use serde_json::Value;

use crate::config::ComparatorConfig;
use crate::equality::{canonical_json, is_empty_content};

/// Label for a single list item.
pub fn item_label<S: AsRef<str>>(item: &Value, label_keys: &[S]) -> String {
    match item {
        Value::String(s) => s.clone(),
        Value::Object(map) => label_keys
            .iter()
            .filter_map(|key| map.get(key.as_ref()))
            .find(|v| !is_empty_content(v))
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => canonical_json(other),
            })
            .unwrap_or_else(|| canonical_json(item)),
        other => canonical_json(other),
    }
}

/// Display lines for a structured value.
///
/// Empty content yields no lines. A list yields one bulleted line per
/// non-empty item. Anything else yields its canonical JSON, unbulleted.
pub fn display_items(value: &Value, config: &ComparatorConfig) -> Vec<String> {
    if is_empty_content(value) {
        return Vec::new();
    }
    match value {
        Value::Array(items) => items
            .iter()
            .filter(|item| !is_empty_content(item))
            .map(|item| format!("{}{}", config.bullet, item_label(item, config.label_keys.as_slice())))
            .collect(),
        other => vec![canonical_json(other)],
    }
}

/// Flatten a value to text for line diffing.
pub fn to_text(value: &Value, config: &ComparatorConfig) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(_) => display_items(value, config).join("\n"),
        other => canonical_json(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> ComparatorConfig {
        ComparatorConfig::default()
    }

    #[test]
    fn label_preference_order() {
        let keys = ["title", "phase", "risk", "label"];
        assert_eq!(item_label(&json!({"title": "T", "phase": "P"}), &keys), "T");
        assert_eq!(item_label(&json!({"description": "D", "phase": "P"}), &keys), "P");
        assert_eq!(item_label(&json!({"risk": "R", "mitigation": "M"}), &keys), "R");
        assert_eq!(item_label(&json!({"url": "https://x", "label": "L"}), &keys), "L");
    }

    #[test]
    fn label_skips_empty_keys() {
        let keys = ["title", "phase"];
        assert_eq!(item_label(&json!({"title": "", "phase": "Q1"}), &keys), "Q1");
        assert_eq!(item_label(&json!({"title": null, "phase": "Q2"}), &keys), "Q2");
    }

    #[test]
    fn label_falls_back_to_json() {
        let keys = ["title"];
        assert_eq!(
            item_label(&json!({"url": "https://x", "note": 1}), &keys),
            r#"{"note":1,"url":"https://x"}"#
        );
    }

    #[test]
    fn non_string_label_value_rendered_as_json() {
        assert_eq!(item_label(&json!({"phase": 2}), &["phase"]), "2");
    }

    #[test]
    fn bullets_per_item() {
        let v = json!([{"title": "Survey"}, "Plain note", {"phase": "Build"}]);
        assert_eq!(
            display_items(&v, &config()),
            vec!["• Survey", "• Plain note", "• Build"]
        );
    }

    #[test]
    fn empty_content_has_no_lines() {
        assert!(display_items(&Value::Null, &config()).is_empty());
        assert!(display_items(&json!([]), &config()).is_empty());
        assert!(display_items(&json!(""), &config()).is_empty());
        assert_eq!(display_items(&json!([null, "", "x"]), &config()), vec!["• x"]);
    }

    #[test]
    fn scalar_in_structured_field_shown_raw() {
        assert_eq!(display_items(&json!(42), &config()), vec!["42"]);
        assert_eq!(display_items(&json!("oops"), &config()), vec![r#""oops""#]);
        assert_eq!(display_items(&json!({"b": 1, "a": 2}), &config()), vec![r#"{"a":2,"b":1}"#]);
    }

    #[test]
    fn text_flattening() {
        let c = config();
        assert_eq!(to_text(&Value::Null, &c), "");
        assert_eq!(to_text(&json!("line1\nline2"), &c), "line1\nline2");
        assert_eq!(to_text(&json!(["a", {"title": "b"}]), &c), "• a\n• b");
        assert_eq!(to_text(&json!(true), &c), "true");
    }

    #[test]
    fn custom_bullet() {
        let c = ComparatorConfig {
            bullet: "- ".into(),
            ..ComparatorConfig::default()
        };
        assert_eq!(display_items(&json!(["x"]), &c), vec!["- x"]);
    }
}
