//! Deep equality over JSON values.
//!
//! Values are compared in canonical form: object keys sorted, array order
//! kept, integral floats folded to integers. `null` and a missing field are
//! the same thing. There is no fuzzy matching: two strings that differ only
//! in whitespace are different.

use serde_json::{Map, Number, Value};

/// Rebuild `value` in canonical form.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let canonical: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k.clone(), canonicalize(v)))
                .collect();
            Value::Object(canonical)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        Value::Number(n) => Value::Number(canonical_number(n)),
        other => other.clone(),
    }
}

fn canonical_number(n: &Number) -> Number {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                return Number::from(f as i64);
            }
        }
    }
    n.clone()
}

/// Compact canonical JSON text for `value`.
pub fn canonical_json(value: &Value) -> String {
    canonicalize(value).to_string()
}

/// Deep equality with null/missing equivalence.
pub fn equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        _ => canonicalize(a) == canonicalize(b),
    }
}

/// Returns `true` for values that render as nothing: null, `""` and `[]`.
pub fn is_empty_content(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
