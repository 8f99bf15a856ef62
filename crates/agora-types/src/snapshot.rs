use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TypeError;

static NULL: Value = Value::Null;

/// One version of a proposal: field name to field value.
///
/// Values are free text, lists of small flat records, lists of strings, or
/// null. A snapshot is an immutable input to a comparison; the comparator
/// only ever reads from it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(Map<String, Value>);

impl Snapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing JSON object.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Build a snapshot from an arbitrary JSON value.
    ///
    /// Only JSON objects are accepted; `null` is treated as an empty snapshot
    /// so a missing stored version compares as "nothing was there".
    pub fn from_value(value: Value) -> Result<Self, TypeError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            Value::Bool(_) => Err(TypeError::NotAnObject("a boolean")),
            Value::Number(_) => Err(TypeError::NotAnObject("a number")),
            Value::String(_) => Err(TypeError::NotAnObject("a string")),
            Value::Array(_) => Err(TypeError::NotAnObject("an array")),
        }
    }

    /// Parse a snapshot from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self, TypeError> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(value)
    }

    /// The value stored under `key`, or `Value::Null` when absent.
    pub fn get(&self, key: &str) -> &Value {
        self.0.get(key).unwrap_or(&NULL)
    }

    /// Whether `key` is present (even if its value is null).
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Set a field, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no fields are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Snapshot {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_key_reads_as_null() {
        let snap = Snapshot::new().with("title", json!("Bike lanes"));
        assert_eq!(snap.get("title"), &json!("Bike lanes"));
        assert_eq!(snap.get("risks"), &Value::Null);
        assert!(!snap.contains_key("risks"));
    }

    #[test]
    fn explicit_null_is_present() {
        let snap = Snapshot::new().with("title", Value::Null);
        assert!(snap.contains_key("title"));
        assert_eq!(snap.get("title"), &Value::Null);
    }

    #[test]
    fn parse_from_json() {
        let snap = Snapshot::from_json_str(
            r#"{"title": "Park", "actions": [{"title": "Plant trees"}]}"#,
        )
        .unwrap();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap.get("actions"), &json!([{"title": "Plant trees"}]));
    }

    #[test]
    fn null_document_is_empty_snapshot() {
        let snap = Snapshot::from_value(Value::Null).unwrap();
        assert!(snap.is_empty());
    }

    #[test]
    fn non_object_rejected() {
        let err = Snapshot::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, TypeError::NotAnObject("an array")));
    }

    #[test]
    fn malformed_json_rejected() {
        let err = Snapshot::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, TypeError::InvalidJson(_)));
    }

    #[test]
    fn collect_from_pairs() {
        let snap: Snapshot = vec![
            ("title".to_string(), json!("A")),
            ("content".to_string(), json!("B")),
        ]
        .into_iter()
        .collect();
        assert_eq!(snap.len(), 2);
    }

    #[test]
    fn serializes_transparently() {
        let snap = Snapshot::new().with("title", json!("A"));
        let s = serde_json::to_string(&snap).unwrap();
        assert_eq!(s, r#"{"title":"A"}"#);
    }
}
