use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// How a field is compared and displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text. Changes are shown as a line diff.
    Text,
    /// A list of small records. Changes are shown side by side.
    Structured,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Structured => f.write_str("structured"),
        }
    }
}

/// One entry of a [`FieldSchema`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Snapshot key the field is stored under.
    pub key: String,
    /// Human-readable label.
    pub label: String,
    /// Comparison mode.
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
        }
    }

    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub fn structured(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Structured)
    }
}

/// The ordered list of fields a comparison walks.
///
/// Comparator output always has one entry per schema field, in schema
/// order. Keys are unique and non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    fields: Vec<FieldSpec>,
}

#[derive(Deserialize)]
struct RawSchema {
    #[serde(default)]
    fields: Vec<FieldSpec>,
}

impl FieldSchema {
    /// Build a schema, rejecting empty or duplicate keys.
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, TypeError> {
        let mut seen = BTreeSet::new();
        for (index, field) in fields.iter().enumerate() {
            if field.key.trim().is_empty() {
                return Err(TypeError::EmptyKey { index });
            }
            if !seen.insert(field.key.as_str()) {
                return Err(TypeError::DuplicateKey(field.key.clone()));
            }
        }
        Ok(Self { fields })
    }

    /// The displayable fields of a proposal, in display order.
    pub fn proposal() -> Self {
        Self {
            fields: vec![
                FieldSpec::text("title", "Title"),
                FieldSpec::text("objectives", "Objectives"),
                FieldSpec::text("content", "Description"),
                FieldSpec::structured("actions", "Actions"),
                FieldSpec::text("means", "Means"),
                FieldSpec::structured("timeline", "Timeline"),
                FieldSpec::structured("risks", "Risks"),
                FieldSpec::text("territorial_scope", "Territorial scope"),
                FieldSpec::text("target_populations", "Target populations"),
                FieldSpec::text("expected_impact", "Expected impact"),
                FieldSpec::text("estimated_cost", "Estimated cost"),
                FieldSpec::structured("data_sources", "Data sources"),
            ],
        }
    }

    /// Parse a schema from TOML (`[[fields]]` tables).
    pub fn from_toml_str(s: &str) -> Result<Self, TypeError> {
        let raw: RawSchema = toml::from_str(s)?;
        Self::new(raw.fields)
    }

    /// Serialize the schema back to TOML.
    pub fn to_toml_string(&self) -> Result<String, TypeError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldSpec> {
        self.fields.iter()
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::proposal()
    }
}

impl<'a> IntoIterator for &'a FieldSchema {
    type Item = &'a FieldSpec;
    type IntoIter = std::slice::Iter<'a, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proposal_schema_shape() {
        let schema = FieldSchema::proposal();
        assert_eq!(schema.len(), 12);
        assert_eq!(schema.fields()[0].key, "title");
        assert_eq!(schema.get("actions").unwrap().kind, FieldKind::Structured);
        assert_eq!(schema.get("content").unwrap().kind, FieldKind::Text);
        assert!(schema.get("nope").is_none());
    }

    #[test]
    fn duplicate_key_rejected() {
        let err = FieldSchema::new(vec![
            FieldSpec::text("title", "Title"),
            FieldSpec::structured("title", "Again"),
        ])
        .unwrap_err();
        assert!(matches!(err, TypeError::DuplicateKey(k) if k == "title"));
    }

    #[test]
    fn empty_key_rejected() {
        let err = FieldSchema::new(vec![FieldSpec::text(" ", "Blank")]).unwrap_err();
        assert!(matches!(err, TypeError::EmptyKey { index: 0 }));
    }

    #[test]
    fn parse_toml() {
        let schema = FieldSchema::from_toml_str(
            r#"
            [[fields]]
            key = "title"
            label = "Title"
            kind = "text"

            [[fields]]
            key = "risks"
            label = "Risks"
            kind = "structured"
            "#,
        )
        .unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.fields()[1], FieldSpec::structured("risks", "Risks"));
    }

    #[test]
    fn unknown_kind_rejected() {
        let err = FieldSchema::from_toml_str(
            r#"
            [[fields]]
            key = "title"
            label = "Title"
            kind = "markdown"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, TypeError::InvalidSchema(_)));
    }

    #[test]
    fn toml_output_parses_back() {
        let schema = FieldSchema::proposal();
        let text = schema.to_toml_string().unwrap();
        assert!(text.contains("[[fields]]"));
        assert_eq!(FieldSchema::from_toml_str(&text).unwrap(), schema);
    }

    #[test]
    fn kind_display() {
        assert_eq!(FieldKind::Text.to_string(), "text");
        assert_eq!(FieldKind::Structured.to_string(), "structured");
    }
}
