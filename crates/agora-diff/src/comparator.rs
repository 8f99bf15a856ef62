//! Field-by-field comparison of two proposal snapshots.
//!
//! The comparator walks the schema in order and emits exactly one
//! [`FieldChange`] per schema entry. A field is changed unless its two
//! values are deep-equal ([`equals`]). Changed text fields carry a line
//! diff; changed structured fields carry both values verbatim plus their
//! rendered bullet lists for side-by-side display.
//!
//! Comparison never fails: malformed values fall back to canonical JSON.

use agora_types::{FieldKind, FieldSchema, FieldSpec, Snapshot};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::ComparatorConfig;
use crate::equality::equals;
use crate::line_diff::{DiffLine, LineDiffStrategy};
use crate::render::{display_items, to_text};

/// Old and new bullet lists of a changed structured field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideBySide {
    pub old: Vec<String>,
    pub new: Vec<String>,
}

/// Comparison result for one schema field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub changed: bool,
    pub old_value: Value,
    pub new_value: Value,
    /// Line diff; only for changed text fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_lines: Option<Vec<DiffLine>>,
    /// Rendered lists; only for changed structured fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<SideBySide>,
}

/// The comparison of two snapshots, one entry per schema field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentDiff {
    pub fields: Vec<FieldChange>,
}

impl DocumentDiff {
    /// Fields whose values differ.
    pub fn changed(&self) -> impl Iterator<Item = &FieldChange> {
        self.fields.iter().filter(|f| f.changed)
    }

    /// Number of changed fields.
    pub fn changed_count(&self) -> usize {
        self.changed().count()
    }

    /// Returns `true` if no field changed.
    pub fn is_unchanged(&self) -> bool {
        self.fields.iter().all(|f| !f.changed)
    }

    /// Entry for `key`, if the schema had it.
    pub fn get(&self, key: &str) -> Option<&FieldChange> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_fields(self) -> Vec<FieldChange> {
        self.fields
    }
}

/// Stateless snapshot comparator.
#[derive(Clone, Debug, Default)]
pub struct Comparator {
    config: ComparatorConfig,
}

impl Comparator {
    pub fn new(config: ComparatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    /// Compare `old` against `new` over every field of `schema`.
    pub fn compare(&self, old: &Snapshot, new: &Snapshot, schema: &FieldSchema) -> DocumentDiff {
        let fields: Vec<FieldChange> = schema
            .iter()
            .map(|spec| self.compare_field(spec, old.get(&spec.key), new.get(&spec.key)))
            .collect();

        let diff = DocumentDiff { fields };
        debug!(
            fields = diff.len(),
            changed = diff.changed_count(),
            strategy = %self.config.strategy,
            "compared snapshots"
        );
        diff
    }

    /// Compare one field's two values.
    pub fn compare_field(&self, spec: &FieldSpec, old: &Value, new: &Value) -> FieldChange {
        let changed = !equals(old, new);
        let mut change = FieldChange {
            key: spec.key.clone(),
            label: spec.label.clone(),
            kind: spec.kind,
            changed,
            old_value: old.clone(),
            new_value: new.clone(),
            diff_lines: None,
            display: None,
        };

        if changed {
            match spec.kind {
                FieldKind::Text => {
                    let old_text = to_text(old, &self.config);
                    let new_text = to_text(new, &self.config);
                    let lines = self.config.strategy.diff(&old_text, &new_text);
                    change.diff_lines = Some(lines.into_lines());
                }
                FieldKind::Structured => {
                    change.display = Some(SideBySide {
                        old: display_items(old, &self.config),
                        new: display_items(new, &self.config),
                    });
                }
            }
        }

        trace!(key = %spec.key, kind = %spec.kind, changed, "compared field");
        change
    }
}

/// Compare two snapshots with the default configuration.
pub fn compare_documents(old: &Snapshot, new: &Snapshot, schema: &FieldSchema) -> Vec<FieldChange> {
    Comparator::default().compare(old, new, schema).into_fields()
}
