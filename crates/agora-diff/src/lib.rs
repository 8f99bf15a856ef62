//! Diff engine for Agora proposals.
//!
//! Compares two versions of a proposal field by field and produces
//! display-ready change descriptors. Everything here is pure and
//! synchronous: no I/O happens during a comparison, and the same inputs
//! always give the same output.
//!
//! # Key Types
//!
//! - [`Comparator`] / [`FieldChange`] / [`DocumentDiff`] -- Field-by-field snapshot comparison
//! - [`LineDiff`] / [`DiffLine`] -- Line-level text diff
//! - [`LineDiffStrategy`] -- Pluggable line diff algorithm ([`Greedy`], [`Myers`])
//! - [`ComparatorConfig`] -- Strategy, label keys, and bullet prefix

pub mod comparator;
pub mod config;
pub mod equality;
pub mod error;
pub mod line_diff;
pub mod render;
pub mod summary;

pub use comparator::{compare_documents, Comparator, DocumentDiff, FieldChange, SideBySide};
pub use config::ComparatorConfig;
pub use equality::{canonical_json, equals};
pub use error::{DiffError, DiffResult};
pub use line_diff::{
    diff_lines, DiffLine, DiffStrategy, Greedy, LineDiff, LineDiffStrategy, LineKind, Myers,
};
pub use summary::render_summary;

pub use agora_types::{FieldKind, FieldSchema, FieldSpec, Snapshot};
