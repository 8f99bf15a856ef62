//! Foundation types for Agora proposal diffs.
//!
//! This crate provides the input shapes consumed by the comparator in
//! `agora-diff`: versioned proposal snapshots and the static field schema
//! that says which fields exist and how each one is compared.
//!
//! # Key Types
//!
//! - [`Snapshot`] — One version of a proposal, field name to JSON value
//! - [`FieldSchema`] — Ordered declaration of the fields to compare
//! - [`FieldSpec`] — A single schema entry (key, label, kind)
//! - [`FieldKind`] — Whether a field is free text or a structured list

pub mod error;
pub mod schema;
pub mod snapshot;

pub use error::TypeError;
pub use schema::{FieldKind, FieldSchema, FieldSpec};
pub use snapshot::Snapshot;
