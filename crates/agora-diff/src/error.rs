//! Error types for the diff crate.
//!
//! Comparisons themselves are infallible; these errors only come from
//! loading configuration, schemas, and snapshots.

use std::path::PathBuf;

use agora_types::TypeError;

/// Errors that can occur while preparing a comparison.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Comparator configuration was not valid TOML for [`ComparatorConfig`](crate::ComparatorConfig).
    #[error("invalid comparator config: {0}")]
    Config(#[from] toml::de::Error),

    /// Snapshot or schema loading failed.
    #[error(transparent)]
    Types(#[from] TypeError),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
