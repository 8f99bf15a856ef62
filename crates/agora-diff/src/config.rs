use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};
use crate::line_diff::DiffStrategy;

/// Record keys tried, in order, when labelling a list item for display.
pub const DEFAULT_LABEL_KEYS: [&str; 4] = ["title", "phase", "risk", "label"];

/// Prefix put in front of every rendered list item.
pub const DEFAULT_BULLET: &str = "• ";

/// Configuration for the document comparator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparatorConfig {
    /// Line diff algorithm used for changed text fields.
    pub strategy: DiffStrategy,
    /// Preferred record keys for labelling structured list items.
    pub label_keys: Vec<String>,
    /// Bullet prefix for list items.
    pub bullet: String,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            strategy: DiffStrategy::Greedy,
            label_keys: DEFAULT_LABEL_KEYS.iter().map(|k| k.to_string()).collect(),
            bullet: DEFAULT_BULLET.to_string(),
        }
    }
}

impl ComparatorConfig {
    /// Parse a configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> DiffResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> DiffResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DiffError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Same configuration with a different line diff strategy.
    pub fn with_strategy(mut self, strategy: DiffStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
