//! Line-level diff of free text.
//!
//! The default strategy is a greedy lookahead matcher: it walks both texts
//! with one cursor each and classifies every line as unchanged, removed or
//! added. It is cheap and predictable but not minimal; repeated or
//! reordered lines can produce more remove/add pairs than an LCS diff.
//! [`Myers`] is available behind the same [`LineDiffStrategy`] trait when
//! minimal output matters more than matching historical behaviour.
//!
//! Both strategies guarantee reconstruction: the `removed` and `unchanged`
//! lines rebuild the old text, the `added` and `unchanged` lines rebuild the
//! new text.

use std::fmt;

use serde::{Deserialize, Serialize};
use similar::{Algorithm, ChangeTag, TextDiff};

/// Classification of a single diff line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Present in both texts.
    Unchanged,
    /// Only in the new text.
    Added,
    /// Only in the old text.
    Removed,
}

/// One output line of a line diff.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub kind: LineKind,
    pub text: String,
}

impl DiffLine {
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Unchanged,
            text: text.into(),
        }
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Added,
            text: text.into(),
        }
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Removed,
            text: text.into(),
        }
    }
}

/// The ordered result of diffing two texts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineDiff {
    pub lines: Vec<DiffLine>,
}

impl LineDiff {
    /// Returns `true` if every line is unchanged.
    pub fn is_identity(&self) -> bool {
        self.lines.iter().all(|l| l.kind == LineKind::Unchanged)
    }

    /// Number of added lines.
    pub fn additions(&self) -> usize {
        self.count(LineKind::Added)
    }

    /// Number of removed lines.
    pub fn deletions(&self) -> usize {
        self.count(LineKind::Removed)
    }

    fn count(&self, kind: LineKind) -> usize {
        self.lines.iter().filter(|l| l.kind == kind).count()
    }

    /// Rebuild the old text from `removed` and `unchanged` lines.
    pub fn old_text(&self) -> String {
        self.rebuild(LineKind::Removed)
    }

    /// Rebuild the new text from `added` and `unchanged` lines.
    pub fn new_text(&self) -> String {
        self.rebuild(LineKind::Added)
    }

    fn rebuild(&self, side: LineKind) -> String {
        self.lines
            .iter()
            .filter(|l| l.kind == side || l.kind == LineKind::Unchanged)
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffLine> {
        self.lines.iter()
    }

    pub fn into_lines(self) -> Vec<DiffLine> {
        self.lines
    }
}

/// A line diff algorithm.
pub trait LineDiffStrategy {
    fn diff(&self, old: &str, new: &str) -> LineDiff;
}

/// Greedy lookahead matcher.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

/// Minimal diff using Myers' algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct Myers;

/// Selectable strategy, usable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStrategy {
    #[default]
    Greedy,
    Myers,
}

impl fmt::Display for DiffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Greedy => f.write_str("greedy"),
            Self::Myers => f.write_str("myers"),
        }
    }
}

impl LineDiffStrategy for DiffStrategy {
    fn diff(&self, old: &str, new: &str) -> LineDiff {
        match self {
            Self::Greedy => Greedy.diff(old, new),
            Self::Myers => Myers.diff(old, new),
        }
    }
}

/// Split text into lines on `'\n'`. The empty string is one empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Diff two texts with the greedy strategy.
pub fn diff_lines(old: &str, new: &str) -> LineDiff {
    Greedy.diff(old, new)
}

fn appears_from(lines: &[&str], from: usize, needle: &str) -> bool {
    lines
        .get(from..)
        .is_some_and(|rest| rest.iter().any(|l| *l == needle))
}

impl LineDiffStrategy for Greedy {
    fn diff(&self, old: &str, new: &str) -> LineDiff {
        let old_lines = split_lines(old);
        let new_lines = split_lines(new);
        let mut lines = Vec::with_capacity(old_lines.len().max(new_lines.len()));

        let (mut i, mut j) = (0usize, 0usize);
        while i < old_lines.len() || j < new_lines.len() {
            let old_line = old_lines.get(i).copied();
            let new_line = new_lines.get(j).copied();

            if let Some(line) = old_line.filter(|l| Some(*l) == new_line) {
                lines.push(DiffLine::unchanged(line));
                i += 1;
                j += 1;
            } else if let Some(line) = old_line.filter(|l| !appears_from(&new_lines, j + 1, l)) {
                lines.push(DiffLine::removed(line));
                i += 1;
            } else if let Some(line) = new_line.filter(|l| !appears_from(&old_lines, i + 1, l)) {
                lines.push(DiffLine::added(line));
                j += 1;
            } else if let (Some(removed), Some(added)) = (old_line, new_line) {
                // Both lines recur later on the other side.
                lines.push(DiffLine::removed(removed));
                lines.push(DiffLine::added(added));
                i += 1;
                j += 1;
            } else {
                break;
            }
        }

        tracing::trace!(
            old_lines = old_lines.len(),
            new_lines = new_lines.len(),
            output = lines.len(),
            "greedy line diff"
        );
        LineDiff { lines }
    }
}

impl LineDiffStrategy for Myers {
    fn diff(&self, old: &str, new: &str) -> LineDiff {
        let old_lines = split_lines(old);
        let new_lines = split_lines(new);

        let text_diff = TextDiff::configure()
            .algorithm(Algorithm::Myers)
            .diff_slices(old_lines.as_slice(), new_lines.as_slice());

        let lines: Vec<DiffLine> = text_diff
            .iter_all_changes()
            .map(|change| {
                let text = change.value().to_string();
                match change.tag() {
                    ChangeTag::Equal => DiffLine::unchanged(text),
                    ChangeTag::Delete => DiffLine::removed(text),
                    ChangeTag::Insert => DiffLine::added(text),
                }
            })
            .collect();

        tracing::trace!(
            old_lines = old_lines.len(),
            new_lines = new_lines.len(),
            output = lines.len(),
            "myers line diff"
        );
        LineDiff { lines }
    }
}
