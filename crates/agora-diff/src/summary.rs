//! Plain-text summary of a document diff for reviewers.

use agora_types::FieldKind;

use crate::comparator::{DocumentDiff, FieldChange};
use crate::line_diff::LineKind;

/// Marker put in front of a diff line in text output.
pub fn line_marker(kind: LineKind) -> char {
    match kind {
        LineKind::Unchanged => ' ',
        LineKind::Added => '+',
        LineKind::Removed => '-',
    }
}

/// Render the changed fields of `diff` as text.
///
/// Unchanged fields are skipped. Text fields list their diff lines with
/// `+`/`-`/space markers; structured fields list their old and new bullets.
pub fn render_summary(diff: &DocumentDiff) -> String {
    let mut out = String::new();

    if diff.is_unchanged() {
        out.push_str("No changes.\n");
        return out;
    }

    out.push_str(&format!(
        "{} of {} fields changed\n",
        diff.changed_count(),
        diff.len()
    ));

    for field in diff.changed() {
        out.push('\n');
        render_field(&mut out, field);
    }
    out
}

fn render_field(out: &mut String, field: &FieldChange) {
    out.push_str(&format!("## {} ({})\n", field.label, field.key));
    match field.kind {
        FieldKind::Text => {
            for line in field.diff_lines.iter().flatten() {
                out.push_str(&format!("{} {}\n", line_marker(line.kind), line.text));
            }
        }
        FieldKind::Structured => {
            let Some(display) = &field.display else {
                return;
            };
            render_side(out, "Before", &display.old);
            render_side(out, "After", &display.new);
        }
    }
}

fn render_side(out: &mut String, heading: &str, items: &[String]) {
    out.push_str(&format!("{heading}:\n"));
    if items.is_empty() {
        out.push_str("  (empty)\n");
    }
    for item in items {
        out.push_str(&format!("  {item}\n"));
    }
}
