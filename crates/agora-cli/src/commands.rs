use std::path::Path;

use agora_diff::summary::line_marker;
use agora_diff::{
    Comparator, ComparatorConfig, DiffLine, DocumentDiff, FieldChange, FieldKind, FieldSchema,
    LineDiff, LineDiffStrategy, LineKind, Snapshot,
};
use anyhow::Context;
use colored::Colorize;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let output = match cli.command {
        Command::Compare(args) => cmd_compare(&args, &cli.format)?,
        Command::Lines(args) => cmd_lines(&args, &cli.format)?,
        Command::Schema => cmd_schema(&cli.format)?,
    };
    print!("{output}");
    Ok(())
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    let text = read_file(path)?;
    Snapshot::from_json_str(&text).with_context(|| format!("invalid snapshot {}", path.display()))
}

fn load_schema(path: Option<&Path>) -> anyhow::Result<FieldSchema> {
    match path {
        Some(path) => {
            let text = read_file(path)?;
            FieldSchema::from_toml_str(&text)
                .with_context(|| format!("invalid schema {}", path.display()))
        }
        None => Ok(FieldSchema::proposal()),
    }
}

fn load_config(args: &CompareArgs) -> anyhow::Result<ComparatorConfig> {
    let config = match &args.config {
        Some(path) => ComparatorConfig::from_path(path)?,
        None => ComparatorConfig::default(),
    };
    Ok(match args.strategy {
        Some(strategy) => config.with_strategy(strategy.into()),
        None => config,
    })
}

pub fn cmd_compare(args: &CompareArgs, format: &OutputFormat) -> anyhow::Result<String> {
    let old = load_snapshot(&args.old)?;
    let new = load_snapshot(&args.new)?;
    let schema = load_schema(args.schema.as_deref())?;
    let config = load_config(args)?;
    tracing::debug!(
        old = %args.old.display(),
        new = %args.new.display(),
        fields = schema.len(),
        strategy = %config.strategy,
        "comparing snapshots"
    );

    let diff = Comparator::new(config).compare(&old, &new, &schema);
    match format {
        OutputFormat::Json => {
            let fields: Vec<&FieldChange> = if args.all {
                diff.fields.iter().collect()
            } else {
                diff.changed().collect()
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&fields)?))
        }
        OutputFormat::Text => Ok(render_document(&diff, args.all)),
    }
}

pub fn cmd_lines(args: &LinesArgs, format: &OutputFormat) -> anyhow::Result<String> {
    let old = read_file(&args.old)?;
    let new = read_file(&args.new)?;
    let strategy: agora_diff::DiffStrategy = args.strategy.into();
    let diff = strategy.diff(&old, &new);
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&diff)?)),
        OutputFormat::Text => Ok(render_lines(&diff)),
    }
}

pub fn cmd_schema(format: &OutputFormat) -> anyhow::Result<String> {
    let schema = FieldSchema::proposal();
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&schema)?)),
        OutputFormat::Text => Ok(schema.to_toml_string()?),
    }
}

fn render_document(diff: &DocumentDiff, all: bool) -> String {
    let mut out = String::new();
    if diff.is_unchanged() && !all {
        out.push_str(&format!("{} No changes.\n", "✓".green()));
        return out;
    }
    out.push_str(&format!(
        "{} of {} fields changed\n",
        diff.changed_count().to_string().bold(),
        diff.len()
    ));
    for field in &diff.fields {
        if !field.changed {
            if all {
                out.push_str(&format!("\n{} {}\n", field.label.bold(), "unchanged".dimmed()));
            }
            continue;
        }
        out.push_str(&format!("\n{} {}\n", field.label.bold(), format!("({})", field.key).dimmed()));
        match field.kind {
            FieldKind::Text => {
                for line in field.diff_lines.iter().flatten() {
                    out.push_str(&render_line(line));
                }
            }
            FieldKind::Structured => {
                if let Some(display) = &field.display {
                    render_side(&mut out, "Before", &display.old, false);
                    render_side(&mut out, "After", &display.new, true);
                }
            }
        }
    }
    out
}

fn render_side(out: &mut String, heading: &str, items: &[String], is_new: bool) {
    out.push_str(&format!("  {}\n", heading.underline()));
    if items.is_empty() {
        out.push_str(&format!("    {}\n", "(empty)".dimmed()));
    }
    for item in items {
        let item = if is_new { item.green() } else { item.red() };
        out.push_str(&format!("    {item}\n"));
    }
}

fn render_line(line: &DiffLine) -> String {
    let text = format!("{} {}", line_marker(line.kind), line.text);
    let text = match line.kind {
        LineKind::Added => text.green(),
        LineKind::Removed => text.red(),
        LineKind::Unchanged => text.dimmed(),
    };
    format!("  {text}\n")
}

fn render_lines(diff: &LineDiff) -> String {
    let mut out: String = diff.iter().map(render_line).collect();
    out.push_str(&format!(
        "{} {}\n",
        format!("+{}", diff.additions()).green(),
        format!("-{}", diff.deletions()).red()
    ));
    out
}
