//! Diff command
//!
//! Usage: showparse diff <BEFORE> <AFTER> --kind <KIND>

use clap::{Args, ValueEnum};
use showparse_core::{compute_diff, render_diff_summary};
use showparse_core_types::RecordKind;
use std::path::PathBuf;

use crate::input;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiffFormat {
    /// `- `/`+ ` prefixed rows with a count trailer
    Text,
    /// Structured JSON diff
    Json,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Earlier capture, or `-` for stdin
    pub before: PathBuf,

    /// Later capture
    pub after: PathBuf,

    /// Record kind of both captures
    #[arg(long, value_parser = super::parse_kind)]
    pub kind: RecordKind,

    /// Output format
    #[arg(long, value_enum, default_value_t = DiffFormat::Text)]
    pub format: DiffFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let before = showparse_core::parse_lines(args.kind, input::read_lines(&args.before)?)?;
    let after = showparse_core::parse_lines(args.kind, input::read_lines(&args.after)?)?;

    let diff = compute_diff(&before.snapshot, &after.snapshot)?;

    tracing::info!(
        kind = args.kind.as_str(),
        removed = diff.removed_count(),
        added = diff.added_count(),
        common = diff.common_count,
        "diffed {} against {}",
        args.before.display(),
        args.after.display()
    );

    let rendered = match args.format {
        DiffFormat::Text => render_diff_summary(&diff),
        DiffFormat::Json => {
            let mut text = serde_json::to_string_pretty(&diff)?;
            text.push('\n');
            text
        }
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            println!("diff written to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
