//! Parse command
//!
//! Usage: showparse parse <INPUT> --kind <KIND> [--output <FILE>]

use clap::{Args, ValueEnum};
use showparse_core::{filter_snapshot, render_table, Predicate};
use showparse_core_types::RecordKind;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::input;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Delimited table with a header row
    Table,
    /// JSON array of typed records
    Json,
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Capture file to parse, or `-` for stdin
    pub input: PathBuf,

    /// Record kind of the capture
    #[arg(long, value_parser = super::parse_kind)]
    pub kind: RecordKind,

    /// Output file (default: input path with a .csv extension; the
    /// configured default file for stdin input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Field delimiter for table output (default from config)
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Keep only records matching a predicate, e.g. `Status~connected`
    /// or `prefix_len>=24`; repeatable, combined with AND
    #[arg(long = "where", value_name = "PRED")]
    pub predicates: Vec<String>,
}

/// Execute parse command
pub fn execute(args: ParseArgs, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let lines = input::read_lines(&args.input)?;
    let run = showparse_core::parse_lines(args.kind, lines)?;

    let predicates = args
        .predicates
        .iter()
        .map(|expr| Predicate::parse(args.kind, expr))
        .collect::<Result<Vec<_>, _>>()?;
    let snapshot = filter_snapshot(&run.snapshot, &predicates);

    tracing::info!(
        kind = args.kind.as_str(),
        records = run.stats.records,
        matched = snapshot.len(),
        skipped = run.stats.skipped_lines,
        malformed = run.stats.malformed_blocks,
        "parsed {}",
        args.input.display()
    );

    let rendered = match args.format {
        OutputFormat::Table => {
            let delimiter = args.delimiter.unwrap_or(config.output.delimiter);
            render_table(&snapshot, delimiter)
        }
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(&snapshot)?;
            text.push('\n');
            text
        }
    };

    if args.stdout {
        print!("{}", rendered);
        return Ok(());
    }

    let output_path = match args.output {
        Some(path) => path,
        None if input::is_stdin(&args.input) => PathBuf::from(&config.output.default_file),
        None => args.input.with_extension("csv"),
    };
    std::fs::write(&output_path, rendered)?;
    println!(
        "{} records written to {}",
        snapshot.len(),
        output_path.display()
    );
    Ok(())
}
