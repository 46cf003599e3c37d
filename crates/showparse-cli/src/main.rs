//! showparse CLI
//!
//! Command-line interface for extracting typed records from captured
//! `show` command output and diffing two captures.

use clap::{Parser, Subcommand};
use showparse_core::logging_facility::{self, Profile};
use std::path::PathBuf;

mod commands;
mod config;
mod input;

#[derive(Debug, Parser)]
#[command(name = "showparse")]
#[command(about = "showparse - typed records from network CLI output", long_about = None)]
struct Cli {
    /// Configuration file (default: ./showparse.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Logging profile override: dev, prod, or test
    #[arg(long, global = true)]
    log_profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract records from one capture and write a table
    Parse(commands::parse::ParseArgs),
    /// Compare two captures of the same kind
    Diff(commands::diff::DiffArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::AppConfig::load(cli.config.as_deref())?;

    let profile = match cli
        .log_profile
        .as_deref()
        .unwrap_or(config.logging.profile.as_str())
    {
        "dev" => Profile::Development,
        "prod" => Profile::Production,
        "test" => Profile::Test,
        other => return Err(format!("unknown log profile `{}`", other).into()),
    };
    logging_facility::init(profile);

    match cli.command {
        Commands::Parse(args) => commands::parse::execute(args, &config),
        Commands::Diff(args) => commands::diff::execute(args),
    }
}
