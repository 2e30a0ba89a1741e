//! CLI argument parsing for paperwiki
//!
//! Uses clap derive with global flags: --config, --format, --quiet,
//! --verbose, --log-level, --log-json.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use paperwiki_core::format::OutputFormat;

/// Paperwiki - open VimWiki notes for research papers
#[derive(Parser, Debug)]
#[command(name = "paperwiki")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, env = "PAPERWIKI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human, json)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report progress for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open wiki notes for papers selected by filter or piped on stdin
    Open(OpenArgs),

    /// List paper references matching a filter, one per line
    List(ListArgs),
}

#[derive(Args, Debug, Clone)]
pub struct OpenArgs {
    /// Filter words selecting papers from the library; when absent,
    /// references are read from stdin, one per line
    pub filter: Vec<String>,

    /// Editor command override
    #[arg(long)]
    pub editor: Option<String>,

    /// Open each note in its own editor invocation
    #[arg(long = "no-batch")]
    pub no_batch: bool,

    /// Skip the confirmation prompt when opening several notes
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Filter words selecting papers from the library; empty lists all
    pub filter: Vec<String>,
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
