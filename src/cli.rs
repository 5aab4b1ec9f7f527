//! CLI argument parsing for lector
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Lector - reading-progress estimation and corpus search for content sites
#[derive(Parser, Debug)]
#[command(name = "lector")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report debug-level detail for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// Machine-readable JSON
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a one-shot ranked query against a corpus file
    Search(SearchArgs),

    /// Drive a scripted search session from stdin
    Session(SessionArgs),

    /// Replay a scroll trace through a reading session
    Reading(ReadingArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Query text
    pub query: String,

    /// Corpus file: a JSON array of search documents
    #[arg(long)]
    pub corpus: PathBuf,

    /// Maximum number of results to print
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Corpus file: a JSON array of search documents
    #[arg(long)]
    pub corpus: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ReadingArgs {
    /// Word count of the document being read
    #[arg(long)]
    pub words: u32,

    /// Initial reading speed in words per minute
    #[arg(long)]
    pub wpm: Option<f64>,

    /// Scroll trace file: JSON lines of scroll/visibility records
    #[arg(long)]
    pub trace: PathBuf,
}
