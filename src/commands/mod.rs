//! CLI command implementations

mod reading;
mod search;
mod session;

use std::fs;
use std::path::Path;

use crate::cli::{Cli, Commands};
use lector_core::error::{LectorError, Result};
use lector_core::search::SearchDocument;

/// Dispatch the parsed CLI to its command
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Search(args) => search::run(cli, args),
        Commands::Session(args) => session::run(cli, args),
        Commands::Reading(args) => reading::run(cli, args),
    }
}

/// Load a corpus file: a JSON array of search documents
fn load_corpus(path: &Path) -> Result<Vec<SearchDocument>> {
    if !path.exists() {
        return Err(LectorError::CorpusNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(path)
        .map_err(|e| LectorError::invalid_corpus(path, e))?;
    serde_json::from_str(&raw).map_err(|e| LectorError::invalid_corpus(path, e))
}
