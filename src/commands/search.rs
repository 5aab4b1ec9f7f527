//! One-shot ranked query against a corpus file

use crate::cli::{Cli, OutputFormat, SearchArgs};
use lector_core::error::Result;
use lector_core::search::{SearchIndex, SearchResultView};

pub fn run(cli: &Cli, args: &SearchArgs) -> Result<()> {
    let corpus = super::load_corpus(&args.corpus)?;
    let index = SearchIndex::build(corpus);

    let mut results = index.query(&args.query);
    results.truncate(args.limit);

    match cli.format {
        OutputFormat::Json => {
            let mut rows = Vec::with_capacity(results.len());
            for hit in &results {
                let Some(doc) = index.document(hit.doc) else {
                    continue;
                };
                let view = SearchResultView::new(doc, &args.query);
                let mut row = serde_json::to_value(&view)?;
                row["id"] = serde_json::json!(doc.id);
                row["score"] = serde_json::json!(hit.score);
                rows.push(row);
            }
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Human => {
            if results.is_empty() {
                if !cli.quiet {
                    println!("No results found");
                }
                return Ok(());
            }
            for (rank, hit) in results.iter().enumerate() {
                let Some(doc) = index.document(hit.doc) else {
                    continue;
                };
                let view = SearchResultView::new(doc, &args.query);
                println!("{}. {} ({}, {})", rank + 1, view.title, view.doc_type, view.date);
                if !view.summary.is_empty() {
                    println!("   {}", view.summary);
                }
                println!("   {}", view.url);
            }
        }
    }

    Ok(())
}
