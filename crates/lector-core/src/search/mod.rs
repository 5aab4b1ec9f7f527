//! Search engine: field-weighted inverted index over a static corpus,
//! ranked queries, and keyboard-driven result selection.
//!
//! The corpus is supplied pre-built by an external collaborator and the
//! index is immutable once constructed. Queries, selection movement, and
//! highlighting are all synchronous and local.

pub mod highlight;
mod index;
mod session;
pub mod weights;

pub use highlight::highlight;
pub use index::{ScoredDocument, SearchIndex};
pub use session::{Direction, KeyOutcome, SearchSession};

/// Minimum query length: shorter queries return no results instead of
/// consulting the index. Enforced both at the session layer (the UI
/// contract) and inside [`SearchIndex::query`] so no caller can observe
/// sub-floor queries.
pub const MIN_QUERY_LEN: usize = 2;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// A document in the search corpus (external, read-only input)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDocument {
    /// Unique document identifier
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub summary: String,
    pub url: String,
    /// Publication date as the indexer wrote it, rendered as-is. Static-site
    /// generators emit anything from bare `2024-05-01` to full RFC 3339.
    #[serde(default)]
    pub date: Option<String>,
    /// Content kind, e.g. "post" or "page"
    #[serde(rename = "type", default)]
    pub doc_type: String,
}

/// A render-ready search result: title and summary carry `<mark>` tags
/// around matched query terms.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResultView {
    pub title: String,
    pub summary: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub date: String,
    pub url: String,
}

impl SearchResultView {
    /// Build the display record for a document, marking raw query terms
    /// in the title and summary.
    pub fn new(doc: &SearchDocument, raw_query: &str) -> Self {
        SearchResultView {
            title: highlight(&doc.title, raw_query),
            summary: highlight(&doc.summary, raw_query),
            doc_type: doc.doc_type.clone(),
            date: doc.date.as_deref().map(format_date).unwrap_or_default(),
            url: doc.url.clone(),
        }
    }
}

/// Normalize an RFC 3339 timestamp to `YYYY-MM-DD` for display; anything
/// else passes through as-is.
fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}
