//! Inverted, field-weighted index build and ranked query evaluation

use super::weights::{
    CATEGORIES_WEIGHT, CONTENT_WEIGHT, SUMMARY_WEIGHT, TAGS_WEIGHT, TITLE_WEIGHT,
};
use super::{SearchDocument, MIN_QUERY_LEN};
use crate::text::tokenize_with_stemming;
use std::collections::HashMap;

/// One entry in a posting list: which document a term occurred in and the
/// accumulated field-weighted term frequency.
#[derive(Debug, Clone)]
struct Posting {
    doc: usize,
    weight: f64,
}

/// A ranked query hit. `doc` is the document's position in corpus order,
/// which doubles as the tie-break key.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDocument {
    /// Corpus position of the matched document
    pub doc: usize,
    /// Sum of field-weighted term frequencies over matched query terms
    pub score: f64,
}

/// Immutable search index built once from the full corpus at startup
pub struct SearchIndex {
    documents: Vec<SearchDocument>,
    postings: HashMap<String, Vec<Posting>>,
}

impl SearchIndex {
    /// Build the index from the corpus. An empty corpus builds trivially.
    #[tracing::instrument(skip(documents), fields(corpus_size = documents.len()))]
    pub fn build(documents: Vec<SearchDocument>) -> Self {
        let mut postings: HashMap<String, Vec<Posting>> = HashMap::new();

        for (doc, document) in documents.iter().enumerate() {
            let term_weights = compute_term_weights(document);
            for (term, weight) in term_weights {
                postings
                    .entry(term)
                    .or_default()
                    .push(Posting { doc, weight });
            }
        }

        tracing::debug!(terms = postings.len(), "index_built");
        SearchIndex { documents, postings }
    }

    /// Answer a ranked query: stem the query tokens, union candidate
    /// documents, sum field-weighted term frequencies, and sort descending
    /// by score with ties broken by corpus order.
    pub fn query(&self, text: &str) -> Vec<ScoredDocument> {
        if text.trim().chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        let mut scores: HashMap<usize, f64> = HashMap::new();
        for term in tokenize_with_stemming(text, true) {
            if let Some(list) = self.postings.get(&term) {
                for posting in list {
                    *scores.entry(posting.doc).or_insert(0.0) += posting.weight;
                }
            }
        }

        let mut results: Vec<ScoredDocument> = scores
            .into_iter()
            .map(|(doc, score)| ScoredDocument { doc, score })
            .collect();
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.doc.cmp(&b.doc))
        });

        tracing::debug!(query = text, hits = results.len(), "query_evaluated");
        results
    }

    /// Look up a document by corpus position
    pub fn document(&self, doc: usize) -> Option<&SearchDocument> {
        self.documents.get(doc)
    }

    /// Number of documents in the corpus
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Accumulate `field weight × term frequency` per stemmed term across all
/// indexed fields of a document.
fn compute_term_weights(document: &SearchDocument) -> HashMap<String, f64> {
    let mut term_weights: HashMap<String, f64> = HashMap::new();

    for term in tokenize_with_stemming(&document.title, true) {
        *term_weights.entry(term).or_insert(0.0) += TITLE_WEIGHT;
    }

    for tag in &document.tags {
        for term in tokenize_with_stemming(tag, true) {
            *term_weights.entry(term).or_insert(0.0) += TAGS_WEIGHT;
        }
    }

    for category in &document.categories {
        for term in tokenize_with_stemming(category, true) {
            *term_weights.entry(term).or_insert(0.0) += CATEGORIES_WEIGHT;
        }
    }

    for term in tokenize_with_stemming(&document.summary, true) {
        *term_weights.entry(term).or_insert(0.0) += SUMMARY_WEIGHT;
    }

    for term in tokenize_with_stemming(&document.content, true) {
        *term_weights.entry(term).or_insert(0.0) += CONTENT_WEIGHT;
    }

    term_weights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, title: &str, content: &str) -> SearchDocument {
        SearchDocument {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            tags: Vec::new(),
            categories: Vec::new(),
            summary: String::new(),
            url: format!("/posts/{}/", id),
            date: None,
            doc_type: "post".to_string(),
        }
    }

    #[test]
    fn title_match_outranks_content_match() {
        let index = SearchIndex::build(vec![
            doc("body", "Weekend Notes", "all about javascript internals"),
            doc("title", "Learning JavaScript", "a gentle introduction"),
        ]);

        let results = index.query("javascript");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].doc, 1);
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn ties_break_by_corpus_order() {
        let index = SearchIndex::build(vec![
            doc("first", "Rust Diary", ""),
            doc("second", "Rust Diary", ""),
        ]);

        let results = index.query("rust");
        assert_eq!(results[0].doc, 0);
        assert_eq!(results[1].doc, 1);
    }

    #[test]
    fn short_queries_return_nothing() {
        let index = SearchIndex::build(vec![doc("a", "Learning JavaScript", "")]);
        assert!(index.query("").is_empty());
        assert!(index.query("j").is_empty());
        assert!(index.query("  j  ").is_empty());
    }

    #[test]
    fn stemmed_query_matches_inflected_document() {
        let index = SearchIndex::build(vec![doc("a", "Run Clubs", "we run every sunday")]);
        let results = index.query("running");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn tags_outweigh_categories_and_summary() {
        let mut tagged = doc("tagged", "Untitled", "");
        tagged.tags = vec!["rust".to_string()];
        let mut categorized = doc("categorized", "Untitled", "");
        categorized.categories = vec!["rust".to_string()];

        let index = SearchIndex::build(vec![categorized, tagged]);
        let results = index.query("rust");
        assert_eq!(results[0].doc, 1);
    }

    #[test]
    fn empty_corpus_queries_are_empty() {
        let index = SearchIndex::build(Vec::new());
        assert!(index.is_empty());
        assert!(index.query("anything").is_empty());
    }

    #[test]
    fn multi_term_query_sums_scores() {
        let index = SearchIndex::build(vec![
            doc("one", "Learning JavaScript", ""),
            doc("both", "Learning JavaScript Patterns", "patterns everywhere"),
        ]);

        let results = index.query("javascript patterns");
        assert_eq!(results[0].doc, 1);
    }
}
