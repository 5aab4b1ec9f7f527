//! Keyboard-driven result selection state
//!
//! Owns the transient UI state of the search widget: the current query, the
//! ranked result list, and which result is highlighted. Selection movement
//! clamps at the list boundaries (no wraparound), and replacing the result
//! set always drops the selection.

use super::index::{ScoredDocument, SearchIndex};
use super::MIN_QUERY_LEN;
use crate::event::Key;

/// No result highlighted
const NO_SELECTION: isize = -1;

/// Selection movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Outcome of dispatching a key event to the session
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// Selection moved to this index
    Moved(isize),
    /// Enter on a valid selection: navigate to this URL
    Navigate(String),
    /// Escape: results cleared, selection reset
    Dismissed,
    /// Key had no effect in the current state
    Ignored,
}

/// Transient search widget state: query, ranked results, selection
#[derive(Debug)]
pub struct SearchSession {
    query: String,
    results: Vec<ScoredDocument>,
    selected: isize,
}

impl Default for SearchSession {
    // A derived Default would start `selected` at 0, which is out of range
    // for an empty result list.
    fn default() -> Self {
        SearchSession::new()
    }
}

impl SearchSession {
    /// Create an idle session with no results and no selection
    pub fn new() -> Self {
        SearchSession {
            query: String::new(),
            results: Vec::new(),
            selected: NO_SELECTION,
        }
    }

    /// Run a query and replace the result set. Queries shorter than
    /// [`MIN_QUERY_LEN`] clear the results instead. Selection always resets.
    pub fn submit(&mut self, index: &SearchIndex, raw: &str) {
        self.query = raw.to_string();
        self.selected = NO_SELECTION;
        if raw.trim().chars().count() < MIN_QUERY_LEN {
            self.results.clear();
            return;
        }
        self.results = index.query(raw);
    }

    /// Move the highlighted result, clamping to `[0, len - 1]`. With no
    /// results the selection stays at -1.
    pub fn move_selection(&mut self, direction: Direction) -> isize {
        if self.results.is_empty() {
            return self.selected;
        }
        let last = self.results.len() as isize - 1;
        self.selected = match direction {
            Direction::Down => (self.selected + 1).min(last),
            Direction::Up => (self.selected - 1).max(0),
        };
        self.selected
    }

    /// URL of the highlighted result, or `None` when nothing is selected
    pub fn confirm<'a>(&self, index: &'a SearchIndex) -> Option<&'a str> {
        if self.selected < 0 {
            return None;
        }
        self.results
            .get(self.selected as usize)
            .and_then(|hit| index.document(hit.doc))
            .map(|doc| doc.url.as_str())
    }

    /// Escape path: drop results, query, and selection
    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.selected = NO_SELECTION;
    }

    /// Dispatch a key event against the current result set
    pub fn on_key(&mut self, index: &SearchIndex, key: Key) -> KeyOutcome {
        match key {
            Key::ArrowDown => KeyOutcome::Moved(self.move_selection(Direction::Down)),
            Key::ArrowUp => KeyOutcome::Moved(self.move_selection(Direction::Up)),
            Key::Enter => match self.confirm(index) {
                Some(url) => KeyOutcome::Navigate(url.to_string()),
                None => KeyOutcome::Ignored,
            },
            Key::Escape => {
                self.clear();
                KeyOutcome::Dismissed
            }
        }
    }

    /// Current query text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current ranked results
    pub fn results(&self) -> &[ScoredDocument] {
        &self.results
    }

    /// Highlighted result index, -1 for none
    pub fn selected(&self) -> isize {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchDocument;

    fn index_with(titles: &[&str]) -> SearchIndex {
        let docs = titles
            .iter()
            .enumerate()
            .map(|(i, title)| SearchDocument {
                id: format!("doc-{}", i),
                title: format!("{} Journal", title),
                content: String::new(),
                tags: Vec::new(),
                categories: Vec::new(),
                summary: String::new(),
                url: format!("/posts/{}/", i),
                date: None,
                doc_type: "post".to_string(),
            })
            .collect();
        SearchIndex::build(docs)
    }

    #[test]
    fn default_session_starts_with_no_selection() {
        let session = SearchSession::default();
        assert_eq!(session.selected(), -1);
        assert!(session.results().is_empty());
    }

    #[test]
    fn default_session_movement_stays_at_none() {
        let mut session = SearchSession::default();
        assert_eq!(session.move_selection(Direction::Down), -1);
        assert_eq!(session.move_selection(Direction::Up), -1);
    }

    #[test]
    fn short_query_yields_no_results() {
        let index = index_with(&["Rust", "Rust"]);
        let mut session = SearchSession::new();

        session.submit(&index, "r");
        assert!(session.results().is_empty());
        session.submit(&index, "");
        assert!(session.results().is_empty());
    }

    #[test]
    fn selection_clamps_at_both_ends() {
        let index = index_with(&["Rust", "Rust", "Rust"]);
        let mut session = SearchSession::new();
        session.submit(&index, "journal");
        assert_eq!(session.results().len(), 3);

        assert_eq!(session.move_selection(Direction::Down), 0);
        assert_eq!(session.move_selection(Direction::Down), 1);
        assert_eq!(session.move_selection(Direction::Down), 2);
        assert_eq!(session.move_selection(Direction::Down), 2);

        assert_eq!(session.move_selection(Direction::Up), 1);
        assert_eq!(session.move_selection(Direction::Up), 0);
        assert_eq!(session.move_selection(Direction::Up), 0);
    }

    #[test]
    fn empty_results_keep_selection_at_none() {
        let index = index_with(&[]);
        let mut session = SearchSession::new();
        session.submit(&index, "journal");
        assert_eq!(session.move_selection(Direction::Down), -1);
        assert_eq!(session.move_selection(Direction::Up), -1);
    }

    #[test]
    fn new_results_reset_selection() {
        let index = index_with(&["Rust", "Rust"]);
        let mut session = SearchSession::new();
        session.submit(&index, "journal");
        session.move_selection(Direction::Down);
        assert_eq!(session.selected(), 0);

        session.submit(&index, "journal rust");
        assert_eq!(session.selected(), -1);
    }

    #[test]
    fn confirm_requires_a_selection() {
        let index = index_with(&["Rust"]);
        let mut session = SearchSession::new();
        session.submit(&index, "journal");
        assert_eq!(session.confirm(&index), None);

        session.move_selection(Direction::Down);
        assert_eq!(session.confirm(&index), Some("/posts/0/"));
    }

    #[test]
    fn enter_navigates_only_with_selection() {
        let index = index_with(&["Rust"]);
        let mut session = SearchSession::new();
        session.submit(&index, "journal");

        assert_eq!(session.on_key(&index, Key::Enter), KeyOutcome::Ignored);
        session.on_key(&index, Key::ArrowDown);
        assert_eq!(
            session.on_key(&index, Key::Enter),
            KeyOutcome::Navigate("/posts/0/".to_string())
        );
    }

    #[test]
    fn escape_clears_everything() {
        let index = index_with(&["Rust"]);
        let mut session = SearchSession::new();
        session.submit(&index, "journal");
        session.move_selection(Direction::Down);

        assert_eq!(session.on_key(&index, Key::Escape), KeyOutcome::Dismissed);
        assert!(session.results().is_empty());
        assert_eq!(session.selected(), -1);
        assert_eq!(session.query(), "");
    }
}
