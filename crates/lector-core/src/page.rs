//! Composed host-facing session
//!
//! [`ReaderPage`] is the explicit session object the host page owns: one
//! reading session, one search index, one selection session, one debouncer.
//! The host translates browser events into [`PageEvent`] records and hands
//! them to [`ReaderPage::handle`]; pending queries flush through
//! [`ReaderPage::tick`]. No ambient globals, no timers.

use crate::debounce::Debouncer;
use crate::event::{Key, PageEvent};
use crate::progress::{ProgressView, ReadingSession};
use crate::search::{KeyOutcome, SearchDocument, SearchIndex, SearchSession};

/// Render-ready outcome of one event
#[derive(Debug, Clone, PartialEq)]
pub enum PageUpdate {
    /// Progress bar and time-left label changed
    Progress(ProgressView),
    /// Selection highlight moved to this index (-1 for none)
    Selection(isize),
    /// Navigate to this URL (Enter on a valid selection)
    Navigate(String),
    /// Search widget dismissed (Escape)
    Dismissed,
    /// Event consumed without anything to render
    None,
}

/// One page view's worth of state: constructed once, passed by reference to
/// event handlers, discarded on navigation.
pub struct ReaderPage {
    reading: ReadingSession,
    index: SearchIndex,
    search: SearchSession,
    debounce: Debouncer,
}

impl ReaderPage {
    /// Build the page session: word count and clock for the reading session,
    /// corpus for the search index.
    pub fn new(total_words: u32, start_time_ms: f64, corpus: Vec<SearchDocument>) -> Self {
        ReaderPage {
            reading: ReadingSession::new(total_words, start_time_ms),
            index: SearchIndex::build(corpus),
            search: SearchSession::new(),
            debounce: Debouncer::default(),
        }
    }

    /// Dispatch one host event
    pub fn handle(&mut self, event: PageEvent) -> PageUpdate {
        match event {
            PageEvent::Scroll {
                time_ms,
                scroll_top,
                viewport_height,
                document_height,
            } => PageUpdate::Progress(self.reading.on_scroll(
                time_ms,
                scroll_top,
                viewport_height,
                document_height,
            )),
            PageEvent::Visibility { time_ms, hidden } => {
                if hidden {
                    self.reading.pause(time_ms);
                } else {
                    self.reading.resume(time_ms);
                }
                PageUpdate::None
            }
            PageEvent::Input { time_ms, text } => {
                self.debounce.submit(time_ms, text);
                PageUpdate::None
            }
            PageEvent::Key(key) => {
                // Escape also drops any query still waiting out its quiet
                // period, so a dismissed widget never pops back open.
                if key == Key::Escape {
                    self.debounce.cancel();
                }
                match self.search.on_key(&self.index, key) {
                    KeyOutcome::Moved(index) => PageUpdate::Selection(index),
                    KeyOutcome::Navigate(url) => PageUpdate::Navigate(url),
                    KeyOutcome::Dismissed => PageUpdate::Dismissed,
                    KeyOutcome::Ignored => PageUpdate::None,
                }
            }
        }
    }

    /// Flush a due pending query into the search session. Returns the new
    /// result count when a query ran.
    pub fn tick(&mut self, now_ms: f64) -> Option<usize> {
        let query = self.debounce.poll(now_ms)?;
        self.search.submit(&self.index, &query);
        Some(self.search.results().len())
    }

    /// The reading session
    pub fn reading(&self) -> &ReadingSession {
        &self.reading
    }

    /// The search index
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// The search widget state
    pub fn search(&self) -> &SearchSession {
        &self.search
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<SearchDocument> {
        vec![
            SearchDocument {
                id: "js".to_string(),
                title: "Learning JavaScript".to_string(),
                content: "closures and prototypes".to_string(),
                tags: vec!["javascript".to_string()],
                categories: Vec::new(),
                summary: "a gentle introduction".to_string(),
                url: "/posts/learning-javascript/".to_string(),
                date: None,
                doc_type: "post".to_string(),
            },
            SearchDocument {
                id: "rust".to_string(),
                title: "Rust Notes".to_string(),
                content: "borrow checker diary, javascript comparison".to_string(),
                tags: Vec::new(),
                categories: Vec::new(),
                summary: String::new(),
                url: "/posts/rust-notes/".to_string(),
                date: None,
                doc_type: "post".to_string(),
            },
        ]
    }

    #[test]
    fn typing_is_debounced_until_quiet() {
        let mut page = ReaderPage::new(1000, 0.0, corpus());
        page.handle(PageEvent::Input {
            time_ms: 0.0,
            text: "java".to_string(),
        });
        page.handle(PageEvent::Input {
            time_ms: 100.0,
            text: "javascript".to_string(),
        });

        // First deadline passes with nothing: the second keystroke
        // superseded it.
        assert_eq!(page.tick(300.0), None);
        assert_eq!(page.tick(400.0), Some(2));
        assert_eq!(page.search().query(), "javascript");
    }

    #[test]
    fn keyboard_flow_selects_and_navigates() {
        let mut page = ReaderPage::new(1000, 0.0, corpus());
        page.handle(PageEvent::Input {
            time_ms: 0.0,
            text: "javascript".to_string(),
        });
        page.tick(300.0);

        assert_eq!(
            page.handle(PageEvent::Key(Key::ArrowDown)),
            PageUpdate::Selection(0)
        );
        assert_eq!(
            page.handle(PageEvent::Key(Key::Enter)),
            PageUpdate::Navigate("/posts/learning-javascript/".to_string())
        );
    }

    #[test]
    fn escape_dismisses_and_cancels_pending_query() {
        let mut page = ReaderPage::new(1000, 0.0, corpus());
        page.handle(PageEvent::Input {
            time_ms: 0.0,
            text: "javascript".to_string(),
        });
        assert_eq!(page.handle(PageEvent::Key(Key::Escape)), PageUpdate::Dismissed);
        assert_eq!(page.tick(1000.0), None);
        assert!(page.search().results().is_empty());
    }

    #[test]
    fn visibility_toggles_the_reading_clock() {
        let mut page = ReaderPage::new(1000, 0.0, corpus());
        page.handle(PageEvent::Visibility {
            time_ms: 10_000.0,
            hidden: true,
        });
        page.handle(PageEvent::Visibility {
            time_ms: 40_000.0,
            hidden: false,
        });
        assert_eq!(page.reading().elapsed_ms(50_000.0), 20_000.0);
    }

    #[test]
    fn scroll_events_produce_progress_views() {
        let mut page = ReaderPage::new(2000, 0.0, corpus());
        let update = page.handle(PageEvent::Scroll {
            time_ms: 500.0,
            scroll_top: 250.0,
            viewport_height: 800.0,
            document_height: 1800.0,
        });
        match update {
            PageUpdate::Progress(view) => {
                assert_eq!(view.percent, 25.0);
                assert_eq!(view.milestones.len(), 1);
            }
            other => panic!("expected progress update, got {:?}", other),
        }
    }
}
