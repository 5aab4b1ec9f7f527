//! Host event model
//!
//! The host page (or the CLI stand-in) translates raw browser events into
//! these records and feeds them to [`crate::page::ReaderPage`]. Timestamps
//! are milliseconds on whatever monotonic clock the host uses; the engines
//! never read a clock themselves.

/// Keyboard keys the search session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// A discrete input event from the host
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Scroll position changed
    Scroll {
        time_ms: f64,
        scroll_top: f64,
        viewport_height: f64,
        document_height: f64,
    },
    /// Page visibility changed (tab hidden or shown)
    Visibility { time_ms: f64, hidden: bool },
    /// Search input text changed
    Input { time_ms: f64, text: String },
    /// Key pressed while the search input has focus
    Key(Key),
}
