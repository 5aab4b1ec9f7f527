//! Milestone analytics records
//!
//! Milestone events are fire-and-forget: the sink is told, and whatever it
//! does with the record never flows back into progress display.

use serde::{Deserialize, Serialize};

/// A one-time reading milestone crossing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneEvent {
    /// Progress threshold crossed: 25, 50, 75, or 100
    pub milestone: u8,
    /// Reading time at the crossing, excluding paused spans
    pub elapsed_ms: f64,
    /// Estimated words read: `floor(total_words * milestone / 100)`
    pub words_read: u32,
}

/// Destination for milestone events. Implementations must not fail in a way
/// the caller can observe.
pub trait AnalyticsSink {
    fn record(&mut self, event: &MilestoneEvent);
}

/// Sink that emits milestone events to the structured log
#[derive(Debug, Default)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn record(&mut self, event: &MilestoneEvent) {
        tracing::debug!(
            milestone = event.milestone,
            elapsed_ms = event.elapsed_ms,
            words_read = event.words_read,
            "reading_milestone"
        );
    }
}
