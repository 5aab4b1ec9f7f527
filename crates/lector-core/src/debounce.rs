//! Explicit debounce policy for query submission
//!
//! "Suppress invocation until N ms of input silence": each new submission
//! supersedes the pending one and pushes the deadline out. The policy is
//! poll-based rather than timer-based so the core stays single-threaded and
//! deterministic under test; the host decides when to call [`Debouncer::poll`].

/// Default quiet period before a pending query fires
pub const DEBOUNCE_MS: f64 = 300.0;

#[derive(Debug, Clone)]
struct Pending {
    deadline_ms: f64,
    text: String,
}

/// Time-based debouncer over query text
#[derive(Debug)]
pub struct Debouncer {
    delay_ms: f64,
    pending: Option<Pending>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Debouncer::new(DEBOUNCE_MS)
    }
}

impl Debouncer {
    /// Create a debouncer with the given quiet period in milliseconds
    pub fn new(delay_ms: f64) -> Self {
        Debouncer {
            delay_ms,
            pending: None,
        }
    }

    /// Record a new submission, superseding any pending one
    pub fn submit(&mut self, now_ms: f64, text: impl Into<String>) {
        self.pending = Some(Pending {
            deadline_ms: now_ms + self.delay_ms,
            text: text.into(),
        });
    }

    /// Yield the pending text once its deadline has passed
    pub fn poll(&mut self, now_ms: f64) -> Option<String> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| now_ms >= p.deadline_ms);
        if due {
            self.pending.take().map(|p| p.text)
        } else {
            None
        }
    }

    /// Drop any pending submission
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a submission is waiting on its quiet period
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
