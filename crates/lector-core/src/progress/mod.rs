//! Reading-progress estimation
//!
//! Turns raw scroll positions into a completion percentage, a human time
//! estimate, and one-time milestone events. Reading speed adapts to scroll
//! velocity via a fixed three-tier policy, and a pause/resume clock excludes
//! time the page spends hidden. All inputs are clamped or guarded; no
//! operation fails.

mod analytics;

pub use analytics::{AnalyticsSink, LogSink, MilestoneEvent};

use serde::Serialize;
use std::collections::{BTreeSet, VecDeque};

/// Default reading speed in words per minute
pub const DEFAULT_WPM: f64 = 200.0;

/// Progress thresholds that fire a one-time milestone event
pub const MILESTONES: [u8; 4] = [25, 50, 75, 100];

/// Scroll samples kept for speed adjustment (FIFO eviction)
const SAMPLE_CAPACITY: usize = 10;

/// Samples required before the speed tier is recomputed
const MIN_SAMPLES_FOR_ADJUST: usize = 5;

/// One scroll observation with its derived velocity (px/ms)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub time_ms: f64,
    pub position: f64,
    pub velocity: f64,
}

/// Render-ready progress update for one scroll event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressView {
    /// Completion percentage in `[0, 100]`, drives the progress bar width
    pub percent: f64,
    /// Display string: `"<n> min left"` or `"Complete!"`
    pub label: String,
    /// Milestones newly crossed by this event, ascending
    pub milestones: Vec<MilestoneEvent>,
}

/// One reading session: created per page view, discarded on navigation
#[derive(Debug)]
pub struct ReadingSession {
    total_words: u32,
    words_per_minute: f64,
    start_time_ms: f64,
    paused_at_ms: Option<f64>,
    reached_milestones: BTreeSet<u8>,
    samples: VecDeque<ScrollSample>,
}

impl ReadingSession {
    /// Start a session for a document of `total_words` words at the host's
    /// current clock reading.
    pub fn new(total_words: u32, start_time_ms: f64) -> Self {
        ReadingSession {
            total_words,
            words_per_minute: DEFAULT_WPM,
            start_time_ms,
            paused_at_ms: None,
            reached_milestones: BTreeSet::new(),
            samples: VecDeque::with_capacity(SAMPLE_CAPACITY),
        }
    }

    /// Override the initial reading speed. Non-positive values are ignored
    /// and the default stands; the tier policy may still reclassify later.
    pub fn with_words_per_minute(mut self, wpm: f64) -> Self {
        if wpm > 0.0 {
            self.words_per_minute = wpm;
        }
        self
    }

    /// Current adaptive reading speed
    pub fn words_per_minute(&self) -> f64 {
        self.words_per_minute
    }

    /// Completion percentage for a scroll position, clamped to `[0, 100]`.
    /// Returns 0 when the document fits the viewport (nothing to scroll).
    pub fn compute_progress(scroll_top: f64, viewport_height: f64, document_height: f64) -> f64 {
        let scrollable = document_height - viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
    }

    /// Whole minutes of reading left at the given progress, 0 when done
    pub fn estimate_time_remaining(&self, progress: f64) -> u32 {
        let progress = progress.clamp(0.0, 100.0);
        let words_left = (f64::from(self.total_words) * (1.0 - progress / 100.0)).floor();
        if words_left <= 0.0 {
            return 0;
        }
        (words_left / self.words_per_minute).ceil() as u32
    }

    /// Display string for the time-left element
    pub fn time_left_label(&self, progress: f64) -> String {
        match self.estimate_time_remaining(progress) {
            0 => "Complete!".to_string(),
            minutes => format!("{} min left", minutes),
        }
    }

    /// Append a scroll observation. Velocity is `|Δposition| / Δtime`
    /// against the previous sample, 0 for the first sample or a zero (or
    /// backwards) time delta. The oldest sample is evicted past capacity.
    pub fn record_scroll_sample(&mut self, time_ms: f64, position: f64) {
        let velocity = match self.samples.back() {
            Some(prev) if time_ms > prev.time_ms => {
                (position - prev.position).abs() / (time_ms - prev.time_ms)
            }
            _ => 0.0,
        };

        if self.samples.len() == SAMPLE_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(ScrollSample {
            time_ms,
            position,
            velocity,
        });
    }

    /// Reclassify reading speed from average scroll velocity. Requires at
    /// least five buffered samples, otherwise the current speed stands.
    /// Tiers: slow careful reading under 0.5 px/ms, normal under 2, skimming
    /// above. No hysteresis; oscillation near a boundary is accepted.
    pub fn adjust_reading_speed(&mut self) -> f64 {
        if self.samples.len() < MIN_SAMPLES_FOR_ADJUST {
            return self.words_per_minute;
        }

        let avg_velocity: f64 =
            self.samples.iter().map(|s| s.velocity).sum::<f64>() / self.samples.len() as f64;

        self.words_per_minute = if avg_velocity < 0.5 {
            150.0
        } else if avg_velocity < 2.0 {
            200.0
        } else {
            300.0
        };
        self.words_per_minute
    }

    /// Mark and return milestones newly crossed at this progress, ascending.
    /// Each threshold fires at most once per session.
    pub fn check_milestones(&mut self, progress: f64, now_ms: f64) -> Vec<MilestoneEvent> {
        let mut crossed = Vec::new();
        for milestone in MILESTONES {
            if progress >= f64::from(milestone) && self.reached_milestones.insert(milestone) {
                crossed.push(MilestoneEvent {
                    milestone,
                    elapsed_ms: self.elapsed_ms(now_ms),
                    words_read: (u64::from(self.total_words) * u64::from(milestone) / 100) as u32,
                });
            }
        }
        crossed
    }

    /// Stop the reading clock (tab hidden). A second pause keeps the first
    /// timestamp.
    pub fn pause(&mut self, now_ms: f64) {
        if self.paused_at_ms.is_none() {
            self.paused_at_ms = Some(now_ms);
        }
    }

    /// Restart the reading clock, shifting the session start forward so the
    /// hidden span is excluded. Without a prior pause this is a no-op.
    pub fn resume(&mut self, now_ms: f64) {
        if let Some(paused_at) = self.paused_at_ms.take() {
            self.start_time_ms += now_ms - paused_at;
        }
    }

    /// Reading time in milliseconds, excluding paused spans. While paused,
    /// the clock is frozen at the pause instant.
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        let effective_now = self.paused_at_ms.unwrap_or(now_ms);
        (effective_now - self.start_time_ms).max(0.0)
    }

    /// The composed per-scroll-event update: record the sample, adapt the
    /// reading speed, and produce the render-ready view with any newly
    /// crossed milestones.
    pub fn on_scroll(
        &mut self,
        time_ms: f64,
        scroll_top: f64,
        viewport_height: f64,
        document_height: f64,
    ) -> ProgressView {
        self.record_scroll_sample(time_ms, scroll_top);
        self.adjust_reading_speed();

        let percent = Self::compute_progress(scroll_top, viewport_height, document_height);
        ProgressView {
            percent,
            label: self.time_left_label(percent),
            milestones: self.check_milestones(percent, time_ms),
        }
    }
}
