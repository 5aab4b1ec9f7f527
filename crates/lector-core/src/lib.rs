//! Lector Core Library
//!
//! Pure logic engines for content-site reading enhancements: a
//! reading-progress estimator with adaptive time estimation, and a
//! field-weighted full-text search engine with keyboard-driven result
//! selection. All clocks and input events are supplied by the host, so
//! every engine here is testable without a browser or a timer.

pub mod debounce;
pub mod error;
pub mod event;
pub mod logging;
pub mod page;
pub mod progress;
pub mod search;
pub mod text;
