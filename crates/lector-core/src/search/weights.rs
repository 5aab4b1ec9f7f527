//! Field weighting constants for the search index
//!
//! A term match multiplies its term-frequency contribution by the weight of
//! the field it occurred in. Content is the implicit baseline.

/// Weight multiplier for title fields
pub const TITLE_WEIGHT: f64 = 10.0;

/// Weight multiplier for tag fields
pub const TAGS_WEIGHT: f64 = 5.0;

/// Weight multiplier for category fields
pub const CATEGORIES_WEIGHT: f64 = 3.0;

/// Weight multiplier for summary fields
pub const SUMMARY_WEIGHT: f64 = 2.0;

/// Weight multiplier for content fields (baseline)
pub const CONTENT_WEIGHT: f64 = 1.0;
