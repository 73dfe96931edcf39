//! Core constants shared across the dispatch path.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Region span (degrees on either axis) below which the view is classified as
/// close-up. Matches the extent at which individual markers become visually
/// distinguishable on a phone-sized viewport.
pub const DEFAULT_SPAN_THRESHOLD: f64 = 1.27;

/// World latitude limit for dataset validation (Web Mercator clamp).
pub const MAX_LATITUDE: f64 = 85.0511287798;
