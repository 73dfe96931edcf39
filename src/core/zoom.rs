use crate::core::{constants::DEFAULT_SPAN_THRESHOLD, geo::Region};
use serde::{Deserialize, Serialize};

/// Discrete zoom classification for a map instance.
///
/// Exactly one value exists per map instance, shared by every marker on it.
/// The variants are ordered from widest to closest so that additional bands
/// can be inserted without disturbing comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZoomState {
    /// Zoomed out past the span threshold on both axes
    WideView,
    /// At least one axis spans less than the threshold
    CloseView,
}

impl std::fmt::Display for ZoomState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoomState::WideView => write!(f, "wide"),
            ZoomState::CloseView => write!(f, "close"),
        }
    }
}

/// Holds the current discrete zoom classification for one map instance and
/// decides whether an incoming viewport reading crosses the switch threshold.
///
/// [`ZoomTracker::transition`] is read-only; the tracker mutates only through
/// [`ZoomTracker::commit`]. Callers that observe a transition are expected to
/// commit it before processing the next region event.
#[derive(Debug, Clone)]
pub struct ZoomTracker {
    current: ZoomState,
    threshold: f64,
}

impl ZoomTracker {
    /// Creates a tracker with the default span threshold, starting wide
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_SPAN_THRESHOLD)
    }

    /// Creates a tracker with a custom span threshold in degrees
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            current: ZoomState::WideView,
            threshold,
        }
    }

    /// The current committed classification
    pub fn current(&self) -> ZoomState {
        self.current
    }

    /// The span threshold in degrees
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Classifies a region against the threshold. Pure function of the
    /// region's delta magnitudes: below the threshold on either axis is
    /// close-up, otherwise wide.
    pub fn classify(&self, region: &Region) -> ZoomState {
        if region.min_delta() < self.threshold {
            ZoomState::CloseView
        } else {
            ZoomState::WideView
        }
    }

    /// Returns the new classification only if it differs from the current
    /// state. Same-side readings return `None` and leave the tracker
    /// untouched, no matter how often they repeat.
    pub fn transition(&self, region: &Region) -> Option<ZoomState> {
        let classified = self.classify(region);
        if classified != self.current {
            Some(classified)
        } else {
            None
        }
    }

    /// Commits a new classification. The only mutation path.
    pub fn commit(&mut self, state: ZoomState) {
        if state != self.current {
            log::debug!("zoom state transition: {} -> {}", self.current, state);
        }
        self.current = state;
    }
}

impl Default for ZoomTracker {
    fn default() -> Self {
        Self::new()
    }
}
