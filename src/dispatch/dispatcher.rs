use crate::{
    core::{
        geo::Region,
        zoom::{ZoomState, ZoomTracker},
    },
    dispatch::batcher,
    icon::IconPolicy,
    markers::{descriptor::MarkerDescriptor, pool::RefPool},
};

/// Receives viewport-change events from the host map and decides whether a
/// batch pass is due.
///
/// The host may deliver region events many times per second during continuous
/// gesture tracking. The performance contract is the O(1) escape hatch: when
/// the tracker reports no threshold crossing, the dispatcher returns before
/// touching any marker. No debouncing is layered on top; expensive work
/// already happens only at band boundaries.
#[derive(Debug)]
pub struct RegionDispatcher {
    tracker: ZoomTracker,
}

impl RegionDispatcher {
    pub fn new() -> Self {
        Self {
            tracker: ZoomTracker::new(),
        }
    }

    pub fn with_tracker(tracker: ZoomTracker) -> Self {
        Self { tracker }
    }

    /// The current committed zoom classification
    pub fn zoom_state(&self) -> ZoomState {
        self.tracker.current()
    }

    /// Handles one viewport-change event. Returns `None` when the reading
    /// stays on the current side of the threshold; otherwise commits the new
    /// state, runs the batch pass synchronously, and returns the number of
    /// icons applied.
    pub fn on_region_change(
        &mut self,
        region: &Region,
        pool: &RefPool,
        descriptors: &[MarkerDescriptor],
        policy: &dyn IconPolicy,
    ) -> Option<usize> {
        let state = self.tracker.transition(region)?;
        self.tracker.commit(state);
        Some(batcher::apply_zoom_state(pool, descriptors, policy, state))
    }
}

impl Default for RegionDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::BandIconPolicy;

    #[test]
    fn test_no_crossing_is_a_no_op() {
        let mut dispatcher = RegionDispatcher::new();
        let pool = RefPool::new(0);
        let policy = BandIconPolicy::default();

        for _ in 0..1000 {
            let result =
                dispatcher.on_region_change(&Region::with_span(10.0), &pool, &[], &policy);
            assert!(result.is_none());
        }
        assert_eq!(dispatcher.zoom_state(), ZoomState::WideView);
    }

    #[test]
    fn test_crossing_commits_state() {
        let mut dispatcher = RegionDispatcher::new();
        let pool = RefPool::new(0);
        let policy = BandIconPolicy::default();

        let result = dispatcher.on_region_change(&Region::with_span(0.4), &pool, &[], &policy);
        assert_eq!(result, Some(0));
        assert_eq!(dispatcher.zoom_state(), ZoomState::CloseView);

        // Same side again: escape hatch
        let result = dispatcher.on_region_change(&Region::with_span(0.3), &pool, &[], &policy);
        assert!(result.is_none());
    }
}
