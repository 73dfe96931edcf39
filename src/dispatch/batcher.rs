use crate::{
    core::zoom::ZoomState,
    icon::IconPolicy,
    markers::{descriptor::MarkerDescriptor, pool::RefPool},
};

/// Applies a new zoom state to every mounted marker in one synchronous pass.
///
/// Walks the pool in dataset order; for each slot that still holds a live
/// handle, asks the policy for the icon and writes it through the direct
/// mutation channel. Absent and dead slots are skipped without error, which
/// tolerates partially mounted or recently unmounted markers. The pass runs
/// to completion inside the caller's handler invocation and allocates nothing
/// proportional to the pool size.
///
/// Returns the number of icons actually applied.
pub fn apply_zoom_state(
    pool: &RefPool,
    descriptors: &[MarkerDescriptor],
    policy: &dyn IconPolicy,
    state: ZoomState,
) -> usize {
    debug_assert_eq!(pool.len(), descriptors.len());

    let mut applied = 0;
    for (slot, descriptor) in pool.iter().zip(descriptors) {
        let Some(handle) = slot else { continue };
        // A dead weak handle means the target unmounted after binding; skip
        let Some(target) = handle.upgrade() else {
            continue;
        };

        let icon = policy.icon_for(descriptor.location(), state);
        target.borrow_mut().set_icon(icon);
        applied += 1;
    }

    log::debug!("batch pass for {} applied {} icons", state, applied);
    applied
}
