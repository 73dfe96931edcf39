use crate::{
    markers::{handle::MarkerHandle, location::Location, pool::RefPool},
    prelude::HashSet,
    MarkerBandError, Result,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Declarative marker record handed to the host render pipeline.
///
/// The descriptor carries a stable key derived from the location identifier
/// (not the array index, so identity survives dataset reordering), the
/// location payload, and the binding that wires the mounted render target
/// into the matching pool slot. Everything about the descriptor is rendered
/// declaratively; only the icon attribute is later overridden through the
/// direct mutation channel.
pub struct MarkerDescriptor {
    key: String,
    location: Location,
    slot: usize,
    pool: Rc<RefCell<RefPool>>,
}

impl MarkerDescriptor {
    /// Stable identity key for the host's reconciliation
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Dataset index this descriptor occupies
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Mount callback: registers the live render target in the pool slot
    pub fn bind(&self, handle: MarkerHandle) {
        self.pool.borrow_mut().bind(self.slot, handle);
    }

    /// Unmount callback: clears the pool slot
    pub fn unbind(&self) {
        self.pool.borrow_mut().unbind(self.slot);
    }
}

impl std::fmt::Debug for MarkerDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkerDescriptor")
            .field("key", &self.key)
            .field("slot", &self.slot)
            .finish()
    }
}

/// Builds one descriptor per location, in dataset order, each wired to the
/// shared ref pool.
pub struct MarkerFactory;

impl MarkerFactory {
    /// Validates the dataset and produces its descriptor list. The pool must
    /// already be sized to `locations.len()`; descriptors bind into it by
    /// index.
    pub fn build(
        locations: &[Location],
        pool: &Rc<RefCell<RefPool>>,
    ) -> Result<Vec<MarkerDescriptor>> {
        let mut seen: HashSet<&str> = HashSet::default();
        let mut descriptors = Vec::with_capacity(locations.len());

        for (slot, location) in locations.iter().enumerate() {
            if !location.position.is_valid() {
                return Err(MarkerBandError::InvalidCoordinates(location.id.clone()));
            }
            if !seen.insert(location.id.as_str()) {
                return Err(MarkerBandError::DuplicateLocationId(location.id.clone()));
            }

            descriptors.push(MarkerDescriptor {
                key: format!("marker-{}", location.id),
                location: location.clone(),
                slot,
                pool: Rc::clone(pool),
            });
        }

        log::debug!("built {} marker descriptors", descriptors.len());
        Ok(descriptors)
    }
}
