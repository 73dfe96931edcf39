use crate::markers::handle::MarkerHandle;

/// Index-aligned pool of nullable handles to live marker render targets.
///
/// Slot `i` corresponds to the same location as index `i` in the dataset for
/// the pool's entire lifetime. A dataset identity or length change replaces
/// the pool wholesale with a freshly allocated one; slots are never resized
/// in place. Binding and unbinding track the mount lifecycle and are
/// independent of region events.
#[derive(Debug, Default)]
pub struct RefPool {
    slots: Vec<Option<MarkerHandle>>,
}

impl RefPool {
    /// Allocates a pool of `size` empty slots
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    /// Number of slots, always equal to the dataset length
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Registers a mounted handle. Out-of-range indices are logged and
    /// ignored; they indicate a bind that raced a dataset replacement and the
    /// stale handle must not land in a fresh pool.
    pub fn bind(&mut self, index: usize, handle: MarkerHandle) {
        match self.slots.get_mut(index) {
            Some(slot) => *slot = Some(handle),
            None => log::warn!(
                "bind index {} out of range for pool of {} slots",
                index,
                self.slots.len()
            ),
        }
    }

    /// Clears a slot on unmount. Out-of-range indices are ignored.
    pub fn unbind(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
    }

    /// Never fails: absent for empty or out-of-range slots
    pub fn get(&self, index: usize) -> Option<MarkerHandle> {
        self.slots.get(index).and_then(|slot| slot.clone())
    }

    /// Iterates the slots in dataset order
    pub fn iter(&self) -> impl Iterator<Item = Option<&MarkerHandle>> {
        self.slots.iter().map(|slot| slot.as_ref())
    }

    /// Number of currently bound slots
    pub fn bound_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
