use crate::{
    core::{
        geo::Region,
        zoom::{ZoomState, ZoomTracker},
    },
    dispatch::dispatcher::RegionDispatcher,
    icon::{BandIconPolicy, IconId, IconPolicy},
    markers::{
        descriptor::{MarkerDescriptor, MarkerFactory},
        location::Location,
        pool::RefPool,
    },
    prelude::HashMap,
    Result,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Callback invoked upward when a marker is selected, parameterized by the
/// location identifier
pub type SelectCallback = Box<dyn Fn(&str)>;

/// One map instance's marker field: the dataset snapshot, its descriptor
/// list, the shared ref pool, and the region dispatch path.
///
/// Everything here runs on the host's serial UI context. Region events and
/// mount callbacks never interleave with a batch pass, so the pool needs no
/// locking; absence is handled per slot instead.
pub struct MarkerField {
    descriptors: Vec<MarkerDescriptor>,
    pool: Rc<RefCell<RefPool>>,
    dispatcher: RegionDispatcher,
    policy: Box<dyn IconPolicy>,
    on_select: Option<SelectCallback>,
    index_by_id: HashMap<String, usize>,
}

impl MarkerField {
    /// Creates an empty field with the default two-band icon policy
    pub fn new() -> Self {
        Self::with_policy(Box::new(BandIconPolicy::default()))
    }

    /// Creates an empty field with a caller-supplied icon policy
    pub fn with_policy(policy: Box<dyn IconPolicy>) -> Self {
        Self::with_policy_and_tracker(policy, ZoomTracker::new())
    }

    /// Full construction: custom policy and a tracker configured with a
    /// non-default span threshold
    pub fn with_policy_and_tracker(policy: Box<dyn IconPolicy>, tracker: ZoomTracker) -> Self {
        Self {
            descriptors: Vec::new(),
            pool: Rc::new(RefCell::new(RefPool::new(0))),
            dispatcher: RegionDispatcher::with_tracker(tracker),
            policy,
            on_select: None,
            index_by_id: HashMap::default(),
        }
    }

    /// Registers the navigation collaborator's selection callback
    pub fn set_on_select(&mut self, callback: SelectCallback) {
        self.on_select = Some(callback);
    }

    /// Replaces the dataset. The pool is replaced by a freshly allocated one
    /// of the new length before any further region event is processed;
    /// descriptors from the previous dataset keep pointing at the orphaned
    /// pool, so a straggling mount callback can never write a stale index
    /// into the new one.
    ///
    /// The committed zoom state is per map instance, not per dataset, and
    /// survives the replacement.
    pub fn set_locations(&mut self, locations: Vec<Location>) -> Result<()> {
        let pool = Rc::new(RefCell::new(RefPool::new(locations.len())));
        let descriptors = MarkerFactory::build(&locations, &pool)?;

        let mut index_by_id = HashMap::default();
        for (i, location) in locations.iter().enumerate() {
            index_by_id.insert(location.id.clone(), i);
        }

        self.pool = pool;
        self.descriptors = descriptors;
        self.index_by_id = index_by_id;
        log::debug!("marker field dataset replaced: {} locations", self.len());
        Ok(())
    }

    /// Declarative descriptor list for the host render pipeline, in dataset
    /// order
    pub fn descriptors(&self) -> &[MarkerDescriptor] {
        &self.descriptors
    }

    /// Handles one viewport-change event from the host. Returns the number
    /// of icons applied when the event crossed the band threshold, `None`
    /// for the (overwhelmingly common) same-side case.
    pub fn on_region_change(&mut self, region: &Region) -> Option<usize> {
        self.dispatcher.on_region_change(
            region,
            &self.pool.borrow(),
            &self.descriptors,
            self.policy.as_ref(),
        )
    }

    /// Icon the host should render declaratively for a slot, consistent with
    /// the committed band. Direct mutations are lost on remount, so a
    /// remounting marker must start from this value.
    pub fn icon_for_slot(&self, slot: usize) -> Option<IconId> {
        self.descriptors
            .get(slot)
            .map(|descriptor| self.policy.icon_for(descriptor.location(), self.zoom_state()))
    }

    /// Reports a marker tap upward, parameterized by the location identifier
    pub fn select(&self, slot: usize) {
        let Some(descriptor) = self.descriptors.get(slot) else {
            return;
        };
        if let Some(callback) = &self.on_select {
            callback(&descriptor.location().id);
        }
    }

    /// Dataset index for a location identifier
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    /// The committed zoom classification
    pub fn zoom_state(&self) -> ZoomState {
        self.dispatcher.zoom_state()
    }

    /// Number of locations (and pool slots)
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Number of currently mounted markers
    pub fn bound_count(&self) -> usize {
        self.pool.borrow().bound_count()
    }
}

impl Default for MarkerField {
    fn default() -> Self {
        Self::new()
    }
}
