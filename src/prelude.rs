//! Prelude module for common markerband types and traits
//!
//! Re-exports the most commonly used types, traits, and functions for easy
//! importing with `use markerband::prelude::*;`

pub use crate::core::{
    constants::DEFAULT_SPAN_THRESHOLD,
    field::{MarkerField, SelectCallback},
    geo::{LatLng, Region},
    zoom::{ZoomState, ZoomTracker},
};

pub use crate::markers::{
    descriptor::{MarkerDescriptor, MarkerFactory},
    handle::{MarkerHandle, MarkerRenderTarget},
    location::Location,
    pool::RefPool,
};

pub use crate::dispatch::{batcher::apply_zoom_state, dispatcher::RegionDispatcher};

pub use crate::icon::{BandIconPolicy, IconId, IconPolicy};

pub use crate::{Error, MarkerBandError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet, FxHasher};
