//! # markerband
//!
//! The marker update-dispatch core of a map surface: renders a large,
//! fixed-identity collection of markers and switches each marker's icon in
//! response to discrete zoom-band transitions.
//!
//! The expensive work (a full pass over every mounted marker) happens only
//! when a viewport reading crosses the configured span threshold. Every other
//! region event is an O(1) no-op, which is what makes the core safe to drive
//! from continuous gesture tracking at high frequency. Icon updates go through
//! a direct mutation channel on the mounted render targets, bypassing the
//! declarative descriptor pipeline that [`MarkerFactory`] feeds into the host.

pub mod core;
pub mod dispatch;
pub mod icon;
pub mod markers;
pub mod prelude;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    field::MarkerField,
    geo::{LatLng, Region},
    zoom::{ZoomState, ZoomTracker},
};

pub use crate::markers::{
    descriptor::{MarkerDescriptor, MarkerFactory},
    handle::{MarkerHandle, MarkerRenderTarget},
    location::Location,
    pool::RefPool,
};

pub use crate::dispatch::dispatcher::RegionDispatcher;

pub use crate::icon::{BandIconPolicy, IconId, IconPolicy};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MarkerBandError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MarkerBandError {
    #[error("duplicate location id: {0}")]
    DuplicateLocationId(String),

    #[error("invalid coordinates for location {0}")]
    InvalidCoordinates(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MarkerBandError;
