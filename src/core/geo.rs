use crate::core::constants::MAX_LATITUDE;
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Clamps latitude to the Web Mercator displayable range
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Viewport descriptor supplied by the host map on every camera movement.
///
/// The delta magnitudes describe the current zoom extent in degrees: the
/// visible span of the viewport along each axis. The host emits one `Region`
/// per camera change, at arbitrary frequency during gesture tracking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// The center of the visible viewport
    pub center: LatLng,
    /// Visible latitude span in degrees
    pub lat_delta: f64,
    /// Visible longitude span in degrees
    pub lng_delta: f64,
}

impl Region {
    /// Creates a new region descriptor
    pub fn new(center: LatLng, lat_delta: f64, lng_delta: f64) -> Self {
        Self {
            center,
            lat_delta,
            lng_delta,
        }
    }

    /// Creates a region with equal spans on both axes, centered on the origin.
    /// Convenient for hosts that report a single zoom extent.
    pub fn with_span(span: f64) -> Self {
        Self::new(LatLng::default(), span, span)
    }

    /// The smaller of the two axis spans. A viewport is only as zoomed-out as
    /// its narrower axis, so classification keys on this value.
    pub fn min_delta(&self) -> f64 {
        self.lat_delta.min(self.lng_delta)
    }
}
