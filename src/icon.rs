use crate::{core::zoom::ZoomState, markers::location::Location};
use serde::{Deserialize, Serialize};

/// Identifier of an icon asset known to the render host
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(pub String);

impl IconId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IconId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-supplied icon selection policy.
///
/// Must be a pure, total function of the location and zoom state: the batch
/// pass calls it once per mounted marker on every band transition and caches
/// nothing. What a given location looks like in a given band is the host's
/// business, not this crate's.
pub trait IconPolicy {
    fn icon_for(&self, location: &Location, state: ZoomState) -> IconId;
}

/// The trivial policy: one icon asset per band, identical for every location.
#[derive(Debug, Clone)]
pub struct BandIconPolicy {
    wide: IconId,
    close: IconId,
}

impl BandIconPolicy {
    pub fn new(wide: IconId, close: IconId) -> Self {
        Self { wide, close }
    }
}

impl Default for BandIconPolicy {
    fn default() -> Self {
        Self::new(IconId::new("marker-dot"), IconId::new("marker-pin"))
    }
}

impl IconPolicy for BandIconPolicy {
    fn icon_for(&self, _location: &Location, state: ZoomState) -> IconId {
        match state {
            ZoomState::WideView => self.wide.clone(),
            ZoomState::CloseView => self.close.clone(),
        }
    }
}
