use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// One record from the external data collaborator's dataset.
///
/// Immutable per render cycle: the field takes a snapshot on dataset
/// replacement and never edits entries in place. Identity is carried by `id`,
/// which must be unique within a dataset and stable across reorderings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub position: LatLng,
    /// Free-form display metadata (title, subtitle, category tags) that icon
    /// policies may consult
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Location {
    pub fn new(id: impl Into<String>, position: LatLng) -> Self {
        Self {
            id: id.into(),
            position,
            metadata: serde_json::Value::Null,
        }
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}
