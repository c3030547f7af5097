use crate::model::{Location, PinMarker};

use serde::{Deserialize, Serialize};

/// Pin identifier, assigned by the path store.
pub type PinId = i64;

/// A labeled point on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pin {
    id: PinId,
    name: String,
    location: Location,
    marker: PinMarker,
}

impl Pin {
    /// Creates a pin. Ids are assigned by [`crate::PathStore`].
    pub fn new(id: PinId, name: impl Into<String>, location: Location, marker: PinMarker) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            marker,
        }
    }

    /// Unique id within the pin collection.
    pub fn id(&self) -> PinId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the pin sits.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Tag or color decoration.
    pub fn marker(&self) -> &PinMarker {
        &self.marker
    }
}

impl PartialEq for Pin {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Pin {}
