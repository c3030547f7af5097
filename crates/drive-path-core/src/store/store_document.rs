use crate::{
    CoreResult, TrackError,
    model::{Path, PathId, Pin, PinId},
};

use std::{collections::HashSet, panic};

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Current on-disk schema version.
pub const STORE_VERSION: u32 = 1;

/// The full contents of a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreDocument {
    /// Schema version.
    #[serde(default = "default_version")]
    pub version: u32,
    /// Pins in insertion order.
    #[serde(default)]
    pub pins: Vec<Pin>,
    /// Paths in insertion order.
    #[serde(default)]
    pub paths: Vec<Path>,
}

fn default_version() -> u32 {
    STORE_VERSION
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            pins: Vec::new(),
            paths: Vec::new(),
        }
    }
}

impl StoreDocument {
    /// Paths sorted by creation time, ties broken by id.
    pub fn paths_by_creation(&self) -> Vec<Path> {
        let mut paths = self.paths.clone();
        paths.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(&b.id()))
        });
        paths
    }

    /// Checks that pin ids and path ids are each unique.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::PersistenceFailure`] naming the first repeated id.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        let mut pin_ids = HashSet::new();
        if let Some(pin) = self.pins.iter().find(|p| !pin_ids.insert(p.id())) {
            return Err(persistence(format!("Pin id {} stored twice", pin.id())));
        }

        let mut path_ids = HashSet::new();
        if let Some(path) = self.paths.iter().find(|p| !path_ids.insert(p.id())) {
            return Err(persistence(format!("Path id {} stored twice", path.id())));
        }

        Ok(())
    }

    #[track_caller]
    pub(crate) fn insert_pin(&mut self, pin: &Pin) -> CoreResult<()> {
        if self.pins.iter().any(|p| p.id() == pin.id()) {
            return Err(persistence(format!("Pin {} already stored", pin.id())));
        }
        self.pins.push(pin.clone());
        Ok(())
    }

    #[track_caller]
    pub(crate) fn insert_path(&mut self, path: &Path) -> CoreResult<()> {
        if self.paths.iter().any(|p| p.id() == path.id()) {
            return Err(persistence(format!("Path {} already stored", path.id())));
        }
        self.paths.push(path.clone());
        Ok(())
    }

    #[track_caller]
    pub(crate) fn delete_pin(&mut self, id: PinId) -> CoreResult<()> {
        let index = self
            .pins
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| persistence(format!("Pin {} not stored", id)))?;
        self.pins.remove(index);
        Ok(())
    }

    #[track_caller]
    pub(crate) fn delete_path(&mut self, id: PathId) -> CoreResult<()> {
        let index = self
            .paths
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| persistence(format!("Path {} not stored", id)))?;
        self.paths.remove(index);
        Ok(())
    }
}

#[track_caller]
pub(crate) fn persistence(reason: String) -> TrackError {
    TrackError::PersistenceFailure {
        reason,
        location: ErrorLocation::from(panic::Location::caller()),
    }
}
