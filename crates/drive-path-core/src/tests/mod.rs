#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod session;
mod store;

use crate::{
    CoreResult, Location, MemoryStore, Path, PathId, PersistentStore, Pin, PinId, TrackError,
};

use std::panic;

use error_location::ErrorLocation;

/// Location at `(latitude, longitude)`; panics on out-of-range input.
pub(crate) fn loc(latitude: f64, longitude: f64) -> Location {
    Location::new(latitude, longitude).unwrap()
}

/// Coordinates of `locations` as plain pairs for readable assertions.
pub(crate) fn coords(locations: &[Location]) -> Vec<(f64, f64)> {
    locations
        .iter()
        .map(|l| (l.latitude(), l.longitude()))
        .collect()
}

/// Memory store with switchable failures.
#[derive(Debug, Default)]
pub(crate) struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_fetch: bool,
    pub fail_pin_inserts: bool,
    pub fail_path_inserts: bool,
    pub fail_saves: bool,
}

fn injected(reason: &str) -> TrackError {
    TrackError::PersistenceFailure {
        reason: reason.to_string(),
        location: ErrorLocation::from(panic::Location::caller()),
    }
}

impl PersistentStore for FlakyStore {
    fn fetch_pins(&self) -> CoreResult<Vec<Pin>> {
        if self.fail_fetch {
            return Err(injected("fetch failed"));
        }
        self.inner.fetch_pins()
    }

    fn fetch_paths(&self) -> CoreResult<Vec<Path>> {
        if self.fail_fetch {
            return Err(injected("fetch failed"));
        }
        self.inner.fetch_paths()
    }

    fn insert_pin(&mut self, pin: &Pin) -> CoreResult<()> {
        if self.fail_pin_inserts {
            return Err(injected("pin insert failed"));
        }
        self.inner.insert_pin(pin)
    }

    fn insert_path(&mut self, path: &Path) -> CoreResult<()> {
        if self.fail_path_inserts {
            return Err(injected("path insert failed"));
        }
        self.inner.insert_path(path)
    }

    fn delete_pin(&mut self, id: PinId) -> CoreResult<()> {
        self.inner.delete_pin(id)
    }

    fn delete_path(&mut self, id: PathId) -> CoreResult<()> {
        self.inner.delete_path(id)
    }

    fn save(&mut self) -> CoreResult<()> {
        if self.fail_saves {
            self.inner.discard();
            return Err(injected("save failed"));
        }
        self.inner.save()
    }

    fn discard(&mut self) {
        self.inner.discard();
    }
}
