//! Authoritative pin and path collections.
//!
//! The path store is the only writer to the persistent store. It assigns
//! ids as `max(existing) + 1`, stages every mutation against the store and
//! only touches its in-memory collections once the store committed.

use crate::{
    CoreResult, TrackError,
    model::{
        Location, MarkerStyle, Path, PathId, PathOrigin, Pin, PinId, PinMarker, RecordingPins,
    },
    route::{RouteProvider, enrich_path},
    store::PersistentStore,
};

use std::panic;

use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, warn};

/// Pins and paths backed by a [`PersistentStore`].
#[derive(Debug)]
pub struct PathStore<S: PersistentStore> {
    store: S,
    pins: Vec<Pin>,
    paths: Vec<Path>,
    next_pin_id: PinId,
    next_path_id: PathId,
    marker_style: MarkerStyle,
    /// Start pin of the recording in progress.
    pending_start_pin: Option<PinId>,
}

impl<S: PersistentStore> PathStore<S> {
    /// Creates an empty path store. Call [`load_all`](Self::load_all) to
    /// pick up what the store already holds.
    pub fn new(store: S, marker_style: MarkerStyle) -> Self {
        Self {
            store,
            pins: Vec::new(),
            paths: Vec::new(),
            next_pin_id: 1,
            next_path_id: 1,
            marker_style,
            pending_start_pin: None,
        }
    }

    /// Pins in insertion order.
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Paths, oldest first.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Id the next pin will get.
    pub fn next_pin_id(&self) -> PinId {
        self.next_pin_id
    }

    /// Id the next path will get.
    pub fn next_path_id(&self) -> PathId {
        self.next_path_id
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Replaces the collections with the store's contents.
    ///
    /// # Errors
    ///
    /// If the store cannot be read the failure is logged, the collections
    /// are left empty with both counters at 1, and the error is returned.
    #[instrument(skip(self))]
    pub fn load_all(&mut self) -> CoreResult<()> {
        let loaded = match (self.store.fetch_pins(), self.store.fetch_paths()) {
            (Ok(pins), Ok(paths)) => Ok((pins, paths)),
            (Err(e), _) | (_, Err(e)) => Err(e),
        };

        match loaded {
            Ok((pins, paths)) => {
                self.pins = pins;
                self.paths = paths;
                self.pending_start_pin = None;
                self.recompute_counters();

                info!(
                    pin_count = self.pins.len(),
                    path_count = self.paths.len(),
                    next_pin_id = self.next_pin_id,
                    next_path_id = self.next_path_id,
                    "Pins and paths loaded"
                );

                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to load pins and paths");
                self.pins.clear();
                self.paths.clear();
                self.pending_start_pin = None;
                self.recompute_counters();
                Err(e)
            }
        }
    }

    /// Persists the start pin of a new recording.
    ///
    /// # Errors
    ///
    /// Returns the store's error; nothing is appended in that case.
    #[instrument(skip(self))]
    pub fn on_recording_start(&mut self, start: Location) -> CoreResult<Pin> {
        let pin = Pin::new(
            self.next_pin_id,
            format!("Path {} start", self.next_path_id),
            start,
            self.marker_style.start_marker(),
        );

        self.commit(|store| store.insert_pin(&pin))?;

        self.pending_start_pin = Some(pin.id());
        self.pins.push(pin.clone());
        self.next_pin_id += 1;

        info!(pin_id = pin.id(), "Start pin created");

        Ok(pin)
    }

    /// Persists the path and end pin of a finished recording.
    ///
    /// Both are committed in one store transaction: either both are
    /// durable and appended, or neither is.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::InvalidWaypoints`] for traces shorter than 2,
    /// or the store's error.
    #[instrument(skip(self, trace), fields(sample_count = trace.len()))]
    pub fn on_recording_stop(&mut self, trace: &[Location]) -> CoreResult<(Path, Pin)> {
        let end_pin_id = self.next_pin_id;
        let start_pin_id = self.pending_start_pin.unwrap_or_else(|| {
            warn!("No start pin recorded for this recording, assuming the previous pin");
            end_pin_id - 1
        });

        let path = Path::recorded(
            self.next_path_id,
            format!("Path {}", self.next_path_id),
            trace.to_vec(),
            RecordingPins {
                start: start_pin_id,
                end: end_pin_id,
            },
        )?;

        let end_pin = Pin::new(
            end_pin_id,
            format!("Path {} end", self.next_path_id),
            *path.end(),
            self.marker_style.end_marker(),
        );

        self.commit(|store| {
            store.insert_path(&path)?;
            store.insert_pin(&end_pin)
        })?;

        self.paths.push(path.clone());
        self.pins.push(end_pin.clone());
        self.next_path_id += 1;
        self.next_pin_id += 1;
        self.pending_start_pin = None;

        info!(
            path_id = path.id(),
            end_pin_id = end_pin.id(),
            point_count = path.coordinates().len(),
            "Recorded path created"
        );

        Ok((path, end_pin))
    }

    /// Removes the most recently created path and, for recordings, its
    /// start and end pins.
    ///
    /// Only the single latest path is targeted; this is not a multi-step
    /// undo history.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::NothingToRemove`] when there is no such path
    /// or one of its pins is gone, or the store's error.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn remove_last(&mut self) -> CoreResult<Path> {
        let caller = panic::Location::caller();
        let nothing_to_remove = || TrackError::NothingToRemove {
            location: ErrorLocation::from(caller),
        };

        let path_id = self.next_path_id - 1;
        let path = self
            .paths
            .iter()
            .find(|p| p.id() == path_id)
            .cloned()
            .ok_or_else(nothing_to_remove)?;

        let pin_ids = match (path.origin(), path.pins()) {
            (PathOrigin::Planned, _) => Vec::new(),
            (PathOrigin::Recorded, Some(pins)) => vec![pins.end, pins.start],
            // Records written before pin ids were kept on the path.
            (PathOrigin::Recorded, None) => self.legacy_pin_ids(),
        };

        let expected_pins = match path.origin() {
            PathOrigin::Planned => 0,
            PathOrigin::Recorded => 2,
        };
        if pin_ids.len() != expected_pins
            || !pin_ids
                .iter()
                .all(|id| self.pins.iter().any(|p| p.id() == *id))
        {
            warn!(path_id, ?pin_ids, "Latest path is missing its pins");
            return Err(nothing_to_remove());
        }

        self.commit(|store| {
            for id in &pin_ids {
                store.delete_pin(*id)?;
            }
            store.delete_path(path_id)
        })?;

        self.pins.retain(|p| !pin_ids.contains(&p.id()));
        self.paths.retain(|p| p.id() != path_id);
        if pin_ids.iter().any(|id| Some(*id) == self.pending_start_pin) {
            self.pending_start_pin = None;
        }
        self.recompute_counters();

        info!(
            path_id,
            ?pin_ids,
            next_pin_id = self.next_pin_id,
            next_path_id = self.next_path_id,
            "Latest path removed"
        );

        Ok(path)
    }

    /// Persists a static point of interest.
    #[instrument(skip(self, name, marker))]
    pub fn add_point_of_interest(
        &mut self,
        name: impl Into<String>,
        location: Location,
        marker: PinMarker,
    ) -> CoreResult<Pin> {
        marker.rgba()?;

        let pin = Pin::new(self.next_pin_id, name, location, marker);

        self.commit(|store| store.insert_pin(&pin))?;

        self.pins.push(pin.clone());
        self.next_pin_id += 1;

        info!(pin_id = pin.id(), name = pin.name(), "Point of interest created");

        Ok(pin)
    }

    /// Persists a planned path through `waypoints` with an empty trace.
    #[instrument(skip(self, name, waypoints), fields(waypoint_count = waypoints.len()))]
    pub fn plan_path(
        &mut self,
        name: Option<String>,
        waypoints: Vec<Location>,
    ) -> CoreResult<Path> {
        let name = name.unwrap_or_else(|| format!("Path {}", self.next_path_id));
        let path = Path::planned(self.next_path_id, name, waypoints)?;

        self.commit(|store| store.insert_path(&path))?;

        self.paths.push(path.clone());
        self.next_path_id += 1;

        info!(path_id = path.id(), "Planned path created");

        Ok(path)
    }

    /// Routes every path with an empty trace. Returns how many were
    /// enriched. Enriched traces are kept in memory only.
    #[instrument(skip_all)]
    pub fn enrich_routes<R: RouteProvider + ?Sized>(&mut self, router: &R) -> usize {
        let mut enriched = 0;
        for path in self.paths.iter_mut() {
            if enrich_path(path, router) {
                enriched += 1;
            }
        }

        debug!(enriched, "Route enrichment finished");

        enriched
    }

    /// End and start pin ids of a legacy recording: the two newest ids
    /// below the counter, skipping the start pin of a recording in progress.
    fn legacy_pin_ids(&self) -> Vec<PinId> {
        (1..self.next_pin_id)
            .rev()
            .filter(|id| Some(*id) != self.pending_start_pin)
            .take(2)
            .collect()
    }

    /// Runs `stage` against the store and commits it. Any failure drops
    /// everything staged.
    fn commit<F>(&mut self, stage: F) -> CoreResult<()>
    where
        F: FnOnce(&mut S) -> CoreResult<()>,
    {
        if let Err(e) = stage(&mut self.store) {
            self.store.discard();
            error!(error = %e, "Store update rejected");
            return Err(e);
        }

        self.store.save().inspect_err(|e| {
            error!(error = %e, "Store commit failed");
        })
    }

    fn recompute_counters(&mut self) {
        self.next_pin_id = self.pins.iter().map(Pin::id).max().unwrap_or(0) + 1;
        self.next_path_id = self.paths.iter().map(Path::id).max().unwrap_or(0) + 1;
    }
}
