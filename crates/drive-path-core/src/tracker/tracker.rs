use crate::{
    CoreResult,
    model::{Location, MarkerStyle, Path, Pin},
    provider::LocationProvider,
    route::RouteProvider,
    session::{RecordingSession, SessionEvent},
    store::PersistentStore,
    tracker::{PathStore, ToggleOutcome, TrackRecorder},
};

use std::sync::mpsc::Receiver;

use tracing::{debug, instrument};

/// Wires a location provider, a recording session and a path store.
///
/// # Thread Safety
///
/// Tracker is NOT internally synchronized. Every transition is expected to
/// run on one control task; location updates reach it through the channel
/// obtained from the provider at construction and are drained in order.
#[derive(Debug)]
pub struct Tracker<P: LocationProvider, S: PersistentStore> {
    provider: P,
    updates: Receiver<Location>,
    session: RecordingSession,
    path_store: PathStore<S>,
}

impl<P: LocationProvider, S: PersistentStore> Tracker<P, S> {
    /// Creates a tracker and subscribes to `provider`'s updates.
    pub fn new(provider: P, store: S, marker_style: MarkerStyle) -> Self {
        let updates = provider.subscribe();

        Self {
            provider,
            updates,
            session: RecordingSession::new(),
            path_store: PathStore::new(store, marker_style),
        }
    }

    /// The location provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The recording session.
    pub fn session(&self) -> &RecordingSession {
        &self.session
    }

    /// The path store.
    pub fn path_store(&self) -> &PathStore<S> {
        &self.path_store
    }

    /// The path store, for seeding points of interest.
    pub fn path_store_mut(&mut self) -> &mut PathStore<S> {
        &mut self.path_store
    }
}

impl<P: LocationProvider, S: PersistentStore> TrackRecorder for Tracker<P, S> {
    fn load(&mut self) -> CoreResult<()> {
        self.path_store.load_all()
    }

    fn is_recording(&self) -> bool {
        self.session.is_recording()
    }

    fn recording_trace(&self) -> &[Location] {
        self.session.buffer()
    }

    fn pump_updates(&mut self) -> usize {
        self.session.drain_updates(&self.updates)
    }

    #[instrument(skip(self))]
    fn toggle_recording(&mut self) -> CoreResult<ToggleOutcome> {
        // Anything published before the toggle belongs before the stop point.
        self.pump_updates();

        let position = self.provider.current_position();
        let path_store = &mut self.path_store;

        let outcome = self.session.toggle(position, |event| match event {
            SessionEvent::Started { start, .. } => {
                let start_pin = path_store.on_recording_start(*start)?;
                Ok(ToggleOutcome::Started { start_pin })
            }
            SessionEvent::Stopped { trace, .. } => {
                let (path, end_pin) = path_store.on_recording_stop(trace)?;
                Ok(ToggleOutcome::Stopped { path, end_pin })
            }
        })?;

        debug!(recording = self.session.is_recording(), "Toggle applied");

        Ok(outcome)
    }

    fn remove_last(&mut self) -> CoreResult<Path> {
        self.path_store.remove_last()
    }

    fn plan_path(&mut self, name: Option<String>, waypoints: Vec<Location>) -> CoreResult<Path> {
        self.path_store.plan_path(name, waypoints)
    }

    fn enrich_routes(&mut self, router: &dyn RouteProvider) -> usize {
        self.path_store.enrich_routes(router)
    }

    fn pins(&self) -> &[Pin] {
        self.path_store.pins()
    }

    fn paths(&self) -> &[Path] {
        self.path_store.paths()
    }
}
