use crate::{
    CoreResult,
    model::{Location, Path, Pin},
    route::RouteProvider,
    tracker::ToggleOutcome,
};

/// What the outer layer (buttons, console, renderer) talks to.
///
/// Implemented by [`crate::Tracker`] and by the no-op
/// [`crate::PreviewTracker`].
pub trait TrackRecorder {
    /// Loads persisted pins and paths.
    fn load(&mut self) -> CoreResult<()>;

    /// Whether a recording is in progress.
    fn is_recording(&self) -> bool;

    /// Samples of the recording in progress (empty when idle).
    fn recording_trace(&self) -> &[Location];

    /// Moves pending location updates into the recording buffer.
    fn pump_updates(&mut self) -> usize;

    /// Starts or stops recording at the current position.
    fn toggle_recording(&mut self) -> CoreResult<ToggleOutcome>;

    /// Removes the latest path and its pins.
    fn remove_last(&mut self) -> CoreResult<Path>;

    /// Creates a planned path through `waypoints`.
    fn plan_path(&mut self, name: Option<String>, waypoints: Vec<Location>) -> CoreResult<Path>;

    /// Fills empty traces using `router`. Returns how many paths changed.
    fn enrich_routes(&mut self, router: &dyn RouteProvider) -> usize;

    /// Pins for rendering.
    fn pins(&self) -> &[Pin];

    /// Paths for rendering.
    fn paths(&self) -> &[Path];
}
