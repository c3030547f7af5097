use crate::{
    CoreResult, TrackError,
    model::{Location, MarkerStyle, Path, Pin, PinMarker, RecordingPins, Tag},
    route::RouteProvider,
    tracker::{ToggleOutcome, TrackRecorder},
};

use std::panic;

use error_location::ErrorLocation;
use tracing::info;

/// Stand-in tracker with fixed demo data.
///
/// Nothing is recorded or persisted; toggles are logged and ignored. Used
/// to exercise the outer layers without a location fix or a store.
#[derive(Debug)]
pub struct PreviewTracker {
    pins: Vec<Pin>,
    paths: Vec<Path>,
}

impl PreviewTracker {
    /// Creates the preview with a short demo drive and a point of interest.
    pub fn new() -> CoreResult<Self> {
        let start = Location::new(37.5665, 126.9780)?;
        let middle = Location::new(37.5700, 126.9830)?;
        let end = Location::new(37.5759, 126.9768)?;
        let cafe = Location::new(37.5796, 126.9770)?;

        let style = MarkerStyle::Tag;
        let pins = vec![
            Pin::new(1, "Path 1 start", start, style.start_marker()),
            Pin::new(2, "Path 1 end", end, style.end_marker()),
            Pin::new(
                3,
                "Cafe",
                cafe,
                PinMarker::Tag(Tag {
                    id: 1,
                    name: "Cafe".to_string(),
                    icon: "cup.and.saucer.fill".to_string(),
                    color: "#A2845E".to_string(),
                }),
            ),
        ];
        let paths = vec![Path::recorded(
            1,
            "Path 1",
            vec![start, middle, end],
            RecordingPins { start: 1, end: 2 },
        )?];

        Ok(Self { pins, paths })
    }
}

impl TrackRecorder for PreviewTracker {
    fn load(&mut self) -> CoreResult<()> {
        Ok(())
    }

    fn is_recording(&self) -> bool {
        false
    }

    fn recording_trace(&self) -> &[Location] {
        &[]
    }

    fn pump_updates(&mut self) -> usize {
        0
    }

    fn toggle_recording(&mut self) -> CoreResult<ToggleOutcome> {
        info!("toggle_recording (preview)");
        Ok(ToggleOutcome::Ignored)
    }

    #[track_caller]
    fn remove_last(&mut self) -> CoreResult<Path> {
        Err(TrackError::NothingToRemove {
            location: ErrorLocation::from(panic::Location::caller()),
        })
    }

    fn plan_path(&mut self, name: Option<String>, waypoints: Vec<Location>) -> CoreResult<Path> {
        let path = Path::planned(0, name.unwrap_or_else(|| "Preview".to_string()), waypoints)?;
        info!(waypoint_count = path.waypoints().len(), "plan_path (preview)");
        Ok(path)
    }

    fn enrich_routes(&mut self, _router: &dyn RouteProvider) -> usize {
        0
    }

    fn pins(&self) -> &[Pin] {
        &self.pins
    }

    fn paths(&self) -> &[Path] {
        &self.paths
    }
}
