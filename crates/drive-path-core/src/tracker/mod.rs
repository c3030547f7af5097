mod path_store;
mod preview_tracker;
mod toggle_outcome;
mod track_recorder;
#[allow(clippy::module_inception)]
mod tracker;

pub use {
    path_store::PathStore, preview_tracker::PreviewTracker, toggle_outcome::ToggleOutcome,
    track_recorder::TrackRecorder, tracker::Tracker,
};
