//! Drive-path Core Library
//!
//! Records driven paths: a toggle starts sampling the live position, a
//! second toggle turns the samples into a persisted path with start and end
//! pins. Also plans paths from waypoints and fills their traces through a
//! pluggable routing service.
//!
//! # Example
//!
//! ```no_run
//! use drive_path_core::{
//!     ChannelLocationProvider, CoreResult, JsonFileStore, Location, MarkerStyle,
//!     TrackRecorder, Tracker,
//! };
//!
//! fn main() -> CoreResult<()> {
//!     let provider = ChannelLocationProvider::new();
//!     let store = JsonFileStore::open("paths.json")?;
//!     let mut tracker = Tracker::new(provider.clone(), store, MarkerStyle::Tag);
//!     tracker.load()?;
//!
//!     provider.publish(Location::new(37.0, 127.0)?);
//!     tracker.toggle_recording()?;
//!     provider.publish(Location::new(37.05, 127.05)?);
//!     provider.publish(Location::new(37.1, 127.1)?);
//!     tracker.toggle_recording()?;
//!
//!     println!("{} paths", tracker.paths().len());
//!     Ok(())
//! }
//! ```

mod error;
mod model;
mod provider;
mod route;
mod session;
mod store;
mod tracker;

pub use {
    error::Result as CoreResult,
    error::TrackError,
    model::{
        EARTH_RADIUS_KM, Location, MarkerStyle, Path, PathId, PathOrigin, Pin, PinId, PinMarker,
        RecordingPins, Rgba, Tag,
    },
    provider::{ChannelLocationProvider, LocationProvider},
    route::{RouteAlternative, RouteProvider, enrich_path},
    session::{RecordingSession, RecordingState, SessionEvent},
    store::{JsonFileStore, MemoryStore, PersistentStore, StoreDocument},
    tracker::{PathStore, PreviewTracker, ToggleOutcome, TrackRecorder, Tracker},
};

#[cfg(test)]
mod tests;
