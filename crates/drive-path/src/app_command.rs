use std::path::PathBuf;

/// Commands sent from the console handler to the main application.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Start or stop recording at the current position.
    Toggle,
    /// Publish a manual position fix.
    Goto {
        /// Latitude in degrees.
        latitude: f64,
        /// Longitude in degrees.
        longitude: f64,
    },
    /// Remove the latest path and its pins.
    Undo,
    /// Print pins, paths and the recording in progress.
    List,
    /// Create a planned path through the given waypoints.
    Plan {
        /// Optional path name.
        name: Option<String>,
        /// `(latitude, longitude)` pairs, at least two.
        waypoints: Vec<(f64, f64)>,
    },
    /// Fill empty path traces using the router.
    Route,
    /// Feed positions from a track file into the location provider.
    Replay {
        /// Track file with one `lat,lon` per line.
        path: PathBuf,
    },
    /// Request application shutdown.
    Shutdown,
}
