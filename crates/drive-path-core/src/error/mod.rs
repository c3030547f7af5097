use error_location::ErrorLocation;
use thiserror::Error;

/// Recording and persistence errors with source location tracking.
#[derive(Error, Debug)]
pub enum TrackError {
    /// The location provider has no fix.
    #[error("Position unavailable {location}")]
    PositionUnavailable {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A store insert, delete, save or load failed.
    #[error("Persistence failure: {reason} {location}")]
    PersistenceFailure {
        /// Description of the store failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Undo was requested but there is no recording to remove.
    #[error("Nothing to remove {location}")]
    NothingToRemove {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Route computation failed for a single waypoint pair.
    #[error("Route computation failed: {reason} {location}")]
    RouteComputationFailure {
        /// Description of the routing failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Latitude or longitude outside the valid range.
    #[error("Invalid coordinate ({latitude}, {longitude}) {location}")]
    InvalidCoordinate {
        /// Rejected latitude.
        latitude: f64,
        /// Rejected longitude.
        longitude: f64,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A path needs at least two waypoints.
    #[error("A path needs at least 2 waypoints, got {count} {location}")]
    InvalidWaypoints {
        /// Number of waypoints supplied.
        count: usize,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Marker color is not a `#RRGGBB` or `#AARRGGBB` hex string.
    #[error("Invalid color: {value:?} {location}")]
    InvalidColor {
        /// The rejected color string.
        value: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`TrackError`].
pub type Result<T> = std::result::Result<T, TrackError>;
