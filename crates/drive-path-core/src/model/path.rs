use crate::{
    CoreResult, TrackError,
    model::{Location, PinId},
};

use std::panic;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Path identifier, assigned by the path store.
pub type PathId = i64;

/// Ids of the start and end pins a recording produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingPins {
    /// Pin created when recording began.
    pub start: PinId,
    /// Pin created when recording stopped.
    pub end: PinId,
}

/// How a path came to exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathOrigin {
    /// Sampled between a start and a stop toggle.
    #[default]
    Recorded,
    /// Created from waypoints, trace left to route enrichment.
    Planned,
}

/// A recorded or planned route.
///
/// `waypoints` always holds at least two locations. `coordinates` is the
/// dense trace to draw and stays empty for planned paths until route
/// enrichment fills it in. Equality is by id alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawPath")]
pub struct Path {
    id: PathId,
    name: String,
    start: Location,
    end: Location,
    waypoints: Vec<Location>,
    coordinates: Vec<Location>,
    created_at: DateTime<Utc>,
    origin: PathOrigin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pins: Option<RecordingPins>,
}

/// Unchecked wire form of [`Path`].
#[derive(Deserialize)]
struct RawPath {
    id: PathId,
    name: String,
    start: Location,
    end: Location,
    waypoints: Vec<Location>,
    coordinates: Vec<Location>,
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
    #[serde(default)]
    origin: PathOrigin,
    #[serde(default)]
    pins: Option<RecordingPins>,
}

impl TryFrom<RawPath> for Path {
    type Error = TrackError;

    fn try_from(raw: RawPath) -> CoreResult<Self> {
        endpoints(&raw.waypoints)?;

        Ok(Self {
            id: raw.id,
            name: raw.name,
            start: raw.start,
            end: raw.end,
            waypoints: raw.waypoints,
            coordinates: raw.coordinates,
            created_at: raw.created_at,
            origin: raw.origin,
            pins: raw.pins,
        })
    }
}

impl Path {
    /// Builds a path from a finished recording trace.
    ///
    /// The first and last samples become the start/end and the only
    /// waypoints; every sample becomes a rendered coordinate.
    #[track_caller]
    pub fn recorded(
        id: PathId,
        name: impl Into<String>,
        trace: Vec<Location>,
        pins: RecordingPins,
    ) -> CoreResult<Self> {
        let (start, end) = endpoints(&trace)?;

        Ok(Self {
            id,
            name: name.into(),
            start,
            end,
            waypoints: vec![start, end],
            coordinates: trace,
            created_at: Utc::now(),
            origin: PathOrigin::Recorded,
            pins: Some(pins),
        })
    }

    /// Builds a planned path whose trace is left for route enrichment.
    #[track_caller]
    pub fn planned(id: PathId, name: impl Into<String>, waypoints: Vec<Location>) -> CoreResult<Self> {
        let (start, end) = endpoints(&waypoints)?;

        Ok(Self {
            id,
            name: name.into(),
            start,
            end,
            waypoints,
            coordinates: Vec::new(),
            created_at: Utc::now(),
            origin: PathOrigin::Planned,
            pins: None,
        })
    }

    /// Unique id within the path collection.
    pub fn id(&self) -> PathId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First waypoint.
    pub fn start(&self) -> &Location {
        &self.start
    }

    /// Last waypoint.
    pub fn end(&self) -> &Location {
        &self.end
    }

    /// Defining via-points, start and end included.
    pub fn waypoints(&self) -> &[Location] {
        &self.waypoints
    }

    /// Dense trace to render.
    pub fn coordinates(&self) -> &[Location] {
        &self.coordinates
    }

    /// When the path was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the path was recorded or planned.
    pub fn origin(&self) -> PathOrigin {
        self.origin
    }

    /// Start/end pins, for recorded paths.
    pub fn pins(&self) -> Option<RecordingPins> {
        self.pins
    }

    pub(crate) fn set_coordinates(&mut self, coordinates: Vec<Location>) {
        self.coordinates = coordinates;
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Path {}

#[track_caller]
fn endpoints(points: &[Location]) -> CoreResult<(Location, Location)> {
    match points {
        [first, .., last] => Ok((*first, *last)),
        _ => Err(TrackError::InvalidWaypoints {
            count: points.len(),
            location: ErrorLocation::from(panic::Location::caller()),
        }),
    }
}
