use crate::{CoreResult, TrackError};

use std::panic;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Mean earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic point with the time it was sampled.
///
/// Two locations are equal when their coordinates are equal; the timestamp
/// only orders records and takes no part in comparisons.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct Location {
    latitude: f64,
    longitude: f64,
    created_at: DateTime<Utc>,
}

/// Unchecked wire form; stored records go through the range checks.
#[derive(Deserialize)]
struct RawLocation {
    latitude: f64,
    longitude: f64,
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
}

impl TryFrom<RawLocation> for Location {
    type Error = TrackError;

    fn try_from(raw: RawLocation) -> CoreResult<Self> {
        Self::with_timestamp(raw.latitude, raw.longitude, raw.created_at)
    }
}

impl Location {
    /// Creates a location stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::InvalidCoordinate`] if latitude is outside
    /// `-90..=90`, longitude is outside `-180..=180`, or either is NaN.
    #[track_caller]
    pub fn new(latitude: f64, longitude: f64) -> CoreResult<Self> {
        Self::with_timestamp(latitude, longitude, Utc::now())
    }

    /// Creates a location with an explicit creation timestamp.
    #[track_caller]
    pub fn with_timestamp(
        latitude: f64,
        longitude: f64,
        created_at: DateTime<Utc>,
    ) -> CoreResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(TrackError::InvalidCoordinate {
                latitude,
                longitude,
                location: ErrorLocation::from(panic::Location::caller()),
            });
        }

        Ok(Self {
            latitude,
            longitude,
            created_at,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// When this location was sampled.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Great-circle distance to `other` in kilometres (haversine).
    pub fn distance_km(&self, other: &Location) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }
}
