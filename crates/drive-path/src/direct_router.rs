//! Straight-line route provider.
//!
//! Stands in for a road-network service: every segment is a great-circle
//! chord sampled every `step_km`, timed at a constant average speed.

use drive_path_core::{CoreResult, Location, RouteAlternative, RouteProvider, TrackError};

use std::{panic, time::Duration};

use error_location::ErrorLocation;
use tracing::trace;

const MAX_SEGMENT_POINTS: usize = 10_000;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Interpolating router with a fixed travel speed.
#[derive(Debug, Clone, Copy)]
pub struct DirectRouter {
    average_speed_kmh: f64,
    step_km: f64,
}

impl DirectRouter {
    /// Router sampling every `step_km` and timing at `average_speed_kmh`.
    pub fn new(average_speed_kmh: f64, step_km: f64) -> Self {
        Self {
            average_speed_kmh,
            step_km,
        }
    }
}

impl RouteProvider for DirectRouter {
    #[track_caller]
    fn routes(&self, from: &Location, to: &Location) -> CoreResult<Vec<RouteAlternative>> {
        if !(self.average_speed_kmh > 0.0 && self.step_km > 0.0) {
            return Err(TrackError::RouteComputationFailure {
                reason: format!(
                    "speed {} km/h and step {} km must be positive",
                    self.average_speed_kmh, self.step_km
                ),
                location: ErrorLocation::from(panic::Location::caller()),
            });
        }

        let distance_km = from.distance_km(to);
        let steps = ((distance_km / self.step_km).ceil() as usize).clamp(1, MAX_SEGMENT_POINTS);

        let d_lat = to.latitude() - from.latitude();
        let d_lon = to.longitude() - from.longitude();

        let coordinates = (0..=steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                Location::new(from.latitude() + d_lat * t, from.longitude() + d_lon * t)
            })
            .collect::<CoreResult<Vec<_>>>()?;

        let seconds = distance_km / self.average_speed_kmh * SECONDS_PER_HOUR;
        let expected_travel_time = Duration::try_from_secs_f64(seconds).map_err(|e| {
            TrackError::RouteComputationFailure {
                reason: format!("travel time of {} s is not representable: {}", seconds, e),
                location: ErrorLocation::from(panic::Location::caller()),
            }
        })?;

        trace!(
            distance_km,
            point_count = coordinates.len(),
            "Direct route computed"
        );

        Ok(vec![RouteAlternative {
            coordinates,
            expected_travel_time,
        }])
    }
}
