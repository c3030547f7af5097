//! Track replay: publishes recorded positions into the location provider.

use crate::{AppError, AppResult};

use std::{fs, panic::Location as CallerLocation, path::Path, time::Duration};

use drive_path_core::{ChannelLocationProvider, Location};
use error_location::ErrorLocation;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

/// Reads a track file: one `lat,lon` per line, blank lines and `#`
/// comments skipped.
#[track_caller]
#[instrument]
pub fn load_track(path: &Path) -> AppResult<Vec<Location>> {
    let contents = fs::read_to_string(path).map_err(|e| AppError::ReplayError {
        reason: format!("Failed to read {:?}: {}", path, e),
        location: ErrorLocation::from(CallerLocation::caller()),
    })?;

    parse_track(&contents)
}

/// Parses track text; errors name the offending line.
#[track_caller]
pub fn parse_track(contents: &str) -> AppResult<Vec<Location>> {
    let mut track = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parsed = line.split_once(',').and_then(|(lat, lon)| {
            let latitude = lat.trim().parse::<f64>().ok()?;
            let longitude = lon.trim().parse::<f64>().ok()?;
            Some((latitude, longitude))
        });

        let Some((latitude, longitude)) = parsed else {
            return Err(AppError::ReplayError {
                reason: format!("line {}: expected 'lat,lon', got '{}'", index + 1, line),
                location: ErrorLocation::from(CallerLocation::caller()),
            });
        };

        let location = Location::new(latitude, longitude).map_err(|e| AppError::ReplayError {
            reason: format!("line {}: {}", index + 1, e),
            location: ErrorLocation::from(CallerLocation::caller()),
        })?;

        track.push(location);
    }

    if track.is_empty() {
        return Err(AppError::ReplayError {
            reason: "track has no positions".to_string(),
            location: ErrorLocation::from(CallerLocation::caller()),
        });
    }

    Ok(track)
}

/// Publishes `track` one position per `interval` on a spawned task.
pub fn spawn_replay(
    provider: ChannelLocationProvider,
    track: Vec<Location>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let total = track.len();
        info!(total, interval_ms = interval.as_millis(), "Replay started");

        for (index, location) in track.into_iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(interval).await;
            }
            provider.publish(location);
            debug!(index, "Replayed position");
        }

        info!(total, "Replay finished");
    })
}
