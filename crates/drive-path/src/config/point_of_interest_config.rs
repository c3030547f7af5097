use drive_path_core::{CoreResult, Location, PinMarker};
use serde::{Deserialize, Serialize};

/// A static point of interest seeded into the store on startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointOfInterestConfig {
    /// Pin name; seeding skips names that already exist.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Hex pin color.
    pub color: String,
}

impl PointOfInterestConfig {
    /// Validated location of the point.
    pub fn location(&self) -> CoreResult<Location> {
        Location::new(self.latitude, self.longitude)
    }

    /// Bare color marker for the pin.
    pub fn marker(&self) -> PinMarker {
        PinMarker::Color(self.color.clone())
    }
}
