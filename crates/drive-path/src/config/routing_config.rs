use crate::config::{default_average_speed_kmh, default_routing_enabled, default_step_km};

use serde::{Deserialize, Serialize};

/// Straight-line routing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Fill empty traces automatically whenever paths change.
    #[serde(default = "default_routing_enabled")]
    pub enabled: bool,
    /// Speed used to estimate travel time, in km/h.
    #[serde(default = "default_average_speed_kmh")]
    pub average_speed_kmh: f64,
    /// Distance between interpolated trace points, in km.
    #[serde(default = "default_step_km")]
    pub step_km: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            enabled: default_routing_enabled(),
            average_speed_kmh: default_average_speed_kmh(),
            step_km: default_step_km(),
        }
    }
}
