use crate::config::{default_marker_style, default_preview};

use drive_path_core::MarkerStyle;
use serde::{Deserialize, Serialize};

/// Application behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Marker design for new recording pins (`tag` or `color`).
    #[serde(default = "default_marker_style")]
    pub marker_style: MarkerStyle,
    /// Serve fixed demo data instead of recording.
    #[serde(default = "default_preview")]
    pub preview: bool,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            marker_style: default_marker_style(),
            preview: default_preview(),
        }
    }
}
