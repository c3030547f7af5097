mod behaviour_config;
#[allow(clippy::module_inception)]
mod config;
mod location_config;
mod logging_config;
mod point_of_interest_config;
mod routing_config;
mod store_config;

pub(crate) use {
    behaviour_config::BehaviourConfig, config::Config, location_config::LocationConfig,
    logging_config::LoggingConfig, point_of_interest_config::PointOfInterestConfig,
    routing_config::RoutingConfig, store_config::StoreConfig,
};

use drive_path_core::MarkerStyle;

pub(crate) const DEFAULT_PREVIEW: bool = false;
pub(crate) const DEFAULT_ROUTING_ENABLED: bool = true;
pub(crate) const DEFAULT_AVERAGE_SPEED_KMH: f64 = 40.0;
pub(crate) const DEFAULT_STEP_KM: f64 = 0.25;
pub(crate) const DEFAULT_REPLAY_INTERVAL_MS: u64 = 1000;
pub(crate) const DEFAULT_PUMP_INTERVAL_MS: u64 = 200;
pub(crate) const DEFAULT_LOG_FILTER: &str = "drive_path=info,drive_path_core=info";
pub(crate) const DEFAULT_LOG_TO_FILE: bool = true;
pub(crate) const STORE_FILE_NAME: &str = "paths.json";

pub(crate) fn default_marker_style() -> MarkerStyle {
    MarkerStyle::default()
}

pub(crate) fn default_preview() -> bool {
    DEFAULT_PREVIEW
}

pub(crate) fn default_routing_enabled() -> bool {
    DEFAULT_ROUTING_ENABLED
}

pub(crate) fn default_average_speed_kmh() -> f64 {
    DEFAULT_AVERAGE_SPEED_KMH
}

pub(crate) fn default_step_km() -> f64 {
    DEFAULT_STEP_KM
}

pub(crate) fn default_replay_interval_ms() -> u64 {
    DEFAULT_REPLAY_INTERVAL_MS
}

pub(crate) fn default_pump_interval_ms() -> u64 {
    DEFAULT_PUMP_INTERVAL_MS
}

pub(crate) fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

pub(crate) fn default_log_to_file() -> bool {
    DEFAULT_LOG_TO_FILE
}
