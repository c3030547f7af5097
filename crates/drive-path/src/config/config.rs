//! Configuration management for drive-path.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths, validation, and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{
        BehaviourConfig, LocationConfig, LoggingConfig, PointOfInterestConfig, RoutingConfig,
        STORE_FILE_NAME, StoreConfig,
    },
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use drive_path_core::Rgba;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_DIR_NAME: &str = "logs";

/// Main configuration struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Persistent store settings.
    pub store: StoreConfig,
    /// Application behavior settings.
    #[serde(default)]
    pub behavior: BehaviourConfig,
    /// Route enrichment settings.
    #[serde(default)]
    pub routing: RoutingConfig,
    /// Location feed settings.
    #[serde(default)]
    pub location: LocationConfig,
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Points of interest seeded on startup.
    #[serde(default)]
    pub points_of_interest: Vec<PointOfInterestConfig>,
}

impl Config {
    /// Load configuration from the platform config directory, creating a
    /// default one if not found.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let proj_dirs = Self::project_dirs()?;
        let config_path = Self::config_path(&proj_dirs)?;

        Self::load_from(&config_path, proj_dirs.data_dir())
    }

    /// Load configuration from `config_path`. A missing file is replaced by
    /// defaults that keep the store under `data_dir`.
    #[track_caller]
    #[instrument]
    pub fn load_from(config_path: &Path, data_dir: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            info!("No config found, creating default");
            return Self::create_default(config_path, data_dir);
        }

        let contents = fs::read_to_string(config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration loaded");

        Ok(config)
    }

    /// Check values the TOML schema cannot express.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn validate(&self) -> AppResult<()> {
        let routing = &self.routing;
        if !(routing.average_speed_kmh.is_finite() && routing.average_speed_kmh > 0.0) {
            return Err(AppError::ConfigError {
                reason: format!(
                    "routing.average_speed_kmh must be positive, got {}",
                    routing.average_speed_kmh
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if !(routing.step_km.is_finite() && routing.step_km > 0.0) {
            return Err(AppError::ConfigError {
                reason: format!("routing.step_km must be positive, got {}", routing.step_km),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.location.pump_interval_ms == 0 {
            return Err(AppError::ConfigError {
                reason: "location.pump_interval_ms must be at least 1".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        for poi in &self.points_of_interest {
            poi.location()
                .and_then(|_| Rgba::from_hex(&poi.color))
                .map_err(|e| AppError::ConfigError {
                    reason: format!("Point of interest '{}' is invalid: {}", poi.name, e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        Ok(())
    }

    /// Save configuration to `config_path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Atomic write: write to temp file then rename
        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Directory for rolling log files.
    #[track_caller]
    pub fn log_dir() -> AppResult<PathBuf> {
        Ok(Self::project_dirs()?.data_dir().join(LOG_DIR_NAME))
    }

    /// Defaults with the store placed under `data_dir`.
    pub fn with_data_dir(data_dir: &Path) -> Self {
        Config {
            store: StoreConfig {
                path: data_dir.join(STORE_FILE_NAME),
            },
            behavior: BehaviourConfig::default(),
            routing: RoutingConfig::default(),
            location: LocationConfig::default(),
            logging: LoggingConfig::default(),
            points_of_interest: Vec::new(),
        }
    }

    #[track_caller]
    fn project_dirs() -> AppResult<ProjectDirs> {
        ProjectDirs::from("com", "drive-path", "Drive-Path").ok_or_else(|| AppError::ConfigError {
            reason: "Failed to get project directories".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn config_path(proj_dirs: &ProjectDirs) -> AppResult<PathBuf> {
        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join(CONFIG_FILE_NAME))
    }

    #[track_caller]
    fn create_default(config_path: &Path, data_dir: &Path) -> AppResult<Self> {
        let config = Self::with_data_dir(data_dir);

        config.save_to(config_path)?;

        info!(store_path = ?config.store.path, "Default config created");

        Ok(config)
    }
}
