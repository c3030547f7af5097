//! Drive-Path: record driven routes as map paths from a console toggle.

mod app;
mod app_command;
mod config;
mod console_handler;
mod direct_router;
mod error;
mod logging;
mod render;
mod replay;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    console_handler::ConsoleHandler,
    direct_router::DirectRouter,
    error::{AppError, Result as AppResult},
};

use crate::config::{Config, PointOfInterestConfig};

use drive_path_core::{
    ChannelLocationProvider, JsonFileStore, MemoryStore, PersistentStore, PreviewTracker,
    TrackRecorder, Tracker,
};
use tokio::sync::{mpsc, watch};
use tracing::{error, info, warn};

/// Application entry point.
fn main() {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let log_dir = match Config::log_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            eprintln!("File logging disabled: {}", e);
            None
        }
    };
    // Dropping the guard flushes the file writer, so it lives until exit.
    let _log_guard = logging::init(&config.logging, log_dir.as_deref());

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {:?}", e);
        std::process::exit(1);
    }

    let provider = ChannelLocationProvider::new();

    let recorder = match build_recorder(&config, &provider) {
        Ok(r) => r,
        Err(e) => {
            error!("Failed to create recorder: {:?}", e);
            std::process::exit(1);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    rt.block_on(async {
        let (command_tx, command_rx) = mpsc::channel(32);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let console_handler = ConsoleHandler::new(command_tx);
        let app = App::new(recorder, provider, config, command_rx, shutdown_tx);

        tokio::join!(
            async {
                if let Err(e) = console_handler.run(shutdown_rx).await {
                    error!(error = ?e, "Console handler error");
                }
            },
            async {
                if let Err(e) = app.run().await {
                    error!(error = ?e, "App error");
                }
            }
        );
    });

    // The stdin forwarder may still be parked in a blocking read.
    rt.shutdown_background();
}

/// Build the recorder selected by `behavior.preview`.
///
/// An unreadable store is not fatal: the session falls back to an
/// in-memory store and nothing is persisted.
fn build_recorder(
    config: &Config,
    provider: &ChannelLocationProvider,
) -> AppResult<Box<dyn TrackRecorder + Send>> {
    let marker_style = config.behavior.marker_style;

    if config.behavior.preview {
        info!("Preview mode, serving demo data");
        return Ok(Box::new(PreviewTracker::new()?));
    }

    match JsonFileStore::open(&config.store.path) {
        Ok(store) => {
            let tracker = Tracker::new(provider.clone(), store, marker_style);
            Ok(Box::new(prepare(tracker, &config.points_of_interest)))
        }
        Err(e) => {
            error!(
                error = %e,
                store_path = ?config.store.path,
                "Store unreadable, continuing with an unsaved in-memory session"
            );
            let tracker = Tracker::new(provider.clone(), MemoryStore::new(), marker_style);
            Ok(Box::new(prepare(tracker, &config.points_of_interest)))
        }
    }
}

/// Load persisted collections and seed configured points of interest.
fn prepare<S: PersistentStore>(
    mut tracker: Tracker<ChannelLocationProvider, S>,
    points_of_interest: &[PointOfInterestConfig],
) -> Tracker<ChannelLocationProvider, S> {
    if let Err(e) = tracker.load() {
        error!(error = %e, "Failed to load pins and paths, starting empty");
    }

    seed_points_of_interest(&mut tracker, points_of_interest);

    tracker
}

/// Adds each configured point of interest whose name is not yet a pin.
pub(crate) fn seed_points_of_interest<S: PersistentStore>(
    tracker: &mut Tracker<ChannelLocationProvider, S>,
    points_of_interest: &[PointOfInterestConfig],
) -> usize {
    let mut seeded = 0;

    for poi in points_of_interest {
        let exists = tracker
            .path_store()
            .pins()
            .iter()
            .any(|pin| pin.name() == poi.name);
        if exists {
            continue;
        }

        let result = poi.location().and_then(|location| {
            tracker
                .path_store_mut()
                .add_point_of_interest(poi.name.clone(), location, poi.marker())
        });

        match result {
            Ok(_) => seeded += 1,
            Err(e) => warn!(name = %poi.name, error = %e, "Point of interest not seeded"),
        }
    }

    if seeded > 0 {
        info!(seeded, "Points of interest seeded");
    }

    seeded
}
