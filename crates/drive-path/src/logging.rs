//! Tracing subscriber setup.

use crate::config::LoggingConfig;

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "drive-path.log";

/// Installs the global subscriber: human-readable stderr output plus an
/// optional daily-rolling JSON file under `log_dir`.
///
/// `RUST_LOG` overrides the configured filter. The returned guard flushes
/// the file writer on drop and must live as long as the program.
pub fn init(config: &LoggingConfig, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let (file_layer, guard) = match log_dir {
        Some(dir) if config.file => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().json().with_writer(writer)),
                Some(guard),
            )
        }
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}
