#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod console;
mod replay;

use crate::{App, AppCommand, config::Config};

use std::path::Path;

use drive_path_core::{ChannelLocationProvider, MarkerStyle, MemoryStore, Tracker};
use tokio::sync::{mpsc, watch};

/// App over an empty in-memory store, plus the ends of its channels.
pub(crate) fn test_app(
    config: Config,
) -> (App, mpsc::Sender<AppCommand>, watch::Receiver<bool>) {
    let provider = ChannelLocationProvider::new();
    let tracker = Tracker::new(provider.clone(), MemoryStore::new(), MarkerStyle::Tag);
    let (command_tx, command_rx) = mpsc::channel(8);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let app = App::new(Box::new(tracker), provider, config, command_rx, shutdown_tx);

    (app, command_tx, shutdown_rx)
}

/// Default config whose store would live under `/tmp`; tests never open it.
pub(crate) fn test_config() -> Config {
    Config::with_data_dir(Path::new("/tmp/drive-path-test"))
}
