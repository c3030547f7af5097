use crate::{
    AppCommand, AppResult, DirectRouter,
    config::Config,
    render::{render_location, render_path, render_pin, render_summary},
    replay::{load_track, spawn_replay},
};

use std::ops::ControlFlow;

use drive_path_core::{
    ChannelLocationProvider, CoreResult, Location, ToggleOutcome, TrackRecorder,
};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::MissedTickBehavior,
};
use tracing::{debug, error, info, instrument, trace};

/// Main application state.
///
/// Owns the recorder and serializes every transition on one task: console
/// commands and the periodic location pump never run concurrently.
pub struct App {
    pub(crate) recorder: Box<dyn TrackRecorder + Send>,
    pub(crate) provider: ChannelLocationProvider,
    pub(crate) router: DirectRouter,
    pub(crate) config: Config,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
    pub(crate) replay: Option<JoinHandle<()>>,
}

impl App {
    /// Assemble the app around an already loaded recorder.
    pub(crate) fn new(
        recorder: Box<dyn TrackRecorder + Send>,
        provider: ChannelLocationProvider,
        config: Config,
        command_rx: mpsc::Receiver<AppCommand>,
        shutdown_tx: watch::Sender<bool>,
    ) -> Self {
        let router = DirectRouter::new(config.routing.average_speed_kmh, config.routing.step_km);

        Self {
            recorder,
            provider,
            router,
            config,
            command_rx,
            shutdown_tx,
            replay: None,
        }
    }

    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Drive-Path starting");

        self.refresh_routes();

        let mut pump = tokio::time::interval(self.config.location.pump_interval());
        pump.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = pump.tick() => {
                    let drained = self.recorder.pump_updates();
                    if drained > 0 {
                        trace!(drained, "Location updates pumped");
                    }
                }

                cmd = self.command_rx.recv() => {
                    let Some(cmd) = cmd else {
                        info!("Command channel closed, shutting down");
                        break;
                    };

                    match self.handle_command(cmd) {
                        Ok(ControlFlow::Continue(())) => {}
                        Ok(ControlFlow::Break(())) => {
                            info!("Shutdown requested");
                            break;
                        }
                        Err(e) => {
                            error!(error = ?e, "Command failed");
                            println!("error: {}", e);
                        }
                    }
                }
            }
        }

        if let Some(handle) = self.replay.take() {
            handle.abort();
        }

        let _ = self.shutdown_tx.send(true);
        info!("Drive-Path shut down successfully");

        Ok(())
    }

    /// Apply one command to the recorder.
    #[instrument(skip(self))]
    pub(crate) fn handle_command(&mut self, cmd: AppCommand) -> AppResult<ControlFlow<()>> {
        match cmd {
            AppCommand::Toggle => self.toggle()?,
            AppCommand::Goto {
                latitude,
                longitude,
            } => {
                let position = Location::new(latitude, longitude)?;
                self.provider.publish(position);
                println!("position {}", render_location(&position));
            }
            AppCommand::Undo => {
                let path = self.recorder.remove_last()?;
                println!("removed {}", render_path(&path));
            }
            AppCommand::List => {
                let recording = self
                    .recorder
                    .is_recording()
                    .then(|| self.recorder.recording_trace());
                println!(
                    "{}",
                    render_summary(self.recorder.pins(), self.recorder.paths(), recording)
                );
            }
            AppCommand::Plan { name, waypoints } => {
                let waypoints = waypoints
                    .into_iter()
                    .map(|(latitude, longitude)| Location::new(latitude, longitude))
                    .collect::<CoreResult<Vec<_>>>()?;
                let path = self.recorder.plan_path(name, waypoints)?;
                println!("planned {}", render_path(&path));
                self.refresh_routes();
            }
            AppCommand::Route => {
                let enriched = self.recorder.enrich_routes(&self.router);
                println!("routed {} path(s)", enriched);
            }
            AppCommand::Replay { path } => {
                let track = load_track(&path)?;
                if let Some(previous) = self.replay.take() {
                    previous.abort();
                    debug!("Previous replay cancelled");
                }
                println!("replaying {} positions from {:?}", track.len(), path);
                self.replay = Some(spawn_replay(
                    self.provider.clone(),
                    track,
                    self.config.location.replay_interval(),
                ));
            }
            AppCommand::Shutdown => return Ok(ControlFlow::Break(())),
        }

        Ok(ControlFlow::Continue(()))
    }

    fn toggle(&mut self) -> AppResult<()> {
        match self.recorder.toggle_recording()? {
            ToggleOutcome::Started { start_pin } => {
                println!("recording started, {}", render_pin(&start_pin));
            }
            ToggleOutcome::Stopped { path, end_pin } => {
                println!("recorded {}", render_path(&path));
                println!("  end {}", render_pin(&end_pin));
                self.refresh_routes();
            }
            ToggleOutcome::Ignored => println!("preview mode: recording is disabled"),
        }

        Ok(())
    }

    /// Route paths with empty traces when automatic routing is on.
    fn refresh_routes(&mut self) {
        if !self.config.routing.enabled {
            return;
        }

        let enriched = self.recorder.enrich_routes(&self.router);
        if enriched > 0 {
            debug!(enriched, "Paths routed");
        }
    }
}
