//! Console command handler.
//!
//! Reads commands from stdin on a blocking task, parses them, and forwards
//! them to the main application over an async channel.

use crate::{AppCommand, AppError, AppResult};

use std::{io::BufRead, panic::Location, path::PathBuf, time::Duration};

use error_location::ErrorLocation;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

/// Command reference printed by `help` and after a malformed line.
pub const USAGE: &str = "\
commands:
  toggle                        start or stop recording
  goto <lat> <lon>              publish a position fix
  undo                          remove the latest path and its pins
  list                          show pins and paths
  plan [name] <lat,lon> ...     create a planned path (two or more waypoints)
  route                         fill empty traces with straight-line routes
  replay <file>                 publish positions from a track file
  help                          show this text
  quit                          exit";

/// Stdin command reader.
pub struct ConsoleHandler {
    command_tx: mpsc::Sender<AppCommand>,
}

impl ConsoleHandler {
    /// Create a handler that forwards parsed commands to `command_tx`.
    pub fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self { command_tx }
    }

    /// Run the console event loop.
    ///
    /// Returns on shutdown signal, on `quit`, or when stdin closes. The last
    /// two also send [`AppCommand::Shutdown`] to the app.
    #[instrument(skip(self))]
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let (line_tx, mut line_rx) = mpsc::channel::<String>(32);

        // Stdin has no async read in std; one blocking task forwards lines.
        // It exits on EOF or once line_rx is dropped.
        let handle = tokio::task::spawn_blocking(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if line_tx.blocking_send(line).is_err() {
                    break;
                }
            }
        });

        println!("{}", USAGE);

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Console handler shutting down");
                    break;
                }
                line = line_rx.recv() => {
                    let Some(line) = line else {
                        info!("Stdin closed");
                        self.send(AppCommand::Shutdown).await?;
                        break;
                    };

                    match Self::parse_line(&line) {
                        Ok(None) => {}
                        Ok(Some(AppCommand::Shutdown)) => {
                            self.send(AppCommand::Shutdown).await?;
                            break;
                        }
                        Ok(Some(cmd)) => self.send(cmd).await?,
                        Err(e) => {
                            warn!(error = %e, line = %line, "Rejected console input");
                            println!("{}", USAGE);
                        }
                    }
                }
            }
        }

        drop(line_rx);

        // The blocking task may be parked in read_line until the next line.
        match tokio::time::timeout(Duration::from_millis(100), handle).await {
            Ok(Ok(())) => debug!("Stdin forwarder stopped cleanly"),
            Ok(Err(e)) => warn!(error = ?e, "Stdin forwarder task panicked"),
            Err(_) => debug!("Stdin forwarder still blocked, will be cleaned up on exit"),
        }

        Ok(())
    }

    /// Parse one console line. Blank lines and `help` yield `None`.
    #[track_caller]
    pub fn parse_line(line: &str) -> AppResult<Option<AppCommand>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let cmd = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("toggle" | "t", []) => AppCommand::Toggle,
            ("goto" | "g", [latitude, longitude]) => AppCommand::Goto {
                latitude: Self::parse_number(latitude)?,
                longitude: Self::parse_number(longitude)?,
            },
            ("undo" | "u", []) => AppCommand::Undo,
            ("list" | "ls", []) => AppCommand::List,
            ("plan", args) => Self::parse_plan(args)?,
            ("route", []) => AppCommand::Route,
            ("replay", [path]) => AppCommand::Replay {
                path: PathBuf::from(*path),
            },
            ("help" | "?", []) => {
                println!("{}", USAGE);
                return Ok(None);
            }
            ("quit" | "exit" | "q", []) => AppCommand::Shutdown,
            (verb, _) => {
                return Err(AppError::InvalidCommand {
                    reason: format!("unknown command or wrong arguments: '{}'", verb),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        Ok(Some(cmd))
    }

    /// Parse a `lat,lon` pair.
    #[track_caller]
    pub fn parse_pair(text: &str) -> AppResult<(f64, f64)> {
        let Some((latitude, longitude)) = text.split_once(',') else {
            return Err(AppError::InvalidCommand {
                reason: format!("expected 'lat,lon', got '{}'", text),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        Ok((
            Self::parse_number(latitude.trim())?,
            Self::parse_number(longitude.trim())?,
        ))
    }

    #[track_caller]
    fn parse_plan(args: &[&str]) -> AppResult<AppCommand> {
        let (name, pairs) = match args {
            [first, rest @ ..] if !first.contains(',') => (Some(first.to_string()), rest),
            _ => (None, args),
        };

        if pairs.len() < 2 {
            return Err(AppError::InvalidCommand {
                reason: format!("plan needs at least two waypoints, got {}", pairs.len()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let waypoints = pairs
            .iter()
            .map(|pair| Self::parse_pair(pair))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(AppCommand::Plan { name, waypoints })
    }

    #[track_caller]
    fn parse_number(text: &str) -> AppResult<f64> {
        text.parse::<f64>().map_err(|e| AppError::InvalidCommand {
            reason: format!("'{}' is not a number: {}", text, e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub(crate) async fn send(&self, cmd: AppCommand) -> AppResult<()> {
        self.command_tx
            .send(cmd)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send console command: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
