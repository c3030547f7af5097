//! Recording state machine.
//!
//! Toggles between idle and recording and buffers every position update
//! delivered while recording. The session persists nothing: transitions are
//! handed to the owner, and state only changes once the owner accepted them.

use crate::{
    CoreResult, TrackError,
    model::Location,
    session::{RecordingState, SessionEvent},
};

use std::{panic, sync::mpsc::Receiver, time::Instant};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Owns the recording flag and the in-progress coordinate buffer.
#[derive(Debug)]
pub struct RecordingSession {
    state: RecordingState,
    buffer: Vec<Location>,
}

impl RecordingSession {
    /// Creates an idle session with an empty buffer.
    pub fn new() -> Self {
        Self {
            state: RecordingState::Idle,
            buffer: Vec::new(),
        }
    }

    /// Current recording state.
    pub fn state(&self) -> RecordingState {
        self.state
    }

    /// Whether positions are currently being sampled.
    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecordingState::Recording { .. })
    }

    /// Samples buffered so far in this recording.
    pub fn buffer(&self) -> &[Location] {
        &self.buffer
    }

    /// Appends a position update if recording; returns whether it was kept.
    pub fn record_update(&mut self, location: Location) -> bool {
        if !self.is_recording() {
            return false;
        }
        self.buffer.push(location);
        true
    }

    /// Drains every pending update from `updates` in arrival order.
    ///
    /// Updates are discarded while idle. Returns how many were appended.
    pub fn drain_updates(&mut self, updates: &Receiver<Location>) -> usize {
        let mut appended = 0;
        for location in updates.try_iter() {
            if self.record_update(location) {
                appended += 1;
            }
        }

        if appended > 0 {
            debug!(
                appended,
                buffered = self.buffer.len(),
                "Buffered location updates"
            );
        }

        appended
    }

    /// Starts or stops recording at `position`.
    ///
    /// The resulting [`SessionEvent`] is passed to `handle` before any state
    /// changes, and whatever `handle` produces is returned. If `handle` fails the session is left exactly as it was:
    /// still idle for a failed start, still recording with the same buffer
    /// for a failed stop.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::PositionUnavailable`] when `position` is `None`,
    /// or whatever `handle` returned.
    #[track_caller]
    #[instrument(skip(self, handle))]
    pub fn toggle<T, F>(&mut self, position: Option<Location>, handle: F) -> CoreResult<T>
    where
        F: FnOnce(&SessionEvent) -> CoreResult<T>,
    {
        let Some(position) = position else {
            warn!(recording = self.is_recording(), "Toggle ignored, no position fix");
            return Err(TrackError::PositionUnavailable {
                location: ErrorLocation::from(panic::Location::caller()),
            });
        };

        match self.state {
            RecordingState::Idle => {
                let session_id = Uuid::new_v4();
                let event = SessionEvent::Started {
                    session_id,
                    start: position,
                };

                // Owner first -- if it fails, state remains Idle.
                let handled = handle(&event)?;

                self.buffer = vec![position];
                self.state = RecordingState::Recording {
                    started_at: Instant::now(),
                    session_id,
                };

                info!(session_id = %session_id, "Recording started");

                Ok(handled)
            }
            RecordingState::Recording {
                started_at,
                session_id,
            } => {
                let mut trace = self.buffer.clone();
                if trace.len() < 2 || trace.last() != Some(&position) {
                    trace.push(position);
                }

                let event = SessionEvent::Stopped {
                    session_id,
                    trace,
                    duration: started_at.elapsed(),
                };

                // Owner first -- if it fails, state remains Recording and
                // the buffer is untouched so the user can retry.
                let handled = handle(&event)?;

                let sample_count = self.buffer.len();
                self.buffer.clear();
                self.state = RecordingState::Idle;

                info!(
                    session_id = %session_id,
                    duration_ms = started_at.elapsed().as_millis(),
                    sample_count,
                    "Recording stopped"
                );

                Ok(handled)
            }
        }
    }
}

impl Default for RecordingSession {
    fn default() -> Self {
        Self::new()
    }
}
