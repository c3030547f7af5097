use crate::model::Location;

use std::time::Duration;

use uuid::Uuid;

/// Transition reported by [`crate::RecordingSession::toggle`].
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Recording began at `start`.
    Started {
        /// Session the event belongs to.
        session_id: Uuid,
        /// First sampled position.
        start: Location,
    },
    /// Recording finished.
    Stopped {
        /// Session the event belongs to.
        session_id: Uuid,
        /// Every sample in arrival order; first is the start, last the end.
        trace: Vec<Location>,
        /// Time spent recording.
        duration: Duration,
    },
}

impl SessionEvent {
    /// Session the event belongs to.
    pub fn session_id(&self) -> Uuid {
        match self {
            SessionEvent::Started { session_id, .. } | SessionEvent::Stopped { session_id, .. } => {
                *session_id
            }
        }
    }
}
