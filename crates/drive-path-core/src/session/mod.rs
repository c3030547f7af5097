mod recording_session;
mod recording_state;
mod session_event;

pub use {
    recording_session::RecordingSession, recording_state::RecordingState,
    session_event::SessionEvent,
};
