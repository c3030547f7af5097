use crate::model::{Path, Pin};

/// What a recording toggle produced.
#[derive(Debug, Clone)]
pub enum ToggleOutcome {
    /// Recording began; the start pin is persisted.
    Started {
        /// Pin at the first sampled position.
        start_pin: Pin,
    },
    /// Recording finished; path and end pin are persisted.
    Stopped {
        /// The recorded path.
        path: Path,
        /// Pin at the last sampled position.
        end_pin: Pin,
    },
    /// The toggle had no effect (preview mode).
    Ignored,
}
