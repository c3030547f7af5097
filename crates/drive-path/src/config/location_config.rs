use crate::config::{default_pump_interval_ms, default_replay_interval_ms};

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Location feed configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Delay between replayed positions, in milliseconds.
    #[serde(default = "default_replay_interval_ms")]
    pub replay_interval_ms: u64,
    /// How often pending updates are drained into the recording, in milliseconds.
    #[serde(default = "default_pump_interval_ms")]
    pub pump_interval_ms: u64,
}

impl LocationConfig {
    /// Replay delay as a [`Duration`].
    pub fn replay_interval(&self) -> Duration {
        Duration::from_millis(self.replay_interval_ms)
    }

    /// Pump period as a [`Duration`].
    pub fn pump_interval(&self) -> Duration {
        Duration::from_millis(self.pump_interval_ms)
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            replay_interval_ms: default_replay_interval_ms(),
            pump_interval_ms: default_pump_interval_ms(),
        }
    }
}
