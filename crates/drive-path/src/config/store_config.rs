use serde::{Deserialize, Serialize};

use std::path::PathBuf;

/// Persistent store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON document holding pins and paths.
    pub path: PathBuf,
}
