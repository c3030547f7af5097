//! JSON document store with atomic commits.

use crate::{
    CoreResult,
    model::{Path, PathId, Pin, PinId},
    store::{
        PersistentStore, StoreDocument,
        store_document::{STORE_VERSION, persistence},
    },
};

use std::{
    fs,
    io::Write,
    path::{Path as FsPath, PathBuf},
};

use tracing::{debug, info, instrument, warn};

/// Store persisted as a single JSON document on disk.
///
/// Staged changes live in memory until [`PersistentStore::save`], which
/// writes the whole document to a temporary file and renames it over the
/// previous one, so a crash mid-write never leaves a half-written store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    committed: StoreDocument,
    staged: StoreDocument,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TrackError::PersistenceFailure`] if the file cannot
    /// be read, is not a valid document (including out-of-range coordinates,
    /// paths with fewer than two waypoints and repeated ids), or has a newer
    /// schema version.
    #[track_caller]
    #[instrument(skip(path), fields(store_path = ?path.as_ref()))]
    pub fn open<P: AsRef<FsPath>>(path: P) -> CoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let committed = if path.exists() {
            let contents = fs::read_to_string(&path)
                .map_err(|e| persistence(format!("Failed to read store {:?}: {}", path, e)))?;

            let document: StoreDocument = serde_json::from_str(&contents)
                .map_err(|e| persistence(format!("Failed to parse store {:?}: {}", path, e)))?;

            if document.version > STORE_VERSION {
                return Err(persistence(format!(
                    "Store {:?} has unsupported version {}",
                    path, document.version
                )));
            }

            document.validate()?;

            info!(
                pin_count = document.pins.len(),
                path_count = document.paths.len(),
                "Store opened"
            );

            document
        } else {
            info!("No store found, starting empty");
            StoreDocument::default()
        };

        Ok(Self {
            path,
            staged: committed.clone(),
            committed,
        })
    }

    /// File backing this store.
    pub fn path(&self) -> &FsPath {
        &self.path
    }

    #[track_caller]
    fn write_atomic(&self, document: &StoreDocument) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    persistence(format!("Failed to create store directory {:?}: {}", parent, e))
                })?;
                debug!(store_dir = ?parent, "Created store directory");
            }
        }

        let contents = serde_json::to_string_pretty(document)
            .map_err(|e| persistence(format!("Failed to serialize store: {}", e)))?;

        // Atomic write: write to temp file then rename
        let temp_path = self.path.with_extension("json.tmp");

        let mut temp_file = fs::File::create(&temp_path)
            .map_err(|e| persistence(format!("Failed to create temp store file: {}", e)))?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| persistence(format!("Failed to write temp store file: {}", e)))?;

        temp_file
            .sync_all()
            .map_err(|e| persistence(format!("Failed to sync temp store file: {}", e)))?;

        fs::rename(&temp_path, &self.path)
            .map_err(|e| persistence(format!("Failed to rename temp store to final: {}", e)))?;

        Ok(())
    }
}

impl PersistentStore for JsonFileStore {
    fn fetch_pins(&self) -> CoreResult<Vec<Pin>> {
        Ok(self.committed.pins.clone())
    }

    fn fetch_paths(&self) -> CoreResult<Vec<Path>> {
        Ok(self.committed.paths_by_creation())
    }

    fn insert_pin(&mut self, pin: &Pin) -> CoreResult<()> {
        self.staged.insert_pin(pin)
    }

    fn insert_path(&mut self, path: &Path) -> CoreResult<()> {
        self.staged.insert_path(path)
    }

    fn delete_pin(&mut self, id: PinId) -> CoreResult<()> {
        self.staged.delete_pin(id)
    }

    fn delete_path(&mut self, id: PathId) -> CoreResult<()> {
        self.staged.delete_path(id)
    }

    #[instrument(skip(self), fields(path = ?self.path))]
    fn save(&mut self) -> CoreResult<()> {
        if let Err(e) = self.write_atomic(&self.staged) {
            warn!(error = %e, "Store commit failed, staged changes dropped");
            self.staged = self.committed.clone();
            return Err(e);
        }

        self.committed = self.staged.clone();

        debug!(
            pin_count = self.committed.pins.len(),
            path_count = self.committed.paths.len(),
            "Store committed (atomic write)"
        );

        Ok(())
    }

    fn discard(&mut self) {
        self.staged = self.committed.clone();
    }
}
