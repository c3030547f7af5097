use crate::{
    CoreResult,
    model::{Path, PathId, Pin, PinId},
    store::{PersistentStore, StoreDocument},
};

/// Store that keeps its committed document in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    committed: StoreDocument,
    staged: StoreDocument,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose committed contents are `document`.
    pub fn with_document(document: StoreDocument) -> Self {
        Self {
            staged: document.clone(),
            committed: document,
        }
    }

    /// Committed contents.
    pub fn document(&self) -> &StoreDocument {
        &self.committed
    }
}

impl PersistentStore for MemoryStore {
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

    fn save(&mut self) -> CoreResult<()> {
        self.committed = self.staged.clone();
        Ok(())
    }

    fn discard(&mut self) {
        self.staged = self.committed.clone();
    }
}
