//! Durable storage for pins and paths.
//!
//! Inserts and deletes are staged and only become durable on [`save`],
//! which commits everything staged since the last save as one unit.
//!
//! [`save`]: PersistentStore::save

mod json_file_store;
mod memory_store;
mod store_document;

pub use {
    json_file_store::JsonFileStore, memory_store::MemoryStore, store_document::StoreDocument,
};

use crate::{
    CoreResult,
    model::{Path, PathId, Pin, PinId},
};

/// Storage backend contract. The store never assigns ids.
pub trait PersistentStore {
    /// Every committed pin, in insertion order.
    fn fetch_pins(&self) -> CoreResult<Vec<Pin>>;

    /// Every committed path, oldest first.
    fn fetch_paths(&self) -> CoreResult<Vec<Path>>;

    /// Stages a pin insert. Fails if the id is already present.
    fn insert_pin(&mut self, pin: &Pin) -> CoreResult<()>;

    /// Stages a path insert. Fails if the id is already present.
    fn insert_path(&mut self, path: &Path) -> CoreResult<()>;

    /// Stages a pin delete. Fails if the id is unknown.
    fn delete_pin(&mut self, id: PinId) -> CoreResult<()>;

    /// Stages a path delete. Fails if the id is unknown.
    fn delete_path(&mut self, id: PathId) -> CoreResult<()>;

    /// Commits staged changes. On failure the staged changes are dropped.
    fn save(&mut self) -> CoreResult<()>;

    /// Drops staged changes without committing.
    fn discard(&mut self);
}
