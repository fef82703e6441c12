//! Note store gateway.
//!
//! [`NoteStore`] is constructed once at startup from [`StoreConfig`] and cloned into whatever
//! needs it; clones share the same underlying connection pool (or in-memory vector).

mod memory;
mod mongo;

pub use memory::MemoryNoteStore;
pub use mongo::MongoNoteStore;

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};

use crate::config::{StoreBackend, StoreConfig};
use crate::note::{Note, NoteDraft};
use crate::NoteResult;

#[derive(Clone, Debug)]
pub enum NoteStore {
    Mongo(MongoNoteStore),
    Memory(MemoryNoteStore),
}

impl NoteStore {
    /// Construct the configured backend.
    pub async fn from_config(cfg: &StoreConfig) -> NoteResult<Self> {
        match cfg {
            StoreConfig::Mongo(mongo) => {
                Ok(NoteStore::Mongo(MongoNoteStore::connect(mongo).await?))
            }
            StoreConfig::Memory => Ok(NoteStore::Memory(MemoryNoteStore::new())),
        }
    }

    pub fn backend(&self) -> StoreBackend {
        match self {
            NoteStore::Mongo(_) => StoreBackend::Mongo,
            NoteStore::Memory(_) => StoreBackend::Memory,
        }
    }

    /// Check the backend is reachable. Always succeeds for the in-memory store.
    pub async fn ping(&self) -> NoteResult<()> {
        match self {
            NoteStore::Mongo(store) => store.ping().await,
            NoteStore::Memory(_) => Ok(()),
        }
    }

    pub async fn list(&self) -> NoteResult<Vec<Note>> {
        match self {
            NoteStore::Mongo(store) => store.list().await,
            NoteStore::Memory(store) => store.list().await,
        }
    }

    pub async fn insert(&self, draft: NoteDraft, at: DateTime<Utc>) -> NoteResult<String> {
        match self {
            NoteStore::Mongo(store) => store.insert(draft, at).await,
            NoteStore::Memory(store) => store.insert(draft, at).await,
        }
    }

    pub async fn update(
        &self,
        id: ObjectId,
        draft: NoteDraft,
        at: DateTime<Utc>,
    ) -> NoteResult<bool> {
        match self {
            NoteStore::Mongo(store) => store.update(id, draft, at).await,
            NoteStore::Memory(store) => store.update(id, draft, at).await,
        }
    }

    pub async fn delete(&self, id: ObjectId) -> NoteResult<bool> {
        match self {
            NoteStore::Mongo(store) => store.delete(id).await,
            NoteStore::Memory(store) => store.delete(id).await,
        }
    }
}

impl From<MemoryNoteStore> for NoteStore {
    fn from(store: MemoryNoteStore) -> Self {
        NoteStore::Memory(store)
    }
}

impl From<MongoNoteStore> for NoteStore {
    fn from(store: MongoNoteStore) -> Self {
        NoteStore::Mongo(store)
    }
}
