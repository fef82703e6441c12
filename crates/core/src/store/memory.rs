//! Process-local note store.
//!
//! Mirrors the MongoDB backend's semantics (ObjectId identifiers, millisecond timestamps,
//! matched-count update/delete results) so the HTTP layer and tests can run without a server.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::note::{Note, NoteDraft};
use crate::NoteResult;

#[derive(Clone, Debug, Default)]
pub struct MemoryNoteStore {
    notes: Arc<RwLock<Vec<Note>>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> NoteResult<Vec<Note>> {
        Ok(self.notes.read().await.clone())
    }

    pub async fn insert(&self, draft: NoteDraft, at: DateTime<Utc>) -> NoteResult<String> {
        let id = ObjectId::new().to_hex();
        self.notes.write().await.push(Note {
            id: id.clone(),
            title: draft.title,
            content: draft.content,
            created_at: at,
            updated_at: at,
        });
        Ok(id)
    }

    /// Returns `false` when no note matched `id`.
    pub async fn update(
        &self,
        id: ObjectId,
        draft: NoteDraft,
        at: DateTime<Utc>,
    ) -> NoteResult<bool> {
        let key = id.to_hex();
        let mut notes = self.notes.write().await;
        let Some(note) = notes.iter_mut().find(|n| n.id == key) else {
            return Ok(false);
        };

        note.title = draft.title;
        note.content = draft.content;
        // updatedAt never moves backwards, even if the wall clock does.
        note.updated_at = at.max(note.updated_at);
        Ok(true)
    }

    /// Returns `false` when no note matched `id`.
    pub async fn delete(&self, id: ObjectId) -> NoteResult<bool> {
        let key = id.to_hex();
        let mut notes = self.notes.write().await;
        let before = notes.len();
        notes.retain(|n| n.id != key);
        Ok(notes.len() < before)
    }
}
