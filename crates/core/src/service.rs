//! Note operations exposed to the API layer and the CLI.

use crate::note::{parse_note_id, timestamp_now, Note, NoteDraft};
use crate::store::NoteStore;
use crate::{NoteError, NoteResult};

/// Thin gateway over a [`NoteStore`].
///
/// Stamps timestamps, parses identifiers, and turns "nothing matched" results into
/// [`NoteError::NotFound`]. Each method is exactly one store call.
#[derive(Clone, Debug)]
pub struct NoteService {
    store: NoteStore,
}

impl NoteService {
    pub fn new(store: impl Into<NoteStore>) -> Self {
        Self {
            store: store.into(),
        }
    }

    /// Lists every stored note. An empty collection yields an empty vector.
    pub async fn list_notes(&self) -> NoteResult<Vec<Note>> {
        let notes = self.store.list().await?;
        tracing::debug!(count = notes.len(), "listed notes");
        Ok(notes)
    }

    /// Creates a note and returns its store-assigned identifier.
    ///
    /// `createdAt` and `updatedAt` come from a single clock read, so they are equal.
    ///
    /// # Errors
    ///
    /// Any store failure is reported as [`NoteError::CreationFailed`].
    pub async fn create_note(&self, draft: NoteDraft) -> NoteResult<String> {
        let now = timestamp_now();
        let id = self.store.insert(draft, now).await.map_err(|e| match e {
            NoteError::CreationFailed(_) => e,
            other => NoteError::CreationFailed(other.to_string()),
        })?;
        tracing::debug!(%id, "created note");
        Ok(id)
    }

    /// Overwrites title and content of an existing note and refreshes `updatedAt`.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::NotFound`] if `id` is malformed or matches no note.
    pub async fn update_note(&self, id: &str, draft: NoteDraft) -> NoteResult<()> {
        let oid = parse_note_id(id).ok_or_else(|| NoteError::NotFound(id.to_string()))?;
        if !self.store.update(oid, draft, timestamp_now()).await? {
            return Err(NoteError::NotFound(id.to_string()));
        }
        tracing::debug!(%id, "updated note");
        Ok(())
    }

    /// Removes a note.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::NotFound`] if `id` is malformed or matches no note.
    pub async fn delete_note(&self, id: &str) -> NoteResult<()> {
        let oid = parse_note_id(id).ok_or_else(|| NoteError::NotFound(id.to_string()))?;
        if !self.store.delete(oid).await? {
            return Err(NoteError::NotFound(id.to_string()));
        }
        tracing::debug!(%id, "deleted note");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MongoConfig;
    use crate::store::{MemoryNoteStore, MongoNoteStore};
    use bson::oid::ObjectId;
    use std::time::Duration;

    fn test_service() -> NoteService {
        NoteService::new(MemoryNoteStore::new())
    }

    // Nothing listens on port 1, so every operation fails after server selection times out.
    async fn unreachable_service() -> NoteService {
        let cfg = MongoConfig::new(
            Some("mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200".into()),
            Some("notes".into()),
            Some("notes".into()),
        )
        .expect("mongo config should be valid");
        let store = MongoNoteStore::connect(&cfg)
            .await
            .expect("connection string should parse");
        NoteService::new(store)
    }

    #[tokio::test]
    async fn test_list_empty_store_returns_empty_vec() {
        let service = test_service();
        assert!(service.list_notes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_then_list_includes_note_with_equal_timestamps() {
        let service = test_service();
        let id = service
            .create_note(NoteDraft::new("a", "b"))
            .await
            .expect("create should succeed");

        let notes = service.list_notes().await.unwrap();
        assert_eq!(notes.len(), 1);
        let note = &notes[0];
        assert_eq!(note.id, id);
        assert_eq!(note.title, "a");
        assert_eq!(note.content, "b");
        assert_eq!(note.created_at, note.updated_at);
    }

    #[tokio::test]
    async fn test_create_accepts_empty_strings() {
        let service = test_service();
        service.create_note(NoteDraft::new("", "")).await.unwrap();
        assert_eq!(service.list_notes().await.unwrap()[0].title, "");
    }

    #[tokio::test]
    async fn test_update_changes_fields_and_advances_updated_at() {
        let service = test_service();
        let id = service.create_note(NoteDraft::new("a", "b")).await.unwrap();
        let before = service.list_notes().await.unwrap().remove(0);

        tokio::time::sleep(Duration::from_millis(5)).await;
        service
            .update_note(&id, NoteDraft::new("a2", "b2"))
            .await
            .expect("update should succeed");

        let after = service.list_notes().await.unwrap().remove(0);
        assert_eq!(after.id, before.id);
        assert_eq!(after.title, "a2");
        assert_eq!(after.content, "b2");
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
    }

    #[tokio::test]
    async fn test_update_with_identical_fields_still_succeeds() {
        let service = test_service();
        let id = service.create_note(NoteDraft::new("a", "b")).await.unwrap();
        service.update_note(&id, NoteDraft::new("a", "b")).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_missing_note_is_not_found() {
        let service = test_service();
        let err = service
            .update_note(&ObjectId::new().to_hex(), NoteDraft::new("a", "b"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_malformed_id_is_not_found() {
        let service = test_service();
        let err = service
            .update_note("not-an-object-id", NoteDraft::new("a", "b"))
            .await
            .unwrap_err();
        assert!(matches!(err, NoteError::NotFound(ref id) if id == "not-an-object-id"));
    }

    #[tokio::test]
    async fn test_delete_removes_note_from_list() {
        let service = test_service();
        let id = service.create_note(NoteDraft::new("a", "b")).await.unwrap();
        let other = service.create_note(NoteDraft::new("c", "d")).await.unwrap();

        service.delete_note(&id).await.expect("delete should succeed");

        let notes = service.list_notes().await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, other);
    }

    #[tokio::test]
    async fn test_delete_missing_note_is_not_found() {
        let service = test_service();
        let id = service.create_note(NoteDraft::new("a", "b")).await.unwrap();
        service.delete_note(&id).await.unwrap();

        let err = service.delete_note(&id).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(service.delete_note("zzz").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_create_on_unreachable_store_is_creation_failed() {
        let service = unreachable_service().await;
        let err = service
            .create_note(NoteDraft::new("a", "b"))
            .await
            .expect_err("create should fail without a server");
        assert!(matches!(err, NoteError::CreationFailed(_)));
    }

    #[tokio::test]
    async fn test_update_on_unreachable_store_is_not_not_found() {
        let service = unreachable_service().await;
        let err = service
            .update_note(&ObjectId::new().to_hex(), NoteDraft::new("a", "b"))
            .await
            .expect_err("update should fail without a server");
        assert!(matches!(err, NoteError::Database(_)));
        assert!(!err.is_not_found());
    }
}
