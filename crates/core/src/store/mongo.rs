//! MongoDB-backed note store.
//!
//! Every operation is a single driver call against the configured collection. Connection
//! pooling, server selection and timeouts are left to the driver defaults.

use bson::oid::ObjectId;
use bson::{doc, Bson, Document};
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

use crate::config::MongoConfig;
use crate::constants::{CONTENT_FIELD, ID_FIELD, TITLE_FIELD, UPDATED_AT_FIELD};
use crate::note::{Note, NoteDraft};
use crate::{NoteError, NoteResult};

/// Persisted layout of a note document.
#[derive(Debug, Serialize, Deserialize)]
struct NoteDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    title: String,
    content: String,
    #[serde(
        rename = "createdAt",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    created_at: DateTime<Utc>,
    #[serde(
        rename = "updatedAt",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    updated_at: DateTime<Utc>,
}

impl From<NoteDocument> for Note {
    fn from(doc: NoteDocument) -> Self {
        Note {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            title: doc.title,
            content: doc.content,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MongoNoteStore {
    database: Database,
    collection: Collection<NoteDocument>,
}

impl MongoNoteStore {
    /// Build a store from the configured connection string, database and collection.
    ///
    /// The driver connects lazily, so this only fails on an unparsable connection string. Use
    /// [`MongoNoteStore::ping`] to check the server is reachable.
    pub async fn connect(cfg: &MongoConfig) -> NoteResult<Self> {
        let client = Client::with_uri_str(cfg.uri()).await?;
        let database = client.database(cfg.database());
        let collection = database.collection::<NoteDocument>(cfg.collection());
        Ok(Self {
            database,
            collection,
        })
    }

    /// Round-trip a `ping` command to the server.
    pub async fn ping(&self) -> NoteResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub async fn list(&self) -> NoteResult<Vec<Note>> {
        let cursor = self.collection.find(Document::new()).await?;
        let documents: Vec<NoteDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Note::from).collect())
    }

    pub async fn insert(&self, draft: NoteDraft, at: DateTime<Utc>) -> NoteResult<String> {
        let document = NoteDocument {
            id: None,
            title: draft.title,
            content: draft.content,
            created_at: at,
            updated_at: at,
        };
        let result = self.collection.insert_one(&document).await?;
        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(oid.to_hex()),
            other => Err(NoteError::CreationFailed(format!(
                "store returned a non-ObjectId identifier: {other}"
            ))),
        }
    }

    /// Returns `false` when no document matched `id`.
    pub async fn update(
        &self,
        id: ObjectId,
        draft: NoteDraft,
        at: DateTime<Utc>,
    ) -> NoteResult<bool> {
        let result = self
            .collection
            .update_one(id_filter(id), update_modifications(draft, at))
            .await?;
        Ok(result.matched_count > 0)
    }

    /// Returns `false` when no document matched `id`.
    pub async fn delete(&self, id: ObjectId) -> NoteResult<bool> {
        let result = self.collection.delete_one(id_filter(id)).await?;
        Ok(result.deleted_count > 0)
    }
}

fn id_filter(id: ObjectId) -> Document {
    let mut filter = Document::new();
    filter.insert(ID_FIELD, id);
    filter
}

// `$max` keeps updatedAt from moving backwards when clocks disagree.
fn update_modifications(draft: NoteDraft, at: DateTime<Utc>) -> Document {
    let mut set = Document::new();
    set.insert(TITLE_FIELD, draft.title);
    set.insert(CONTENT_FIELD, draft.content);

    let mut max = Document::new();
    max.insert(UPDATED_AT_FIELD, bson::DateTime::from_chrono(at));

    doc! { "$set": set, "$max": max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CREATED_AT_FIELD;
    use crate::note::timestamp_now;

    #[test]
    fn test_note_document_layout() {
        let oid = ObjectId::new();
        let at = timestamp_now();
        let document = NoteDocument {
            id: Some(oid),
            title: "a".into(),
            content: "b".into(),
            created_at: at,
            updated_at: at,
        };

        let bson_doc = bson::to_document(&document).unwrap();
        assert_eq!(bson_doc.get_object_id(ID_FIELD).unwrap(), oid);
        assert_eq!(bson_doc.get_str(TITLE_FIELD).unwrap(), "a");
        assert_eq!(bson_doc.get_str(CONTENT_FIELD).unwrap(), "b");
        assert_eq!(
            bson_doc.get_datetime(CREATED_AT_FIELD).unwrap().to_chrono(),
            at
        );
        assert!(bson_doc.get_datetime(UPDATED_AT_FIELD).is_ok());
    }

    #[test]
    fn test_new_document_omits_id() {
        let at = timestamp_now();
        let document = NoteDocument {
            id: None,
            title: "a".into(),
            content: "b".into(),
            created_at: at,
            updated_at: at,
        };

        let bson_doc = bson::to_document(&document).unwrap();
        assert!(!bson_doc.contains_key(ID_FIELD));
    }

    #[test]
    fn test_document_converts_to_note_with_hex_id() {
        let oid = ObjectId::new();
        let at = timestamp_now();
        let note = Note::from(NoteDocument {
            id: Some(oid),
            title: "t".into(),
            content: "c".into(),
            created_at: at,
            updated_at: at,
        });
        assert_eq!(note.id, oid.to_hex());
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn test_id_filter_targets_object_id() {
        let oid = ObjectId::new();
        assert_eq!(id_filter(oid), doc! { "_id": oid });
    }

    #[test]
    fn test_update_sets_fields_and_only_raises_updated_at() {
        let at = timestamp_now();
        let update = update_modifications(NoteDraft::new("t2", "c2"), at);

        assert_eq!(
            update,
            doc! {
                "$set": { "title": "t2", "content": "c2" },
                "$max": { "updatedAt": bson::DateTime::from_chrono(at) },
            }
        );
        let set = update.get_document("$set").unwrap();
        assert!(!set.contains_key(UPDATED_AT_FIELD));
        assert!(!set.contains_key(CREATED_AT_FIELD));
    }
}
