//! Request and response bodies for the `/api/notes` endpoints.
//!
//! Field names follow the persisted document layout (`_id`, `createdAt`, `updatedAt`) so a
//! note looks the same on the wire as it does in the collection.

use chrono::{DateTime, Utc};
use notes_core::{Note, NoteDraft};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NOTE_CREATED_MSG: &str = "Note created successfully";
pub const NOTE_UPDATED_MSG: &str = "Note has been updated successfully";
pub const NOTE_DELETED_MSG: &str = "note has been successfully Deleted!!";

/// Body of `POST /api/notes` and `PUT /api/notes/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteReq {
    pub title: String,
    pub content: String,
}

impl From<NoteReq> for NoteDraft {
    fn from(req: NoteReq) -> Self {
        NoteDraft::new(req.title, req.content)
    }
}

/// A stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteRes {
    /// Store-assigned identifier (24 hex characters)
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<Note> for NoteRes {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListNotesRes {
    pub notes: Vec<NoteRes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteRes {
    pub msg: String,
    pub id: String,
}

/// Confirmation returned by update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    pub msg: String,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_res_uses_document_field_names() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        let res = NoteRes::from(Note {
            id: "507f1f77bcf86cd799439011".into(),
            title: "a".into(),
            content: "b".into(),
            created_at: at,
            updated_at: at,
        });

        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["_id"], "507f1f77bcf86cd799439011");
        assert_eq!(json["title"], "a");
        assert_eq!(json["createdAt"], json["updatedAt"]);
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_note_req_requires_both_fields() {
        assert!(serde_json::from_str::<NoteReq>(r#"{"title":"a"}"#).is_err());
        assert!(serde_json::from_str::<NoteReq>(r#"{"title":"a","content":1}"#).is_err());

        let req: NoteReq = serde_json::from_str(r#"{"title":"a","content":""}"#).unwrap();
        assert_eq!(NoteDraft::from(req), NoteDraft::new("a", ""));
    }
}
