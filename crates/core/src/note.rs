//! The note entity.
//!
//! A [`Note`] is the only thing this service stores. Its identifier is assigned by the store at
//! creation and rendered as the 24-character hex form of a MongoDB ObjectId, whichever backend
//! produced it.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};

/// A stored note as returned by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The caller-supplied part of a note, used for both create and update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Parse an externally supplied identifier.
///
/// Returns `None` for anything that is not a well-formed ObjectId; such a value can never match
/// a stored note.
pub fn parse_note_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

/// The current time at the precision the store persists (milliseconds).
///
/// Both backends stamp notes with this so a value read back from MongoDB equals the value that
/// was written.
pub fn timestamp_now() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
