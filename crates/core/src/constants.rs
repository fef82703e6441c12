//! Constants used throughout the notes core crate.
//!
//! Field names for the persisted document layout and defaults for runtime configuration live
//! here so the store backends and the API layer agree on them.

/// Default listen address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "127.0.0.1:8001";

/// Document field holding the store-assigned identifier.
pub const ID_FIELD: &str = "_id";

/// Document field holding the note title.
pub const TITLE_FIELD: &str = "title";

/// Document field holding the note body.
pub const CONTENT_FIELD: &str = "content";

/// Document field holding the creation timestamp.
pub const CREATED_AT_FIELD: &str = "createdAt";

/// Document field holding the last-update timestamp.
pub const UPDATED_AT_FIELD: &str = "updatedAt";
