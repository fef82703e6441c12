//! # Notes Core
//!
//! Core data operations for the notes service.
//!
//! This crate contains the note model and the store gateway:
//! - [`NoteService`] with list/create/update/delete, one store call each
//! - A MongoDB backend and an in-memory backend behind [`NoteStore`]
//! - Startup configuration parsing ([`config`])
//!
//! **No API concerns**: HTTP routing, request schemas and status codes belong in `api-rest` and
//! `api-shared`.

pub mod config;
pub mod constants;
pub mod error;
pub mod note;
pub mod service;
pub mod store;

pub use config::{CoreConfig, MongoConfig, StoreBackend, StoreConfig};
pub use constants::DEFAULT_REST_ADDR;
pub use error::{NoteError, NoteResult};
pub use note::{Note, NoteDraft};
pub use service::NoteService;
pub use store::{MemoryNoteStore, MongoNoteStore, NoteStore};
