//! # API Shared
//!
//! Shared definitions for the notes API.
//!
//! Contains:
//! - Request/response bodies for every endpoint (`notes` module), with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest`; kept separate so other front ends can reuse the wire types.

pub mod health;
pub mod notes;

pub use health::{HealthRes, HealthService};
pub use notes::*;
