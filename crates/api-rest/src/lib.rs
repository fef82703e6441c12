//! # API REST
//!
//! REST API implementation for the notes service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, status codes, CORS, request tracing)
//!
//! Uses `api-shared` for the wire types and `notes-core` for the note operations.

#![warn(rust_2018_idioms)]

mod error;
pub mod handlers;

pub use error::ApiError;

use api_shared::{
    CreateNoteRes, ErrorRes, HealthRes, ListNotesRes, MessageRes, NoteReq, NoteRes,
};
use axum::routing::{get, put};
use axum::Router;
use notes_core::NoteService;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use handlers::{create_note, delete_note, health, list_notes, update_note};

/// Application state shared across REST API handlers
///
/// Holds the `NoteService` built at startup; cloning shares the same store handle.
#[derive(Clone)]
pub struct AppState {
    pub note_service: NoteService,
}

impl AppState {
    pub fn new(note_service: NoteService) -> Self {
        Self { note_service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::list_notes,
        handlers::create_note,
        handlers::update_note,
        handlers::delete_note,
    ),
    components(schemas(
        HealthRes,
        NoteReq,
        NoteRes,
        ListNotesRes,
        CreateNoteRes,
        MessageRes,
        ErrorRes,
    ))
)]
pub struct ApiDoc;

/// Build the REST router with all note routes, Swagger UI, CORS and tracing layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/:id", put(update_note).delete(delete_note))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
