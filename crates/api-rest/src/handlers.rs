//! Request handlers for `/health` and `/api/notes`.
//!
//! Each handler makes exactly one `NoteService` call and translates the result. Underlying
//! errors are logged here and replaced by a fixed public message.

use api_shared::{
    CreateNoteRes, ErrorRes, HealthRes, HealthService, ListNotesRes, MessageRes, NoteReq, NoteRes,
    NOTE_CREATED_MSG, NOTE_DELETED_MSG, NOTE_UPDATED_MSG,
};
use axum::extract::{Path, State};
use axum::response::Json;
use notes_core::NoteError;

use crate::{ApiError, AppState};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks; does not touch the store.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/notes",
    responses(
        (status = 200, description = "All stored notes", body = ListNotesRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// List every note in the collection
///
/// No ordering or pagination; an empty collection returns `{"notes": []}`.
///
/// # Errors
/// Returns `500 Internal Server Error` if the store cannot be read.
#[axum::debug_handler]
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<ListNotesRes>, ApiError> {
    match state.note_service.list_notes().await {
        Ok(notes) => Ok(Json(ListNotesRes {
            notes: notes.into_iter().map(NoteRes::from).collect(),
        })),
        Err(e) => {
            tracing::error!("List notes error: {:?}", e);
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = NoteReq,
    responses(
        (status = 200, description = "Note created", body = CreateNoteRes),
        (status = 400, description = "Note creation failed", body = ErrorRes),
        (status = 422, description = "Malformed request body")
    )
)]
/// Create a note
///
/// The store assigns the identifier; `createdAt` and `updatedAt` are both set to now.
///
/// # Errors
/// Returns `400 Bad Request` if the store rejects the insert.
#[axum::debug_handler]
pub async fn create_note(
    State(state): State<AppState>,
    Json(req): Json<NoteReq>,
) -> Result<Json<CreateNoteRes>, ApiError> {
    match state.note_service.create_note(req.into()).await {
        Ok(id) => Ok(Json(CreateNoteRes {
            msg: NOTE_CREATED_MSG.into(),
            id,
        })),
        Err(e) => {
            tracing::error!("Create note error: {:?}", e);
            Err(ApiError::BadRequest("Note creation failed"))
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    params(("id" = String, Path, description = "Note identifier")),
    request_body = NoteReq,
    responses(
        (status = 200, description = "Note updated", body = MessageRes),
        (status = 404, description = "Note not found", body = ErrorRes),
        (status = 422, description = "Malformed request body"),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Overwrite a note's title and content
///
/// # Errors
/// Returns `404 Not Found` if no note has the given identifier.
#[axum::debug_handler]
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<NoteReq>,
) -> Result<Json<MessageRes>, ApiError> {
    match state.note_service.update_note(&id, req.into()).await {
        Ok(()) => Ok(Json(MessageRes {
            msg: NOTE_UPDATED_MSG.into(),
        })),
        Err(NoteError::NotFound(_)) => {
            tracing::warn!("Update note: no note with id {}", id);
            Err(ApiError::NotFound("Note not found"))
        }
        Err(e) => {
            tracing::error!("Update note error: {:?}", e);
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    params(("id" = String, Path, description = "Note identifier")),
    responses(
        (status = 200, description = "Note deleted", body = MessageRes),
        (status = 404, description = "Note not found", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Delete a note
///
/// # Errors
/// Returns `404 Not Found` if no note has the given identifier.
#[axum::debug_handler]
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageRes>, ApiError> {
    match state.note_service.delete_note(&id).await {
        Ok(()) => Ok(Json(MessageRes {
            msg: NOTE_DELETED_MSG.into(),
        })),
        Err(NoteError::NotFound(_)) => {
            tracing::warn!("Delete note: no note with id {}", id);
            Err(ApiError::NotFound("Note not found!"))
        }
        Err(e) => {
            tracing::error!("Delete note error: {:?}", e);
            Err(ApiError::Internal)
        }
    }
}
