use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use utoipa::OpenApi;

use std::sync::Arc;

use crate::{
    dto::{CreateNoteRequest, ErrorResponse, NoteResponse, UpdateNoteRequest},
    service::{NoteService, NoteServiceError},
};

#[derive(OpenApi)]
#[openapi(
    paths(create_note, update_note, delete_note, get_one_note, get_all_notes),
    components(schemas(NoteResponse, CreateNoteRequest, UpdateNoteRequest, ErrorResponse)),
    tags(
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

fn handle_service_error(e: &NoteServiceError) -> Response {
    match e {
        NoteServiceError::IdSupplied(_) => {
            tracing::warn!("rejected note creation: {e}");
            error_response(StatusCode::BAD_REQUEST, "id must not be supplied")
        }
        NoteServiceError::NotFound(_) => {
            tracing::warn!("{e}");
            error_response(StatusCode::NOT_FOUND, "not found")
        }
    }
}

fn handle_body_rejection(rejection: &JsonRejection) -> Response {
    tracing::warn!("failed to parse request body: {rejection}");
    error_response(StatusCode::BAD_REQUEST, "Invalid request body")
}

/// Parses the `{id}` path segment. Segments that fail to decode or are not
/// integers are both reported as `Invalid ID`.
fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<i64, Response> {
    let Path(raw) = path.map_err(|rejection| {
        tracing::warn!("failed to extract note id: {rejection}");
        error_response(StatusCode::BAD_REQUEST, "Invalid ID")
    })?;

    raw.parse::<i64>().map_err(|e| {
        tracing::warn!("invalid note id '{raw}': {e}");
        error_response(StatusCode::BAD_REQUEST, "Invalid ID")
    })
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = NoteResponse),
        (status = 400, description = "Malformed body or client-supplied id", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return handle_body_rejection(&rejection),
    };

    match service.create_note(payload).await {
        Ok(note) => (StatusCode::CREATED, Json(note)).into_response(),
        Err(e) => handle_service_error(&e),
    }
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated successfully", body = NoteResponse),
        (status = 400, description = "Invalid ID or malformed body", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn update_note(
    State(service): State<Arc<NoteService>>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Response {
    let id = match parse_id(id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return handle_body_rejection(&rejection),
    };

    match service.update_note(id, payload).await {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(e) => handle_service_error(&e),
    }
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 204, description = "Note deleted successfully"),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(
    State(service): State<Arc<NoteService>>,
    id: Result<Path<String>, PathRejection>,
) -> Response {
    let id = match parse_id(id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match service.delete_note(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_service_error(&e),
    }
}

#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_one_note(
    State(service): State<Arc<NoteService>>,
    id: Result<Path<String>, PathRejection>,
) -> Response {
    let id = match parse_id(id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match service.get_one_note(id).await {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(e) => handle_service_error(&e),
    }
}

#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "List of all notes", body = Vec<NoteResponse>)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(State(service): State<Arc<NoteService>>) -> Response {
    (StatusCode::OK, Json(service.get_all_notes().await)).into_response()
}

#[debug_handler]
pub async fn openapi_json() -> Response {
    (StatusCode::OK, Json(ApiDoc::openapi())).into_response()
}
