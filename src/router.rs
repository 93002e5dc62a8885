use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use std::sync::Arc;

use crate::{handlers::rest, service::NoteService};

/// Builds the HTTP router. Methods not registered on a path get a 405 from
/// axum's method router.
pub fn build_router(service: Arc<NoteService>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/notes", get(rest::get_all_notes).post(rest::create_note))
        .route("/notes/", get(rest::get_all_notes).post(rest::create_note))
        .route(
            "/notes/{id}",
            get(rest::get_one_note)
                .put(rest::update_note)
                .delete(rest::delete_note),
        )
        .route("/api-doc/openapi.json", get(rest::openapi_json))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Response {
    (StatusCode::OK, "Hello from notes server!").into_response()
}
