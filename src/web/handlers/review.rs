//! Code review relay endpoint

use crate::state::AppState;
use crate::types::{ErrorResponse, ReviewRequest};
use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

/// Relay a review request to the Ollama backend and stream the generated
/// text back as `text/plain; charset=utf-8`.
///
/// The body is fed one backend read at a time, so the first tokens reach the
/// browser long before generation finishes. If the client disconnects, axum
/// drops the body stream, which drops the backend response and releases the
/// Ollama connection. Failures before streaming begins become a single JSON
/// error envelope with status 500.
pub async fn review(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> Response {
    let request_id = Uuid::now_v7();
    tracing::info!(
        "Review request {}: '{}' ({} bytes of code)",
        request_id,
        request.prompt,
        request.code.len()
    );

    match state.ollama.generate_stream(request.to_prompt()).await {
        Ok(stream) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            Body::from_stream(stream),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Review request {} failed: {:#}", request_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to review code: {e:#}"),
                }),
            )
                .into_response()
        }
    }
}
