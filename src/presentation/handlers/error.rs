use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::LlmClient;
use crate::domain::SessionId;
use crate::presentation::state::{AppState, SharedSession};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Resolves a path segment to a live session, or the response explaining why not.
pub async fn find_session<L>(state: &AppState<L>, raw_id: &str) -> Result<SharedSession, Response>
where
    L: LlmClient + ?Sized,
{
    let session_id = parse_session_id(raw_id)?;

    state.sessions.get(session_id).await.ok_or_else(|| {
        tracing::warn!(%session_id, "Unknown session");
        error_response(StatusCode::NOT_FOUND, format!("Session not found: {session_id}"))
    })
}

pub fn parse_session_id(raw_id: &str) -> Result<SessionId, Response> {
    raw_id.parse().map_err(|_| {
        tracing::warn!(session_id = %raw_id, "Malformed session id");
        error_response(StatusCode::BAD_REQUEST, format!("Invalid session id: {raw_id}"))
    })
}
