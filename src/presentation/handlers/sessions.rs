use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::ports::LlmClient;
use crate::application::services::ChatSession;
use crate::domain::ConversationHistory;
use crate::presentation::state::AppState;

use super::error::{error_response, find_session, parse_session_id};

#[derive(Serialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub document_name: Option<String>,
    pub extracted_text: String,
    pub history: ConversationHistory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&ChatSession> for SessionResponse {
    fn from(session: &ChatSession) -> Self {
        Self {
            session_id: session.id().to_string(),
            document_name: session.document_name().map(str::to_string),
            extracted_text: session.extracted_text().to_string(),
            history: session.history().clone(),
            created_at: session.created_at(),
            updated_at: session.updated_at(),
        }
    }
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub history: ConversationHistory,
}

#[tracing::instrument(skip(state))]
pub async fn create_session_handler<L>(State(state): State<AppState<L>>) -> impl IntoResponse
where
    L: LlmClient + ?Sized + 'static,
{
    let session_id = state.sessions.create().await;
    tracing::info!(%session_id, "Session created");

    (
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id: session_id.to_string(),
        }),
    )
}

pub async fn get_session_handler<L>(
    State(state): State<AppState<L>>,
    Path(session_id): Path<String>,
) -> Response
where
    L: LlmClient + ?Sized + 'static,
{
    let session = match find_session(&state, &session_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    let guard = session.lock().await;
    (StatusCode::OK, Json(SessionResponse::from(&*guard))).into_response()
}

/// Drops the session and everything extracted into it.
#[tracing::instrument(skip(state))]
pub async fn delete_session_handler<L>(
    State(state): State<AppState<L>>,
    Path(session_id): Path<String>,
) -> Response
where
    L: LlmClient + ?Sized + 'static,
{
    let session_id = match parse_session_id(&session_id) {
        Ok(session_id) => session_id,
        Err(response) => return response,
    };

    if !state.sessions.remove(session_id).await {
        tracing::warn!(%session_id, "Unknown session");
        return error_response(StatusCode::NOT_FOUND, format!("Session not found: {session_id}"));
    }

    let remaining = state.sessions.len().await;
    tracing::info!(%session_id, remaining, "Session deleted");
    StatusCode::NO_CONTENT.into_response()
}

#[tracing::instrument(skip(state))]
pub async fn undo_handler<L>(
    State(state): State<AppState<L>>,
    Path(session_id): Path<String>,
) -> Response
where
    L: LlmClient + ?Sized + 'static,
{
    let session = match find_session(&state, &session_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    let mut guard = session.lock().await;
    let removed = guard.undo().is_some();
    tracing::debug!(removed, remaining = guard.history().len(), "Undo last turn");

    (
        StatusCode::OK,
        Json(HistoryResponse {
            history: guard.history().clone(),
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn clear_handler<L>(
    State(state): State<AppState<L>>,
    Path(session_id): Path<String>,
) -> Response
where
    L: LlmClient + ?Sized + 'static,
{
    let session = match find_session(&state, &session_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    let mut guard = session.lock().await;
    guard.clear();
    tracing::debug!("Conversation cleared");

    (
        StatusCode::OK,
        Json(HistoryResponse {
            history: guard.history().clone(),
        }),
    )
        .into_response()
}
