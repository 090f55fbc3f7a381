use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::application::services::ChatOutcome;
use crate::domain::ConversationHistory;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::{error_response, find_session};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_secs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&ChatOutcome> for ChatStatus {
    fn from(outcome: &ChatOutcome) -> Self {
        match outcome {
            ChatOutcome::Reply(_) => Self {
                status: "reply",
                retry_after_secs: None,
                reason: None,
            },
            ChatOutcome::RateLimited { retry_after } => Self {
                status: "rate_limited",
                retry_after_secs: Some(retry_after.as_secs_f64()),
                reason: None,
            },
            ChatOutcome::Failed(reason) => Self {
                status: "failed",
                retry_after_secs: None,
                reason: Some(reason.clone()),
            },
        }
    }
}

/// `message` is always empty so the client can reset its input box.
#[derive(Serialize)]
pub struct ChatResponse {
    pub history: ConversationHistory,
    pub message: String,
    pub outcome: ChatStatus,
}

#[tracing::instrument(skip(state, request))]
pub async fn chat_handler<L>(
    State(state): State<AppState<L>>,
    Path(session_id): Path<String>,
    Json(request): Json<ChatRequest>,
) -> Response
where
    L: LlmClient + ?Sized + 'static,
{
    if request.message.trim().is_empty() {
        tracing::warn!("Chat request with empty message");
        return error_response(StatusCode::BAD_REQUEST, "No user message provided");
    }

    let session = match find_session(&state, &session_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    tracing::debug!(prompt = %sanitize_prompt(&request.message), "Processing chat turn");

    let mut guard = session.lock().await;
    let outcome = state
        .conversation_service
        .submit(&mut *guard, &request.message)
        .await;

    (
        StatusCode::OK,
        Json(ChatResponse {
            history: guard.history().clone(),
            message: String::new(),
            outcome: ChatStatus::from(&outcome),
        }),
    )
        .into_response()
}
