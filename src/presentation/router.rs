use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::LlmClient;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    chat_handler, clear_handler, create_session_handler, delete_session_handler,
    get_session_handler, health_handler, inspect_handler, undo_handler, upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<L>(state: AppState<L>) -> Router
where
    L: LlmClient + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = state.settings.server.max_upload_mb.saturating_mul(1024 * 1024);

    Router::new()
        .route("/health", get(health_handler::<L>))
        .route("/api/v1/sessions", post(create_session_handler::<L>))
        .route(
            "/api/v1/sessions/{session_id}",
            get(get_session_handler::<L>).delete(delete_session_handler::<L>),
        )
        .route(
            "/api/v1/sessions/{session_id}/inspect",
            post(inspect_handler::<L>),
        )
        .route(
            "/api/v1/sessions/{session_id}/upload",
            post(upload_handler::<L>),
        )
        .route("/api/v1/sessions/{session_id}/chat", post(chat_handler::<L>))
        .route("/api/v1/sessions/{session_id}/undo", post(undo_handler::<L>))
        .route(
            "/api/v1/sessions/{session_id}/clear",
            post(clear_handler::<L>),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
