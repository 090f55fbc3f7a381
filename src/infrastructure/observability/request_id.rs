use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

use crate::domain::SessionId;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const SESSION_ID_HEADER: &str = "x-session-id";

const SESSIONS_PREFIX: &str = "/api/v1/sessions/";

#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Session addressed by a `/api/v1/sessions/{id}/...` path, if the id is well formed.
pub fn session_id_from_path(path: &str) -> Option<SessionId> {
    path.strip_prefix(SESSIONS_PREFIX)?
        .split('/')
        .next()?
        .parse()
        .ok()
}

/// Tags every request with an id (reusing the caller's when present) and
/// runs the handler inside a span carrying it. Session-scoped routes also
/// get the session id on the span and echoed back in `x-session-id`.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let session_id = session_id_from_path(request.uri().path());

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        session_id = tracing::field::Empty,
        method = %request.method(),
        path = %request.uri().path()
    );
    if let Some(session_id) = session_id {
        span.record("session_id", tracing::field::display(session_id));
    }

    let mut response = next.run(request).instrument(span).await;

    let headers = response.headers_mut();
    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, header_value);
    }
    if let Some(Ok(header_value)) = session_id.map(|id| HeaderValue::from_str(&id.to_string())) {
        headers.insert(SESSION_ID_HEADER, header_value);
    }

    response
}
