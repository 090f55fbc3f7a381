use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use docent::application::ports::{CompletionRequest, LlmClient, LlmClientError};
use docent::domain::ChatMessage;
use docent::infrastructure::llm::{
    GROQ_BASE_URL, OpenAiClient, create_llm_client, extract_error_message,
};
use docent::presentation::config::LlmSettings;

/// Serves `app` on an ephemeral local port and returns its base URL.
async fn serve_stub(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn stub_replying(status: StatusCode, body: &'static str) -> String {
    serve_stub(Router::new().route(
        "/chat/completions",
        post(move || async move { (status, body) }),
    ))
    .await
}

fn completion_request() -> CompletionRequest {
    CompletionRequest {
        model: "llama3-70b-8192".to_string(),
        messages: vec![ChatMessage::system("context"), ChatMessage::user("hello")],
        max_tokens: 1024,
        temperature: 0.2,
    }
}

#[test]
fn given_openai_error_body_when_extracting_message_then_returns_inner_message() {
    let body = r#"{"error":{"message":"Rate limit reached. Please try again in 4.2s.","type":"tokens"}}"#;

    assert_eq!(
        extract_error_message(body),
        "Rate limit reached. Please try again in 4.2s."
    );
}

#[test]
fn given_plain_text_body_when_extracting_message_then_returns_trimmed_body() {
    assert_eq!(extract_error_message("  upstream timeout\n"), "upstream timeout");
}

#[test]
fn given_base_url_with_trailing_slash_when_building_url_then_no_double_slash() {
    let client = OpenAiClient::new("https://api.groq.com/openai/v1/", "key");

    assert_eq!(
        client.completions_url(),
        "https://api.groq.com/openai/v1/chat/completions"
    );
}

#[test]
fn given_default_settings_when_creating_client_then_targets_groq() {
    let client = create_llm_client(&LlmSettings::default()).unwrap();

    assert_eq!(
        client.completions_url(),
        format!("{GROQ_BASE_URL}/chat/completions")
    );
}

#[test]
fn given_blank_base_url_when_creating_client_then_returns_error() {
    let settings = LlmSettings {
        base_url: "   ".to_string(),
        ..LlmSettings::default()
    };

    let result = create_llm_client(&settings);

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
}

#[tokio::test]
async fn given_successful_completion_when_calling_then_returns_first_choice_content() {
    let base_url = serve_stub(Router::new().route(
        "/chat/completions",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            let auth = headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let content = format!(
                "{auth} {} {}",
                body["model"].as_str().unwrap_or_default(),
                body["messages"].as_array().map_or(0, Vec::len)
            );
            Json(json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] }))
        }),
    ))
    .await;
    let client = OpenAiClient::new(&base_url, "test-key");

    let reply = client.complete(&completion_request()).await.unwrap();

    assert_eq!(reply, "Bearer test-key llama3-70b-8192 2");
}

#[tokio::test]
async fn given_rate_limited_response_when_calling_then_returns_rate_limited_with_server_message() {
    let base_url = stub_replying(
        StatusCode::TOO_MANY_REQUESTS,
        r#"{"error":{"message":"Rate limit reached for model. Please try again in 3s.","type":"tokens"}}"#,
    )
    .await;
    let client = OpenAiClient::new(&base_url, "test-key");

    let result = client.complete(&completion_request()).await;

    match result {
        Err(LlmClientError::RateLimited(message)) => {
            assert_eq!(message, "Rate limit reached for model. Please try again in 3s.");
        }
        other => panic!("expected rate limit, got {other:?}"),
    }
}

#[tokio::test]
async fn given_server_error_when_calling_then_returns_api_request_failed_with_status() {
    let base_url = stub_replying(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":{"message":"upstream exploded"}}"#,
    )
    .await;
    let client = OpenAiClient::new(&base_url, "test-key");

    let result = client.complete(&completion_request()).await;

    match result {
        Err(LlmClientError::ApiRequestFailed(message)) => {
            assert!(message.contains("HTTP 500"), "{message}");
            assert!(message.contains("upstream exploded"), "{message}");
        }
        other => panic!("expected request failure, got {other:?}"),
    }
}

#[tokio::test]
async fn given_empty_choices_when_calling_then_returns_invalid_response() {
    let base_url = stub_replying(StatusCode::OK, r#"{"choices":[]}"#).await;
    let client = OpenAiClient::new(&base_url, "test-key");

    let result = client.complete(&completion_request()).await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_non_json_success_body_when_calling_then_returns_invalid_response() {
    let base_url = stub_replying(StatusCode::OK, "<html>maintenance</html>").await;
    let client = OpenAiClient::new(&base_url, "test-key");

    let result = client.complete(&completion_request()).await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}
