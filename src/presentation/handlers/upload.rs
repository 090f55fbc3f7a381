use std::io::Cursor;

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use base64::{Engine as _, engine::general_purpose};
use image::{DynamicImage, ImageFormat};
use serde::Serialize;

use crate::application::ports::{ExtractionError, LlmClient};
use crate::application::services::DocumentInspection;
use crate::domain::UploadedFile;
use crate::presentation::state::AppState;

use super::error::{error_response, find_session};

pub const NO_FILE_MESSAGE: &str = "No file uploaded";

#[derive(Serialize)]
pub struct UploadResponse {
    pub supported: bool,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_png_base64: Option<String>,
}

#[derive(Default)]
struct UploadForm {
    file: Option<UploadedFile>,
    page_range: Option<String>,
}

async fn read_upload_form(multipart: &mut Multipart) -> Result<UploadForm, Response> {
    let mut form = UploadForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {e}"),
                ));
            }
        };

        let name = field.name().map(str::to_string);
        let filename = field.file_name().map(str::to_string);

        let read_failed = |e: axum::extract::multipart::MultipartError| {
            tracing::error!(error = %e, "Failed to read multipart field");
            error_response(StatusCode::BAD_REQUEST, format!("Failed to read file: {e}"))
        };

        match name.as_deref() {
            Some("file") => {
                let data = field.bytes().await.map_err(read_failed)?;
                if filename.is_some() || !data.is_empty() {
                    form.file = Some(UploadedFile::new(
                        filename.unwrap_or_else(|| "upload".to_string()),
                        data.to_vec(),
                    ));
                }
            }
            Some("page_range") => {
                let text = field.text().await.map_err(read_failed)?;
                form.page_range = Some(text).filter(|t| !t.trim().is_empty());
            }
            other => {
                tracing::debug!(field = ?other, "Ignoring unknown multipart field");
            }
        }
    }

    Ok(form)
}

fn encode_preview(image: &DynamicImage) -> Option<String> {
    let mut png_bytes: Vec<u8> = Vec::new();
    match image.write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png) {
        Ok(()) => Some(general_purpose::STANDARD.encode(png_bytes)),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to encode preview image");
            None
        }
    }
}

fn extraction_error_response(error: &ExtractionError) -> Response {
    let status = match error {
        ExtractionError::InvalidPageRange(_) => StatusCode::BAD_REQUEST,
        ExtractionError::TimedOut => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    };
    error_response(status, error.to_string())
}

/// Tells the client whether to ask for a page range before uploading.
#[tracing::instrument(skip(state, multipart))]
pub async fn inspect_handler<L>(
    State(state): State<AppState<L>>,
    Path(session_id): Path<String>,
    mut multipart: Multipart,
) -> Response
where
    L: LlmClient + ?Sized + 'static,
{
    if let Err(response) = find_session(&state, &session_id).await {
        return response;
    }

    let form = match read_upload_form(&mut multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    let Some(file) = form.file else {
        return (
            StatusCode::OK,
            Json(DocumentInspection {
                content_type: None,
                page_count: None,
                requires_page_range: false,
            }),
        )
            .into_response();
    };

    match state.conversation_service.inspect(&file).await {
        Ok(inspection) => (StatusCode::OK, Json(inspection)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, filename = %file.filename, "Inspection failed");
            extraction_error_response(&e)
        }
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<L>(
    State(state): State<AppState<L>>,
    Path(session_id): Path<String>,
    mut multipart: Multipart,
) -> Response
where
    L: LlmClient + ?Sized + 'static,
{
    let session = match find_session(&state, &session_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    let form = match read_upload_form(&mut multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    let Some(file) = form.file else {
        tracing::warn!("Upload request with no file");
        return error_response(StatusCode::BAD_REQUEST, NO_FILE_MESSAGE);
    };

    let mut guard = session.lock().await;
    let result = state
        .conversation_service
        .load_document(&mut *guard, &file, form.page_range.as_deref())
        .await;

    match result {
        Ok(extraction) => (
            StatusCode::OK,
            Json(UploadResponse {
                supported: extraction.supported,
                preview_png_base64: extraction.preview.as_ref().and_then(encode_preview),
                text: extraction.text,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, filename = %file.filename, "Extraction failed");
            extraction_error_response(&e)
        }
    }
}
