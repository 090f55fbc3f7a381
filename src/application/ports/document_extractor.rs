use async_trait::async_trait;

use crate::domain::{Extraction, PageRangeError, UploadedFile};

use super::{OcrError, PdfReadError};

#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(
        &self,
        file: &UploadedFile,
        page_range: Option<&str>,
    ) -> Result<Extraction, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error(transparent)]
    InvalidPageRange(#[from] PageRangeError),
    #[error("failed to decode {0}")]
    DecodeFailed(String),
    #[error(transparent)]
    Ocr(#[from] OcrError),
    #[error(transparent)]
    Pdf(#[from] PdfReadError),
    #[error("failed to read table: {0}")]
    Table(String),
    #[error("extraction timed out")]
    TimedOut,
    #[error("extraction task failed: {0}")]
    TaskFailed(String),
}
