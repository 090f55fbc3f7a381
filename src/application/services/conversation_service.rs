use std::sync::Arc;

use serde::Serialize;

use crate::application::ports::{
    DocumentExtractor, ExtractionError, LlmClient, PdfTextReader, TextSplitter,
};
use crate::domain::{ContentType, Extraction, UploadedFile};

use super::chat_orchestrator::{ChatOrchestrator, ChatOutcome};
use super::chat_session::ChatSession;

pub const DEFAULT_PAGE_RANGE_THRESHOLD: u32 = 10;

/// What the upload surface needs to know before extraction runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentInspection {
    pub content_type: Option<ContentType>,
    pub page_count: Option<u32>,
    pub requires_page_range: bool,
}

/// Drives uploads and chat turns against a single session.
pub struct ConversationService<L>
where
    L: LlmClient + ?Sized,
{
    extractor: Arc<dyn DocumentExtractor>,
    pdf_reader: Arc<dyn PdfTextReader>,
    splitter: Arc<dyn TextSplitter>,
    orchestrator: ChatOrchestrator<L>,
    page_range_threshold: u32,
}

impl<L> ConversationService<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(
        extractor: Arc<dyn DocumentExtractor>,
        pdf_reader: Arc<dyn PdfTextReader>,
        splitter: Arc<dyn TextSplitter>,
        orchestrator: ChatOrchestrator<L>,
        page_range_threshold: u32,
    ) -> Self {
        Self {
            extractor,
            pdf_reader,
            splitter,
            orchestrator,
            page_range_threshold,
        }
    }

    pub fn requires_page_range(&self, page_count: u32) -> bool {
        page_count > self.page_range_threshold
    }

    pub async fn inspect(&self, file: &UploadedFile) -> Result<DocumentInspection, ExtractionError> {
        let content_type = file.content_type();

        if content_type != Some(ContentType::Pdf) {
            return Ok(DocumentInspection {
                content_type,
                page_count: None,
                requires_page_range: false,
            });
        }

        let reader = Arc::clone(&self.pdf_reader);
        let data = file.data.clone();
        let page_count = tokio::task::spawn_blocking(move || {
            reader.open(&data).map(|pages| pages.page_count())
        })
        .await
        .map_err(|e| ExtractionError::TaskFailed(e.to_string()))??;

        Ok(DocumentInspection {
            content_type,
            page_count: Some(page_count),
            requires_page_range: self.requires_page_range(page_count),
        })
    }

    /// Replaces the session's document. The previous text is discarded before
    /// extraction starts, so it stays empty on unsupported files and on errors.
    #[tracing::instrument(
        skip(self, session, file),
        fields(session_id = %session.id(), filename = %file.filename, size_bytes = file.size_bytes())
    )]
    pub async fn load_document(
        &self,
        session: &mut ChatSession,
        file: &UploadedFile,
        page_range: Option<&str>,
    ) -> Result<Extraction, ExtractionError> {
        session.reset_document();

        let extraction = self.extractor.extract(file, page_range).await?;

        if !extraction.supported {
            tracing::warn!("Unsupported file type");
            return Ok(extraction);
        }

        let chunk_count = self.splitter.split(&extraction.text).len();
        if chunk_count > 1 {
            tracing::warn!(
                chunk_count,
                "Extracted text spans several chunks; the whole text is still sent as the system prompt"
            );
        }

        tracing::info!(
            text_chars = extraction.text.len(),
            has_preview = extraction.preview.is_some(),
            "Document loaded into session"
        );

        session.set_document(file.filename.clone(), extraction.text.clone());
        Ok(extraction)
    }

    /// Runs one chat turn and records it, whatever the outcome.
    pub async fn submit(&self, session: &mut ChatSession, user_input: &str) -> ChatOutcome {
        let outcome = self
            .orchestrator
            .respond(user_input, session.history(), session.extracted_text())
            .await;

        session.record_turn(user_input, outcome.display_text());
        outcome
    }
}
