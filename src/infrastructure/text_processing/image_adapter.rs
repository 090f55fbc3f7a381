use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{DocumentExtractor, ExtractionError, OcrEngine};
use crate::domain::{Extraction, UploadedFile};

use super::blocking_task::run_blocking;

/// Decodes png/jpeg uploads and OCRs them. The decoded image doubles as the preview.
pub struct ImageAdapter {
    ocr: Arc<dyn OcrEngine>,
    timeout: Duration,
}

impl ImageAdapter {
    pub fn new(ocr: Arc<dyn OcrEngine>, timeout: Duration) -> Self {
        Self { ocr, timeout }
    }
}

#[async_trait]
impl DocumentExtractor for ImageAdapter {
    #[tracing::instrument(skip(self, file, _page_range), fields(filename = %file.filename))]
    async fn extract(
        &self,
        file: &UploadedFile,
        _page_range: Option<&str>,
    ) -> Result<Extraction, ExtractionError> {
        let ocr = Arc::clone(&self.ocr);
        let data = file.data.clone();
        let filename = file.filename.clone();

        let extraction = run_blocking(self.timeout, move || {
            let image = image::load_from_memory(&data)
                .map_err(|e| ExtractionError::DecodeFailed(format!("image {filename}: {e}")))?;
            let text = ocr.recognize(&image)?;
            Ok(Extraction::new(Some(image), text))
        })
        .await?;

        tracing::info!(text_chars = extraction.text.len(), "Image OCR complete");
        Ok(extraction)
    }
}
