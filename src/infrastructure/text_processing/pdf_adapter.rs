use std::fmt::Write as _;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use image::DynamicImage;

use crate::application::ports::{
    DocumentExtractor, ExtractionError, OcrEngine, OcrError, PageRasterizer, PdfTextReader,
    RasterizeError,
};
use crate::domain::{Extraction, PageRange, UploadedFile};

use super::blocking_task::run_blocking;
use super::page_cropper::{CropError, CropSettings, crop_header_footer};

/// Why the image pass over a page failed. Recorded inline, never fatal.
#[derive(Debug, thiserror::Error)]
enum PageImageError {
    #[error(transparent)]
    Rasterize(#[from] RasterizeError),
    #[error(transparent)]
    Crop(#[from] CropError),
    #[error(transparent)]
    Ocr(#[from] OcrError),
    #[error("renderer panicked")]
    Panicked,
}

/// Page-range PDF extraction: native text plus an OCR pass over each cropped page render.
#[derive(Clone)]
pub struct PdfAdapter {
    reader: Arc<dyn PdfTextReader>,
    rasterizer: Arc<dyn PageRasterizer>,
    ocr: Arc<dyn OcrEngine>,
    crop: CropSettings,
    timeout: Duration,
}

impl PdfAdapter {
    pub fn new(
        reader: Arc<dyn PdfTextReader>,
        rasterizer: Arc<dyn PageRasterizer>,
        ocr: Arc<dyn OcrEngine>,
        crop: CropSettings,
        timeout: Duration,
    ) -> Self {
        Self {
            reader,
            rasterizer,
            ocr,
            crop,
            timeout,
        }
    }

    /// Blocking. Opening the PDF, resolving the range and reading a page's text
    /// layer are fatal; anything that goes wrong while imaging a page is written
    /// into the text for that page.
    pub fn extract_pages(
        &self,
        data: &[u8],
        range: PageRange,
    ) -> Result<Extraction, ExtractionError> {
        let mut pages = self.reader.open(data)?;
        let total_pages = pages.page_count();
        let span = range.resolve(total_pages)?;

        let mut text = String::new();
        let mut preview: Option<DynamicImage> = None;
        let mut failed_pages = 0usize;

        for page_number in span {
            let native = pages.page_text(page_number).inspect_err(|e| {
                tracing::error!(page_number, error = %e, "Reading native text failed");
            })?;
            let _ = write!(text, "Page {page_number}:\n{native}\n");

            match self.image_text(data, page_number) {
                Ok((image, image_text)) => {
                    let _ = write!(text, "Page {page_number} (Image):\n{image_text}\n");
                    preview.get_or_insert(image);
                }
                Err(e) => {
                    failed_pages += 1;
                    tracing::warn!(page_number, error = %e, "Page image processing failed");
                    let _ = writeln!(text, "Error processing images on page {page_number}: {e}");
                }
            }
        }

        tracing::info!(total_pages, failed_pages, "PDF extraction complete");
        Ok(Extraction::new(preview, text))
    }

    fn image_text(
        &self,
        data: &[u8],
        page_number: u32,
    ) -> Result<(DynamicImage, String), PageImageError> {
        catch_unwind(AssertUnwindSafe(|| -> Result<(DynamicImage, String), PageImageError> {
            let rendered = self.rasterizer.render_page(data, page_number)?;
            let cropped = crop_header_footer(&rendered, &self.crop)?;
            let text = self.ocr.recognize(&cropped)?;
            Ok((cropped, text))
        }))
        .unwrap_or(Err(PageImageError::Panicked))
    }
}

#[async_trait]
impl DocumentExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, file), fields(filename = %file.filename))]
    async fn extract(
        &self,
        file: &UploadedFile,
        page_range: Option<&str>,
    ) -> Result<Extraction, ExtractionError> {
        let range = PageRange::parse(page_range)?;
        let adapter = self.clone();
        let data = file.data.clone();

        run_blocking(self.timeout, move || adapter.extract_pages(&data, range)).await
    }
}
