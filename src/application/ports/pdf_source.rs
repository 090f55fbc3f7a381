use image::DynamicImage;

/// Opens a PDF and exposes its embedded text layer page by page.
pub trait PdfTextReader: Send + Sync {
    fn open(&self, data: &[u8]) -> Result<Box<dyn PdfPages>, PdfReadError>;
}

pub trait PdfPages {
    fn page_count(&self) -> u32;

    /// Native text of a 1-indexed page.
    fn page_text(&mut self, page_number: u32) -> Result<String, PdfReadError>;
}

/// Renders a single 1-indexed page of a PDF to an image.
pub trait PageRasterizer: Send + Sync {
    fn render_page(&self, data: &[u8], page_number: u32) -> Result<DynamicImage, RasterizeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PdfReadError {
    #[error("failed to open PDF: {0}")]
    OpenFailed(String),
    #[error("failed to read page {page}: {reason}")]
    PageFailed { page: u32, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum RasterizeError {
    #[error("pdf renderer unavailable: {0}")]
    RendererUnavailable(String),
    #[error("failed to render page {page}: {reason}")]
    RenderFailed { page: u32, reason: String },
}
