use image::DynamicImage;
use pdfium_render::prelude::*;

use crate::application::ports::{PageRasterizer, RasterizeError};

pub const DEFAULT_RENDER_DPI: f32 = 200.0;

/// Renders pages through the system pdfium library. Binds per call, like a
/// one-page conversion run.
pub struct PdfiumRasterizer {
    dpi: f32,
}

impl PdfiumRasterizer {
    pub fn new(dpi: f32) -> Self {
        Self { dpi }
    }
}

impl Default for PdfiumRasterizer {
    fn default() -> Self {
        Self::new(DEFAULT_RENDER_DPI)
    }
}

impl PageRasterizer for PdfiumRasterizer {
    fn render_page(&self, data: &[u8], page_number: u32) -> Result<DynamicImage, RasterizeError> {
        let render_failed = |reason: String| RasterizeError::RenderFailed {
            page: page_number,
            reason,
        };

        let pdfium = Pdfium::new(
            Pdfium::bind_to_system_library()
                .map_err(|e| RasterizeError::RendererUnavailable(format!("pdfium bind failed: {e}")))?,
        );

        let doc = pdfium
            .load_pdf_from_byte_slice(data, None)
            .map_err(|e| render_failed(format!("pdfium open failed: {e}")))?;

        let index = page_number
            .checked_sub(1)
            .and_then(|i| u16::try_from(i).ok())
            .ok_or_else(|| render_failed("page index out of range".to_string()))?;

        let page = doc
            .pages()
            .get(index)
            .map_err(|e| render_failed(format!("page access failed: {e}")))?;

        let width = (page.width().value * self.dpi / 72.0) as i32;
        let height = (page.height().value * self.dpi / 72.0) as i32;

        let bitmap = page
            .render_with_config(
                &PdfRenderConfig::new()
                    .set_target_width(width)
                    .set_target_height(height),
            )
            .map_err(|e| render_failed(format!("render failed: {e}")))?;

        Ok(bitmap.as_image())
    }
}
