use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{DocumentExtractor, OcrEngine, PdfTextReader};
use crate::domain::ContentType;
use crate::infrastructure::ocr::TesseractCliEngine;
use crate::presentation::config::ExtractionSettings;

use super::composite_file_loader::CompositeFileLoader;
use super::image_adapter::ImageAdapter;
use super::page_cropper::CropSettings;
use super::pdf_adapter::PdfAdapter;
use super::pdf_rasterizer::PdfiumRasterizer;
use super::table_adapters::{CsvAdapter, SpreadsheetAdapter};

#[derive(Debug, thiserror::Error)]
pub enum ExtractorFactoryError {
    #[error("tesseract_path must not be empty")]
    MissingTesseractPath,
    #[error("render_dpi must be positive, got {0}")]
    InvalidRenderDpi(f32),
    #[error("crop_dpi must be positive, got {0}")]
    InvalidCropDpi(f64),
    #[error("timeout_secs must be positive")]
    InvalidTimeout,
}

pub struct ExtractorFactory;

impl ExtractorFactory {
    pub fn create_ocr(
        settings: &ExtractionSettings,
    ) -> Result<Arc<dyn OcrEngine>, ExtractorFactoryError> {
        if settings.tesseract_path.trim().is_empty() {
            return Err(ExtractorFactoryError::MissingTesseractPath);
        }

        let engine = TesseractCliEngine::new(settings.tesseract_path.clone());
        if !engine.is_available() {
            tracing::warn!(
                tesseract_path = %settings.tesseract_path,
                "tesseract not found; image and PDF OCR will fail until it is installed"
            );
        }

        Ok(Arc::new(engine))
    }

    /// Wires the image, PDF, spreadsheet and CSV extractors behind one dispatcher.
    pub fn create(
        settings: &ExtractionSettings,
        ocr: Arc<dyn OcrEngine>,
        pdf_reader: Arc<dyn PdfTextReader>,
    ) -> Result<Arc<dyn DocumentExtractor>, ExtractorFactoryError> {
        if settings.render_dpi <= 0.0 {
            return Err(ExtractorFactoryError::InvalidRenderDpi(settings.render_dpi));
        }
        if settings.crop_dpi <= 0.0 {
            return Err(ExtractorFactoryError::InvalidCropDpi(settings.crop_dpi));
        }
        if settings.timeout_secs == 0 {
            return Err(ExtractorFactoryError::InvalidTimeout);
        }

        let timeout = Duration::from_secs(settings.timeout_secs);
        let crop = CropSettings {
            header_inches: settings.header_inches,
            footer_inches: settings.footer_inches,
            dpi: settings.crop_dpi,
        };

        let image: Arc<dyn DocumentExtractor> =
            Arc::new(ImageAdapter::new(Arc::clone(&ocr), timeout));
        let pdf: Arc<dyn DocumentExtractor> = Arc::new(PdfAdapter::new(
            pdf_reader,
            Arc::new(PdfiumRasterizer::new(settings.render_dpi)),
            ocr,
            crop,
            timeout,
        ));
        let spreadsheet: Arc<dyn DocumentExtractor> = Arc::new(SpreadsheetAdapter::new(timeout));
        let csv: Arc<dyn DocumentExtractor> = Arc::new(CsvAdapter::new(timeout));

        tracing::info!(render_dpi = settings.render_dpi, "Document extractors ready");

        Ok(Arc::new(CompositeFileLoader::new(vec![
            (ContentType::Image, image),
            (ContentType::Pdf, pdf),
            (ContentType::Spreadsheet, spreadsheet),
            (ContentType::Csv, csv),
        ])))
    }
}
