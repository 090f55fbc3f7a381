use image::DynamicImage;

/// Recognises text in a decoded raster image using the engine's defaults.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("ocr engine unavailable: {0}")]
    EngineUnavailable(String),
    #[error("ocr failed: {0}")]
    RecognitionFailed(String),
    #[error("ocr io error: {0}")]
    Io(#[from] std::io::Error),
}
