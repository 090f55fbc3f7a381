use std::io::{Cursor, Write};
use std::process::Command;

use image::{DynamicImage, ImageFormat};

use crate::application::ports::{OcrEngine, OcrError};

pub const DEFAULT_TESSERACT_PATH: &str = "tesseract";

/// Runs the tesseract CLI with its default language and page segmentation.
pub struct TesseractCliEngine {
    tesseract_path: String,
}

impl TesseractCliEngine {
    pub fn new(tesseract_path: impl Into<String>) -> Self {
        Self {
            tesseract_path: tesseract_path.into(),
        }
    }

    pub fn tesseract_path(&self) -> &str {
        &self.tesseract_path
    }

    pub fn is_available(&self) -> bool {
        Command::new(&self.tesseract_path)
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

impl Default for TesseractCliEngine {
    fn default() -> Self {
        Self::new(DEFAULT_TESSERACT_PATH)
    }
}

impl OcrEngine for TesseractCliEngine {
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let mut png_bytes: Vec<u8> = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| OcrError::RecognitionFailed(format!("PNG encode failed: {e}")))?;

        let mut input = tempfile::Builder::new()
            .prefix("docent-ocr-")
            .suffix(".png")
            .tempfile()?;
        input.write_all(&png_bytes)?;
        input.flush()?;

        let output = Command::new(&self.tesseract_path)
            .arg(input.path())
            .arg("stdout")
            .output()
            .map_err(|e| {
                OcrError::EngineUnavailable(format!(
                    "failed to run '{}': {e}",
                    self.tesseract_path
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::RecognitionFailed(format!(
                "tesseract exited with {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
