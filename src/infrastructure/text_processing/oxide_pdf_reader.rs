use std::io::Write;

use pdf_oxide::PdfDocument;
use tempfile::NamedTempFile;

use crate::application::ports::{PdfPages, PdfReadError, PdfTextReader};

/// Embedded text layer via pdf_oxide. The document is read from a temp file.
#[derive(Default)]
pub struct OxidePdfReader;

impl OxidePdfReader {
    pub fn new() -> Self {
        Self
    }
}

struct OxidePages {
    doc: PdfDocument,
    page_count: u32,
    _file: NamedTempFile,
}

impl PdfTextReader for OxidePdfReader {
    fn open(&self, data: &[u8]) -> Result<Box<dyn PdfPages>, PdfReadError> {
        let mut file = NamedTempFile::new()
            .map_err(|e| PdfReadError::OpenFailed(format!("failed to create temp file: {e}")))?;
        file.write_all(data)
            .map_err(|e| PdfReadError::OpenFailed(format!("failed to write temp file: {e}")))?;

        let mut doc = PdfDocument::open(file.path())
            .map_err(|e| PdfReadError::OpenFailed(format!("failed to parse PDF: {e}")))?;
        let page_count = doc
            .page_count()
            .map_err(|e| PdfReadError::OpenFailed(format!("failed to read page count: {e}")))?;

        Ok(Box::new(OxidePages {
            doc,
            page_count: u32::try_from(page_count).unwrap_or(u32::MAX),
            _file: file,
        }))
    }
}

impl PdfPages for OxidePages {
    fn page_count(&self) -> u32 {
        self.page_count
    }

    fn page_text(&mut self, page_number: u32) -> Result<String, PdfReadError> {
        let index = page_number
            .checked_sub(1)
            .ok_or(PdfReadError::PageFailed {
                page: page_number,
                reason: "pages are numbered from 1".to_string(),
            })?;

        self.doc
            .extract_text(index as usize)
            .map_err(|e| PdfReadError::PageFailed {
                page: page_number,
                reason: e.to_string(),
            })
    }
}
