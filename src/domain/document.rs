use std::path::Path;

use image::DynamicImage;
use serde::Serialize;

/// Message returned in place of text when no extractor handles the upload.
pub const UNSUPPORTED_FILE_TYPE_MESSAGE: &str = "Unsupported file type";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Image,
    Pdf,
    Spreadsheet,
    Csv,
}

impl ContentType {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "png" | "jpg" | "jpeg" => Some(Self::Image),
            "pdf" => Some(Self::Pdf),
            "xls" | "xlsx" => Some(Self::Spreadsheet),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Recognises formats from their leading bytes.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        const PNG: &[u8] = b"\x89PNG\r\n\x1a\n";
        const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
        const PDF: &[u8] = b"%PDF-";
        const ZIP: &[u8] = b"PK\x03\x04";
        const OLE2: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

        if data.starts_with(PNG) || data.starts_with(JPEG) {
            Some(Self::Image)
        } else if data.starts_with(PDF) {
            Some(Self::Pdf)
        } else if data.starts_with(ZIP) || data.starts_with(OLE2) {
            Some(Self::Spreadsheet)
        } else {
            None
        }
    }

    /// Content sniffing wins over the file name; the extension is the fallback.
    ///
    /// ZIP and OLE2 containers also carry docx, pptx, doc and msg files, so a
    /// container header only means `Spreadsheet` when the extension agrees or
    /// is missing.
    pub fn detect(filename: &str, data: &[u8]) -> Option<Self> {
        let extension = Path::new(filename).extension().and_then(|ext| ext.to_str());
        let by_extension = extension.and_then(Self::from_extension);

        match Self::sniff(data) {
            Some(Self::Spreadsheet) if extension.is_some() => by_extension,
            Some(sniffed) => Some(sniffed),
            None => by_extension,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Spreadsheet => "spreadsheet",
            Self::Csv => "csv",
        }
    }
}

/// A named byte source handed over by the upload surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            data,
        }
    }

    pub fn extension(&self) -> Option<String> {
        Path::new(&self.filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
    }

    pub fn content_type(&self) -> Option<ContentType> {
        ContentType::detect(&self.filename, &self.data)
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Result of running an extractor: optional preview and the text for the prompt.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub preview: Option<DynamicImage>,
    pub text: String,
    pub supported: bool,
}

impl Extraction {
    pub fn new(preview: Option<DynamicImage>, text: String) -> Self {
        Self {
            preview,
            text,
            supported: true,
        }
    }

    pub fn text_only(text: String) -> Self {
        Self::new(None, text)
    }

    pub fn unsupported() -> Self {
        Self {
            preview: None,
            text: UNSUPPORTED_FILE_TYPE_MESSAGE.to_string(),
            supported: false,
        }
    }
}
