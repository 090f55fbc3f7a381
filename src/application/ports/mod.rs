mod document_extractor;
mod llm_client;
mod ocr_engine;
mod pdf_source;
mod sleeper;
mod text_splitter;

pub use document_extractor::{DocumentExtractor, ExtractionError};
pub use llm_client::{CompletionRequest, LlmClient, LlmClientError};
pub use ocr_engine::{OcrEngine, OcrError};
pub use pdf_source::{PageRasterizer, PdfPages, PdfReadError, PdfTextReader, RasterizeError};
pub use sleeper::Sleeper;
pub use text_splitter::TextSplitter;
