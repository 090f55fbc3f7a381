mod blocking_task;
mod composite_file_loader;
mod extractor_factory;
mod image_adapter;
mod oxide_pdf_reader;
mod page_cropper;
mod pdf_adapter;
mod pdf_rasterizer;
mod table_adapters;
mod table_formatter;
mod word_chunker;

pub use composite_file_loader::CompositeFileLoader;
pub use extractor_factory::{ExtractorFactory, ExtractorFactoryError};
pub use image_adapter::ImageAdapter;
pub use oxide_pdf_reader::OxidePdfReader;
pub use page_cropper::{
    ASSUMED_DPI, CropError, CropSettings, DEFAULT_FOOTER_INCHES, DEFAULT_HEADER_INCHES,
    crop_header_footer,
};
pub use pdf_adapter::PdfAdapter;
pub use pdf_rasterizer::{DEFAULT_RENDER_DPI, PdfiumRasterizer};
pub use table_adapters::{CsvAdapter, SpreadsheetAdapter};
pub use table_formatter::{MISSING_CELL, TextTable};
pub use word_chunker::{DEFAULT_MAX_CHUNK_LENGTH, WordChunker, split_text};
