pub mod llm;
pub mod observability;
pub mod ocr;
pub mod scheduling;
pub mod text_processing;
