mod tesseract_engine;

pub use tesseract_engine::{DEFAULT_TESSERACT_PATH, TesseractCliEngine};
