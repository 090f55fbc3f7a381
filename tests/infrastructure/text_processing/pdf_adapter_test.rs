use std::sync::Arc;
use std::time::Duration;

use image::GenericImageView;

use docent::application::ports::{DocumentExtractor, ExtractionError, OcrEngine, PdfReadError};
use docent::domain::{PageRange, PageRangeError, UploadedFile};
use docent::infrastructure::text_processing::{CropSettings, PdfAdapter};

use crate::helpers::{FailingOcr, FakePdfReader, FakeRasterizer, FixedOcr, minimal_pdf_bytes};

fn adapter(pages: &[&str], rasterizer: FakeRasterizer, ocr: Arc<dyn OcrEngine>) -> PdfAdapter {
    PdfAdapter::new(
        Arc::new(FakePdfReader::with_pages(pages)),
        Arc::new(rasterizer),
        ocr,
        CropSettings::default(),
        Duration::from_secs(30),
    )
}

#[test]
fn given_all_pages_when_extracting_then_native_and_image_text_are_labelled_per_page() {
    let adapter = adapter(
        &["alpha", "beta"],
        FakeRasterizer::letter_at_96_dpi(),
        Arc::new(FixedOcr("ocr text")),
    );

    let extraction = adapter
        .extract_pages(&minimal_pdf_bytes(), PageRange::all())
        .unwrap();

    assert_eq!(
        extraction.text,
        "Page 1:\nalpha\nPage 1 (Image):\nocr text\nPage 2:\nbeta\nPage 2 (Image):\nocr text\n"
    );
    let preview = extraction.preview.expect("first page preview");
    assert_eq!(preview.dimensions(), (816, 1056 - 374 - 217));
}

#[test]
fn given_single_page_range_when_extracting_then_only_that_page_is_processed() {
    let adapter = adapter(
        &["one", "two", "three"],
        FakeRasterizer::letter_at_96_dpi(),
        Arc::new(FixedOcr("img")),
    );

    let extraction = adapter
        .extract_pages(&minimal_pdf_bytes(), PageRange::single(2))
        .unwrap();

    assert_eq!(extraction.text, "Page 2:\ntwo\nPage 2 (Image):\nimg\n");
}

#[test]
fn given_page_that_fails_to_render_when_extracting_then_error_is_annotated_and_next_page_continues() {
    let rasterizer = FakeRasterizer {
        failing: vec![1],
        ..FakeRasterizer::letter_at_96_dpi()
    };
    let adapter = adapter(&["alpha", "beta"], rasterizer, Arc::new(FixedOcr("ocr text")));

    let extraction = adapter
        .extract_pages(&minimal_pdf_bytes(), PageRange::all())
        .unwrap();

    assert!(extraction.text.starts_with("Page 1:\nalpha\nError processing images on page 1: "));
    assert!(extraction.text.contains("Page 2:\nbeta\nPage 2 (Image):\nocr text\n"));
    assert!(extraction.preview.is_some());
}

#[test]
fn given_render_too_short_to_crop_when_extracting_then_crop_error_is_annotated() {
    let rasterizer = FakeRasterizer {
        width: 200,
        height: 300,
        failing: Vec::new(),
    };
    let adapter = adapter(&["alpha"], rasterizer, Arc::new(FixedOcr("unused")));

    let extraction = adapter
        .extract_pages(&minimal_pdf_bytes(), PageRange::all())
        .unwrap();

    assert!(extraction.text.contains("Error processing images on page 1: "));
    assert!(!extraction.text.contains("(Image)"));
    assert!(extraction.preview.is_none());
}

#[test]
fn given_ocr_failure_when_extracting_then_native_text_is_kept() {
    let adapter = adapter(
        &["alpha"],
        FakeRasterizer::letter_at_96_dpi(),
        Arc::new(FailingOcr),
    );

    let extraction = adapter
        .extract_pages(&minimal_pdf_bytes(), PageRange::all())
        .unwrap();

    assert!(extraction.text.starts_with("Page 1:\nalpha\n"));
    assert!(extraction.text.contains("Error processing images on page 1: "));
}

#[test]
fn given_range_past_last_page_when_extracting_then_fails_before_processing() {
    let adapter = adapter(
        &["alpha", "beta"],
        FakeRasterizer::letter_at_96_dpi(),
        Arc::new(FixedOcr("x")),
    );

    let result = adapter.extract_pages(&minimal_pdf_bytes(), PageRange::span(1, 5));

    assert!(matches!(
        result,
        Err(ExtractionError::InvalidPageRange(PageRangeError::OutOfBounds { total: 2, .. }))
    ));
}

#[test]
fn given_unreadable_pdf_when_extracting_then_returns_pdf_error() {
    let adapter = adapter(&["alpha"], FakeRasterizer::letter_at_96_dpi(), Arc::new(FixedOcr("x")));

    let result = adapter.extract_pages(b"not a pdf", PageRange::all());

    assert!(matches!(
        result,
        Err(ExtractionError::Pdf(PdfReadError::OpenFailed(_)))
    ));
}

#[tokio::test]
async fn given_malformed_range_text_when_extracting_upload_then_returns_invalid_page_range() {
    let adapter = adapter(&["alpha"], FakeRasterizer::letter_at_96_dpi(), Arc::new(FixedOcr("x")));
    let file = UploadedFile::new("doc.pdf", minimal_pdf_bytes());

    let result = adapter.extract(&file, Some("abc")).await;

    assert!(matches!(
        result,
        Err(ExtractionError::InvalidPageRange(PageRangeError::Malformed(_)))
    ));
}

#[tokio::test]
async fn given_range_text_when_extracting_upload_then_selected_pages_are_returned() {
    let adapter = adapter(
        &["one", "two", "three", "four"],
        FakeRasterizer::letter_at_96_dpi(),
        Arc::new(FixedOcr("img")),
    );
    let file = UploadedFile::new("doc.pdf", minimal_pdf_bytes());

    let extraction = adapter.extract(&file, Some("2-3")).await.unwrap();

    assert!(extraction.text.starts_with("Page 2:\ntwo\n"));
    assert!(extraction.text.contains("Page 3 (Image):\nimg\n"));
    assert!(!extraction.text.contains("Page 4"));
}

#[test]
fn given_page_whose_text_layer_cannot_be_read_when_extracting_then_fails_with_pdf_error() {
    let adapter = PdfAdapter::new(
        Arc::new(FakePdfReader::with_pages(&["alpha", "beta"]).with_unreadable_pages(&[2])),
        Arc::new(FakeRasterizer::letter_at_96_dpi()),
        Arc::new(FixedOcr("x")),
        CropSettings::default(),
        Duration::from_secs(30),
    );

    let result = adapter.extract_pages(&minimal_pdf_bytes(), PageRange::all());

    assert!(matches!(
        result,
        Err(ExtractionError::Pdf(PdfReadError::PageFailed { page: 2, .. }))
    ));
}

#[test]
fn given_document_without_pages_when_extracting_all_then_returns_empty_text() {
    let adapter = adapter(&[], FakeRasterizer::letter_at_96_dpi(), Arc::new(FixedOcr("x")));

    let extraction = adapter
        .extract_pages(&minimal_pdf_bytes(), PageRange::all())
        .unwrap();

    assert_eq!(extraction.text, "");
    assert!(extraction.preview.is_none());
    assert!(extraction.supported);
}
