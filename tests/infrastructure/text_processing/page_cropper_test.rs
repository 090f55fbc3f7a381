use image::{DynamicImage, GenericImageView, RgbImage};

use docent::infrastructure::text_processing::{CropError, CropSettings, crop_header_footer};

fn page(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::new(width, height))
}

#[test]
fn given_default_settings_when_converting_inches_then_truncates_to_whole_pixels() {
    let settings = CropSettings::default();

    assert_eq!(settings.header_pixels(), 374);
    assert_eq!(settings.footer_pixels(), 217);
}

#[test]
fn given_tall_page_when_cropping_then_header_and_footer_bands_are_removed() {
    let cropped = crop_header_footer(&page(816, 1056), &CropSettings::default()).unwrap();

    assert_eq!(cropped.dimensions(), (816, 1056 - 374 - 217));
}

#[test]
fn given_page_shorter_than_bands_when_cropping_then_returns_region_too_small() {
    let result = crop_header_footer(&page(100, 500), &CropSettings::default());

    assert_eq!(
        result.unwrap_err(),
        CropError::RegionTooSmall {
            height: 500,
            header_px: 374,
            footer_px: 217
        }
    );
}

#[test]
fn given_page_exactly_band_height_when_cropping_then_returns_region_too_small() {
    let result = crop_header_footer(&page(100, 591), &CropSettings::default());

    assert!(matches!(result, Err(CropError::RegionTooSmall { .. })));
}

#[test]
fn given_zero_bands_when_cropping_then_image_is_unchanged() {
    let settings = CropSettings {
        header_inches: 0.0,
        footer_inches: 0.0,
        dpi: 96.0,
    };

    let cropped = crop_header_footer(&page(40, 30), &settings).unwrap();

    assert_eq!(cropped.dimensions(), (40, 30));
}
