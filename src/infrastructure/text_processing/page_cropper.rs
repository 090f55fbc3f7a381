use image::{DynamicImage, GenericImageView};

pub const DEFAULT_HEADER_INCHES: f64 = 3.9;
pub const DEFAULT_FOOTER_INCHES: f64 = 2.27;
/// Inch-to-pixel factor used for the bands, independent of the render resolution.
pub const ASSUMED_DPI: f64 = 96.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropSettings {
    pub header_inches: f64,
    pub footer_inches: f64,
    pub dpi: f64,
}

impl CropSettings {
    pub fn header_pixels(&self) -> u32 {
        (self.header_inches * self.dpi) as u32
    }

    pub fn footer_pixels(&self) -> u32 {
        (self.footer_inches * self.dpi) as u32
    }
}

impl Default for CropSettings {
    fn default() -> Self {
        Self {
            header_inches: DEFAULT_HEADER_INCHES,
            footer_inches: DEFAULT_FOOTER_INCHES,
            dpi: ASSUMED_DPI,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CropError {
    #[error(
        "header ({header_px}px) and footer ({footer_px}px) leave nothing of a {height}px tall page"
    )]
    RegionTooSmall {
        height: u32,
        header_px: u32,
        footer_px: u32,
    },
}

/// Cuts the header band off the top and the footer band off the bottom.
pub fn crop_header_footer(
    image: &DynamicImage,
    settings: &CropSettings,
) -> Result<DynamicImage, CropError> {
    let (width, height) = image.dimensions();
    let header_px = settings.header_pixels();
    let footer_px = settings.footer_pixels();

    let remaining = height
        .checked_sub(header_px)
        .and_then(|h| h.checked_sub(footer_px))
        .filter(|h| *h > 0)
        .ok_or(CropError::RegionTooSmall {
            height,
            header_px,
            footer_px,
        })?;

    Ok(image.crop_imm(0, header_px, width, remaining))
}
