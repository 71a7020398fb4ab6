//! Image decoding and resizing to panel size.

use crate::error::ConvertError;
use crate::models::DisplaySpec;
use epd_dither::Rgb;
use image::imageops::FilterType;
use image::RgbImage;
use std::path::Path;

/// Decode an image file into 8-bit RGB; alpha is dropped
pub fn open_rgb(path: &Path) -> Result<RgbImage, ConvertError> {
    let img = image::open(path).map_err(|source| ConvertError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Decoded image"
    );
    Ok(img.into_rgb8())
}

/// Resize with Lanczos3 to exactly the panel size (aspect ratio is not kept).
/// Images that already match are returned unchanged.
pub fn fit_to_display(img: RgbImage, spec: DisplaySpec) -> RgbImage {
    if img.dimensions() == (spec.width, spec.height) {
        return img;
    }
    tracing::info!(
        from_width = img.width(),
        from_height = img.height(),
        width = spec.width,
        height = spec.height,
        "Resizing image"
    );
    image::imageops::resize(&img, spec.width, spec.height, FilterType::Lanczos3)
}

/// Decode and resize in one step
pub fn load_for_display(path: &Path, spec: DisplaySpec) -> Result<RgbImage, ConvertError> {
    Ok(fit_to_display(open_rgb(path)?, spec))
}

/// Decode an image that must already have the panel size
pub fn load_exact(path: &Path, spec: DisplaySpec) -> Result<RgbImage, ConvertError> {
    let img = open_rgb(path)?;
    if img.dimensions() != (spec.width, spec.height) {
        return Err(ConvertError::UnsupportedGridDimensions {
            width: img.width() as usize,
            height: img.height() as usize,
            reason: format!(
                "prepared bitmap must be exactly {}x{}",
                spec.width, spec.height
            ),
        });
    }
    Ok(img)
}

/// Convert 8-bit RGB pixels to the float grid the ditherer works on
pub fn to_pixels(img: &RgbImage) -> Vec<Rgb> {
    img.pixels()
        .map(|p| Rgb::from_u8(p.0[0], p.0[1], p.0[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_keeps_matching_size() {
        let img = RgbImage::from_pixel(4, 2, image::Rgb([10, 20, 30]));
        let out = fit_to_display(img.clone(), DisplaySpec::new(4, 2));
        assert_eq!(out, img);
    }

    #[test]
    fn test_fit_resizes_exactly() {
        let img = RgbImage::from_pixel(30, 10, image::Rgb([255, 255, 255]));
        let out = fit_to_display(img, DisplaySpec::new(8, 8));
        assert_eq!(out.dimensions(), (8, 8));
    }

    #[test]
    fn test_solid_color_survives_resize() {
        let img = RgbImage::from_pixel(50, 50, image::Rgb([0, 0, 0]));
        let out = fit_to_display(img, DisplaySpec::new(20, 20));
        assert!(out.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_to_pixels_row_major() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(1, 0, image::Rgb([255, 0, 0]));
        let pixels = to_pixels(&img);
        assert_eq!(pixels, vec![Rgb::from_u8(0, 0, 0), Rgb::from_u8(255, 0, 0)]);
    }

    #[test]
    fn test_open_missing_file() {
        let err = open_rgb(Path::new("/nonexistent/input.png")).unwrap_err();
        assert!(matches!(err, ConvertError::ImageLoad { .. }));
    }
}
