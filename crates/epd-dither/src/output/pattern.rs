//! Horizontal stripe test pattern.

use super::dithered_image::DitheredImage;
use super::error::GridError;
use crate::palette::Palette;

/// Generate one horizontal band per palette color, top to bottom in code order.
///
/// Bands are `height / n` rows tall for an `n`-color palette; the last band
/// absorbs any remainder rows. On a 200-row panel the 4-color palette gives
/// four 50-row bands and the 3-color palette gives 66, 66 and 68 rows.
///
/// # Errors
///
/// Returns [`GridError::Empty`] if `width` is zero or `height` is smaller
/// than the number of palette colors.
///
/// # Example
///
/// ```
/// use epd_dither::{output::stripe_pattern, Palette, PaletteFormat};
///
/// let image = stripe_pattern(&Palette::new(PaletteFormat::Bwry), 4, 8).unwrap();
/// assert_eq!(&image.indices()[..4], &[0, 0, 0, 0]);
/// assert_eq!(&image.indices()[28..], &[3, 3, 3, 3]);
/// ```
pub fn stripe_pattern(
    palette: &Palette,
    width: usize,
    height: usize,
) -> Result<DitheredImage, GridError> {
    let bands = palette.len();
    let band_height = height / bands;
    if width == 0 || band_height == 0 {
        return Err(GridError::Empty { width, height });
    }

    let last = (bands - 1) as u8;
    let mut indices = Vec::with_capacity(width * height);
    for y in 0..height {
        let code = ((y / band_height) as u8).min(last);
        indices.extend(std::iter::repeat(code).take(width));
    }
    Ok(DitheredImage::new(indices, width, height, palette.clone()))
}
