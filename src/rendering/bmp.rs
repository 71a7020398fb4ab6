//! 8-bit indexed BMP output.
//!
//! Each pixel byte is the raw index code; the 256-entry color table comes
//! from [`Palette::color_table`](epd_dither::Palette::color_table), so
//! external tools see the palette colors while the tag firmware reads codes.

use crate::error::ConvertError;
use epd_dither::DitheredImage;
use image::codecs::bmp::BmpEncoder;
use image::ExtendedColorType;

/// Encode an index grid as an 8-bit indexed bitmap
pub fn encode_bmp(image: &DitheredImage) -> Result<Vec<u8>, ConvertError> {
    let (width, height) = (image.width(), image.height());
    let dims = u32::try_from(width)
        .ok()
        .zip(u32::try_from(height).ok())
        .filter(|&(w, h)| w > 0 && h > 0);
    let Some((w, h)) = dims else {
        return Err(ConvertError::UnsupportedGridDimensions {
            width,
            height,
            reason: "bitmap dimensions must be non-zero and fit in 32 bits".to_string(),
        });
    };

    let table = image.palette().color_table();
    let mut buf = Vec::new();
    BmpEncoder::new(&mut buf)
        .encode_with_palette(
            image.indices(),
            w,
            h,
            ExtendedColorType::L8,
            Some(table.as_slice()),
        )
        .map_err(|e| ConvertError::BmpEncode(e.to_string()))?;
    Ok(buf)
}
