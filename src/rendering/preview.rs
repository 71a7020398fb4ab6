//! Indexed PNG preview of an index grid.

use crate::error::ConvertError;
use epd_dither::DitheredImage;
use std::io::Cursor;

/// Encode an index grid as a 2-bit indexed PNG with the palette colors in
/// declaration order, so PNG index == panel code.
pub fn encode_preview(image: &DitheredImage) -> Result<Vec<u8>, ConvertError> {
    let (width, height) = (image.width(), image.height());
    let dims = u32::try_from(width)
        .ok()
        .zip(u32::try_from(height).ok())
        .filter(|&(w, h)| w > 0 && h > 0);
    let Some((w, h)) = dims else {
        return Err(ConvertError::UnsupportedGridDimensions {
            width,
            height,
            reason: "PNG dimensions must be non-zero and fit in 32 bits".to_string(),
        });
    };

    let plte: Vec<u8> = image
        .palette()
        .entries()
        .iter()
        .flat_map(|entry| entry.rgb)
        .collect();
    let packed = pack_2bit_rows(image.indices(), width);

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, w, h);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Two);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&packed)
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack codes into 2-bit PNG scanlines; each row is padded to a whole byte.
fn pack_2bit_rows(indices: &[u8], width: usize) -> Vec<u8> {
    let bytes_per_row = width.div_ceil(4);
    let mut packed = Vec::with_capacity(bytes_per_row * indices.len() / width.max(1));

    for row in indices.chunks(width) {
        for quad in row.chunks(4) {
            let byte = quad
                .iter()
                .enumerate()
                .fold(0u8, |byte, (i, &idx)| byte | (idx & 0x03) << (6 - 2 * i));
            packed.push(byte);
        }
    }

    packed
}

#[cfg(test)]
mod tests {
    use super::*;
    use epd_dither::{Palette, PaletteFormat};

    #[test]
    fn test_pack_rows_pads_each_row() {
        // 5 pixels per row -> 2 bytes per row
        let packed = pack_2bit_rows(&[0, 1, 2, 3, 1, 3, 3, 3, 3, 3], 5);
        assert_eq!(packed, vec![0x1B, 0x40, 0xFF, 0xC0]);
    }

    #[test]
    fn test_preview_decodes_to_palette_colors() {
        let image = DitheredImage::new(
            vec![0, 1, 2, 3, 1, 1, 0, 0, 3, 2],
            5,
            2,
            Palette::new(PaletteFormat::Bwry),
        );
        let data = encode_preview(&image).unwrap();
        let decoded = image::load_from_memory(&data).unwrap().to_rgb8();

        assert_eq!(decoded.dimensions(), (5, 2));
        assert_eq!(decoded.into_raw(), image.to_rgb());
    }

    #[test]
    fn test_preview_uses_three_entry_palette_for_bwr() {
        let image = DitheredImage::new(vec![2; 4], 4, 1, Palette::new(PaletteFormat::Bwr));
        let data = encode_preview(&image).unwrap();
        let decoder = png::Decoder::new(Cursor::new(data));
        let reader = decoder.read_info().unwrap();
        let info = reader.info();

        assert_eq!(info.color_type, png::ColorType::Indexed);
        assert_eq!(info.bit_depth, png::BitDepth::Two);
        assert_eq!(
            info.palette.as_deref(),
            Some(&[0, 0, 0, 255, 255, 255, 255, 0, 0][..])
        );
    }
}
