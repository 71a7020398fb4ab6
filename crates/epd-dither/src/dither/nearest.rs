//! Nearest-color quantization without error diffusion.

use crate::color::Rgb;
use crate::palette::Palette;

use super::{Dither, DitherOptions};

/// Plain nearest-color classification.
///
/// Each pixel is mapped to the closest palette color on its own; no error
/// is carried between pixels, so the result for a pixel does not depend on
/// scan order. Used when dithering is switched off. Input clamping is
/// irrelevant here: in-gamut inputs are unaffected by it.
pub struct NearestColor;

impl Dither for NearestColor {
    fn dither(
        &self,
        image: &[Rgb],
        width: usize,
        height: usize,
        palette: &Palette,
        options: &DitherOptions,
    ) -> Vec<u8> {
        debug_assert_eq!(image.len(), width * height);
        image
            .iter()
            .map(|&pixel| {
                let pixel = if options.clamp_input {
                    pixel.clamped()
                } else {
                    pixel
                };
                palette.entry(palette.find_nearest(pixel)).code
            })
            .collect()
    }
}
