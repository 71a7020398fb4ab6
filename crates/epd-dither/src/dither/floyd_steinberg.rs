//! Floyd-Steinberg error diffusion dithering algorithm.
//!
//! Floyd-Steinberg distributes 100% of the quantization error to 4
//! not-yet-visited neighbors. Pixels are visited strictly row by row, left
//! to right, so the output for a given input is fully deterministic.

use crate::color::Rgb;
use crate::palette::Palette;

use super::{dither_with_kernel, Dither, DitherOptions, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// # Algorithm
///
/// For each pixel in row-major order: classify the error-adjusted value,
/// compute `error = pixel - palette_color`, then push that error forward:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// Neighbors outside the image are skipped and their share is lost; edge
/// pixels do not redistribute it.
///
/// # Example
///
/// ```
/// use epd_dither::{Dither, DitherOptions, FloydSteinberg, Palette, PaletteFormat, Rgb};
///
/// let palette = Palette::new(PaletteFormat::Bwr);
/// let pixels = vec![Rgb::from_u8(0, 0, 0); 8];
/// let indices = FloydSteinberg.dither(&pixels, 4, 2, &palette, &DitherOptions::new());
/// assert!(indices.iter().all(|&i| i == 0));
/// ```
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(
        &self,
        image: &[Rgb],
        width: usize,
        height: usize,
        palette: &Palette,
        options: &DitherOptions,
    ) -> Vec<u8> {
        dither_with_kernel(image, width, height, palette, &FLOYD_STEINBERG, options)
    }
}
