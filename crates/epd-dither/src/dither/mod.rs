//! Quantization algorithms.
//!
//! Two quantizers map an RGB pixel grid onto a panel palette:
//!
//! - **Floyd-Steinberg** ([`FloydSteinberg`]): error diffusion, the default
//! - **Nearest color** ([`NearestColor`]): plain per-pixel classification
//!
//! # Architecture
//!
//! Both implement the [`Dither`] trait so the builder can switch between
//! them from configuration. Error diffusion is configured through
//! [`DitherOptions`].
//!
//! # Example
//!
//! ```
//! use epd_dither::{Dither, DitherOptions, FloydSteinberg, Palette, PaletteFormat, Rgb};
//!
//! let palette = Palette::new(PaletteFormat::Bwry);
//! let pixels = vec![Rgb::from_u8(128, 128, 128); 16];
//! let indices = FloydSteinberg.dither(&pixels, 4, 4, &palette, &DitherOptions::new());
//! assert_eq!(indices.len(), 16);
//! ```

mod floyd_steinberg;
mod kernel;
mod nearest;
mod options;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, FLOYD_STEINBERG};
pub use nearest::NearestColor;
pub use options::DitherOptions;

use crate::color::Rgb;
use crate::palette::Palette;

/// Quantizer selection for the builder API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherAlgorithm {
    /// Floyd-Steinberg error diffusion (100% propagation, row-major scan).
    #[default]
    FloydSteinberg,

    /// Nearest-color classification with no error diffusion.
    ///
    /// Every pixel is independent of every other pixel.
    None,
}

impl DitherAlgorithm {
    /// Pick the algorithm for a "dither on/off" configuration flag.
    #[inline]
    pub fn from_flag(dither: bool) -> Self {
        if dither {
            DitherAlgorithm::FloydSteinberg
        } else {
            DitherAlgorithm::None
        }
    }
}

/// Trait for quantization algorithms.
///
/// Implementors convert a continuous-tone RGB image into one palette index
/// code per pixel.
pub trait Dither {
    /// Quantize an image to palette index codes.
    ///
    /// # Arguments
    ///
    /// * `image` - Input pixels on the 0..=255 scale (row-major order)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `palette` - Color palette for quantization
    /// * `options` - Dithering configuration
    ///
    /// # Returns
    ///
    /// A `Vec<u8>` of index codes, one per pixel, in row-major order.
    /// Each code is in the range `0..palette.len()`.
    fn dither(
        &self,
        image: &[Rgb],
        width: usize,
        height: usize,
        palette: &Palette,
        options: &DitherOptions,
    ) -> Vec<u8>;
}

/// Core error diffusion loop parameterized by kernel.
///
/// Works on a private copy of the image: diffused error is added straight
/// into the neighbor pixels, so a pixel's value when it is visited is its
/// original value plus every contribution made so far, in scan order.
/// Contributions that fall outside the grid are dropped.
pub(crate) fn dither_with_kernel(
    image: &[Rgb],
    width: usize,
    height: usize,
    palette: &Palette,
    kernel: &Kernel,
    options: &DitherOptions,
) -> Vec<u8> {
    debug_assert_eq!(image.len(), width * height);

    let mut pixels = image.to_vec();
    let mut output = vec![0u8; width * height];
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let pixel = if options.clamp_input {
                pixels[idx].clamped()
            } else {
                pixels[idx]
            };

            let nearest = palette.find_nearest(pixel);
            output[idx] = palette.entry(nearest).code;

            let error = pixel - palette.color(nearest);
            if error == Rgb::default() {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + dx as i64;
                let ny = y + dy as usize;
                if nx < 0 || nx as usize >= width || ny >= height {
                    continue;
                }
                pixels[ny * width + nx as usize] += error * weight as f32 / divisor;
            }
        }
    }

    output
}
