//! EpdDitherer builder -- the primary ergonomic entry point for the crate.
//!
//! [`EpdDitherer`] wraps palette selection, quantizer choice and dither
//! options behind a fluent builder.

use crate::color::Rgb;
use crate::dither::{Dither, DitherAlgorithm, DitherOptions, FloydSteinberg, NearestColor};
use crate::output::{DitheredImage, GridError};
use crate::palette::{Palette, PaletteError, PaletteFormat};

use super::DitherError;

/// High-level quantization builder for e-paper panels.
///
/// # Design
///
/// - Constructor requires a [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`dither()`](Self::dither) takes `&self` so the builder is reusable
///   across multiple images
///
/// # Example
///
/// ```
/// use epd_dither::{EpdDitherer, Palette, PaletteFormat, Rgb};
///
/// let ditherer = EpdDitherer::new(Palette::new(PaletteFormat::Bwry)).dither_enabled(false);
///
/// let pixels = vec![Rgb::from_u8(0, 0, 0); 8];
/// let result = ditherer.dither(&pixels, 4, 2).unwrap();
///
/// assert_eq!(result.width(), 4);
/// assert_eq!(result.indices(), &[0; 8]);
/// ```
#[derive(Debug, Clone)]
pub struct EpdDitherer {
    palette: Palette,
    dither_opts: DitherOptions,
    algorithm: DitherAlgorithm,
}

impl EpdDitherer {
    /// Create a new ditherer with the given palette.
    ///
    /// Defaults: Floyd-Steinberg, no input clamping.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            dither_opts: DitherOptions::new(),
            algorithm: DitherAlgorithm::default(),
        }
    }

    /// Create a ditherer from a palette format selector (`"bwry"` / `"bwr"`).
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::UnknownFormat`] for any other selector.
    pub fn from_format(format: &str) -> Result<Self, PaletteError> {
        let format: PaletteFormat = format.parse()?;
        Ok(Self::new(Palette::new(format)))
    }

    /// Set the quantization algorithm.
    #[inline]
    pub fn algorithm(mut self, algorithm: DitherAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Switch error diffusion on (Floyd-Steinberg) or off (nearest color).
    #[inline]
    pub fn dither_enabled(self, enabled: bool) -> Self {
        self.algorithm(DitherAlgorithm::from_flag(enabled))
    }

    /// Set whether error-adjusted pixels are clamped before classification.
    #[inline]
    pub fn clamp_input(mut self, enabled: bool) -> Self {
        self.dither_opts = self.dither_opts.clamp_input(enabled);
        self
    }

    /// The palette this ditherer quantizes to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The selected algorithm.
    #[inline]
    pub fn selected_algorithm(&self) -> DitherAlgorithm {
        self.algorithm
    }

    /// Quantize a row-major pixel grid.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::Grid`] with [`GridError::LengthMismatch`] if
    /// `pixels.len() != width * height`.
    pub fn dither(
        &self,
        pixels: &[Rgb],
        width: usize,
        height: usize,
    ) -> Result<DitheredImage, DitherError> {
        if pixels.len() != width * height {
            return Err(GridError::LengthMismatch {
                expected: width * height,
                actual: pixels.len(),
            }
            .into());
        }

        let indices = match self.algorithm {
            DitherAlgorithm::FloydSteinberg => {
                FloydSteinberg.dither(pixels, width, height, &self.palette, &self.dither_opts)
            }
            DitherAlgorithm::None => {
                NearestColor.dither(pixels, width, height, &self.palette, &self.dither_opts)
            }
        };

        Ok(DitheredImage::new(
            indices,
            width,
            height,
            self.palette.clone(),
        ))
    }

    /// Quantize tightly packed 8-bit RGB bytes (`[R, G, B, R, G, B, ...]`).
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::Grid`] if `rgb.len() != width * height * 3`.
    pub fn dither_rgb8(
        &self,
        rgb: &[u8],
        width: usize,
        height: usize,
    ) -> Result<DitheredImage, DitherError> {
        if rgb.len() != width * height * 3 {
            return Err(GridError::LengthMismatch {
                expected: width * height * 3,
                actual: rgb.len(),
            }
            .into());
        }
        let pixels: Vec<Rgb> = rgb
            .chunks_exact(3)
            .map(|p| Rgb::from_u8(p[0], p[1], p[2]))
            .collect();
        self.dither(&pixels, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ditherer = EpdDitherer::new(Palette::default());
        assert_eq!(ditherer.selected_algorithm(), DitherAlgorithm::FloydSteinberg);
        assert_eq!(ditherer.palette().format(), PaletteFormat::Bwry);
    }

    #[test]
    fn test_from_format_rejects_unknown() {
        let err = EpdDitherer::from_format("bwyr").unwrap_err();
        assert_eq!(err, PaletteError::UnknownFormat("bwyr".to_string()));
    }

    #[test]
    fn test_dither_enabled_switches_algorithm() {
        let ditherer = EpdDitherer::new(Palette::default()).dither_enabled(false);
        assert_eq!(ditherer.selected_algorithm(), DitherAlgorithm::None);
    }

    #[test]
    fn test_dither_rejects_wrong_length() {
        let ditherer = EpdDitherer::new(Palette::default());
        let err = ditherer.dither(&[Rgb::default(); 3], 2, 2).unwrap_err();
        assert_eq!(
            err,
            DitherError::Grid(GridError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_dither_rgb8() {
        let ditherer = EpdDitherer::from_format("bwr").unwrap().dither_enabled(false);
        let rgb = [0, 0, 0, 255, 255, 255, 255, 0, 0, 0, 0, 0];
        let image = ditherer.dither_rgb8(&rgb, 4, 1).unwrap();
        assert_eq!(image.indices(), &[0, 1, 2, 0]);
        assert!(ditherer.dither_rgb8(&rgb[..11], 4, 1).is_err());
    }

    #[test]
    fn test_builder_is_reusable() {
        let ditherer = EpdDitherer::new(Palette::default());
        let pixels = vec![Rgb::from_u8(90, 90, 90); 16];
        let a = ditherer.dither(&pixels, 4, 4).unwrap();
        let b = ditherer.dither(&pixels, 4, 4).unwrap();
        assert_eq!(a, b);
    }
}
