//! DitheredImage: the index grid produced by quantization.
//!
//! [`DitheredImage`] wraps one palette index code per pixel with dimension
//! metadata and the owned [`Palette`]. The indexed form is canonical; the
//! packed and RGB forms are derived from it on demand.

use super::error::GridError;
use super::packed::pack_2bpp;
use crate::palette::Palette;

/// The canonical output of the quantization pipeline.
///
/// Stores one `u8` index code per pixel in row-major order, along with
/// image dimensions and the palette the codes refer to.
///
/// # Example
///
/// ```
/// use epd_dither::{DitheredImage, Palette, PaletteFormat};
///
/// let palette = Palette::new(PaletteFormat::Bwry);
/// let image = DitheredImage::new(vec![0, 1, 2, 3], 4, 1, palette);
///
/// assert_eq!(image.indices(), &[0, 1, 2, 3]);
/// assert_eq!(image.to_packed().unwrap(), vec![0x1B]);
/// assert_eq!(image.to_rgb().len(), 4 * 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DitheredImage {
    /// Index codes, one per pixel, row-major order.
    indices: Vec<u8>,
    /// Image width in pixels.
    width: usize,
    /// Image height in pixels.
    height: usize,
    /// The palette the codes refer to.
    palette: Palette,
}

impl DitheredImage {
    /// Create a new `DitheredImage` from index codes.
    ///
    /// Used by the quantizers, which only emit palette codes. Use
    /// [`try_new`](Self::try_new) for codes from outside the crate.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height` and that every
    /// code is below `palette.len()`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert!(
            indices.iter().all(|&c| (c as usize) < palette.len()),
            "index codes must be below the palette size ({})",
            palette.len()
        );
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{}={})",
            indices.len(),
            width,
            height,
            width * height,
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Create a `DitheredImage`, checking the buffer length and the codes.
    ///
    /// # Errors
    ///
    /// - [`GridError::LengthMismatch`] if `indices.len() != width * height`
    /// - [`GridError::CodeOutOfRange`] for the first code `>= palette.len()`
    pub fn try_new(
        indices: Vec<u8>,
        width: usize,
        height: usize,
        palette: Palette,
    ) -> Result<Self, GridError> {
        if indices.len() != width * height {
            return Err(GridError::LengthMismatch {
                expected: width * height,
                actual: indices.len(),
            });
        }
        if let Some(&code) = indices.iter().find(|&&c| c as usize >= palette.len()) {
            return Err(GridError::CodeOutOfRange {
                code,
                palette_len: palette.len(),
            });
        }
        Ok(Self::new(indices, width, height, palette))
    }

    /// Returns the index codes as a slice.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Consume the image and return the index codes.
    #[inline]
    pub fn into_indices(self) -> Vec<u8> {
        self.indices
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns a reference to the palette used for this image.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Count pixels per index code; slot `i` holds the count for code `i`.
    pub fn histogram(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.palette.len()];
        for &idx in &self.indices {
            if let Some(count) = counts.get_mut(idx as usize) {
                *count += 1;
            }
        }
        counts
    }

    /// Pack the codes 4 pixels per byte (see [`pack_2bpp`]).
    ///
    /// # Errors
    ///
    /// Fails if the grid is empty or its width is not a multiple of 4.
    pub fn to_packed(&self) -> Result<Vec<u8>, GridError> {
        pack_2bpp(&self.indices, self.width, self.height)
    }

    /// Convert to RGB bytes using the palette reference colors.
    ///
    /// The returned buffer has length `width * height * 3` in
    /// `[R, G, B, R, G, B, ...]` layout. A code with no palette entry
    /// renders as black.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            let color = self
                .palette
                .entries()
                .get(idx as usize)
                .map_or([0, 0, 0], |entry| entry.rgb);
            rgb.extend_from_slice(&color);
        }
        rgb
    }
}
