//! epd-dither: palette quantization for small e-paper panels
//!
//! This library maps continuous RGB images onto the closed 3-color (BWR)
//! and 4-color (BWRY) palettes of 200x200 NFC e-paper tags, and packs the
//! result into the panel's 2-bit-per-pixel layout.
//!
//! # Quick Start
//!
//! The [`EpdDitherer`] builder is the primary entry point:
//!
//! ```
//! use epd_dither::{EpdDitherer, Palette, PaletteFormat, Rgb};
//!
//! let ditherer = EpdDitherer::new(Palette::new(PaletteFormat::Bwry));
//! let pixels = vec![Rgb::from_u8(128, 128, 128); 16];
//! let result = ditherer.dither(&pixels, 4, 4).unwrap();
//!
//! assert_eq!(result.width(), 4);
//! assert_eq!(result.to_packed().unwrap().len(), 4);
//! ```
//!
//! # Palettes
//!
//! | Format | Codes |
//! |--------|-------|
//! | `bwry` | 0 black, 1 white, 2 yellow, 3 red |
//! | `bwr`  | 0 black, 1 white, 2 red (3 unused) |
//!
//! Declaration order fixes the index codes, the nearest-color tie-break
//! (first declared wins) and the bitmap color table layout.
//!
//! # Pipeline
//!
//! ```text
//! RGB grid (0..=255 floats)
//!     |
//!     +--> FloydSteinberg   (dither on: error diffusion, row-major)
//!     +--> NearestColor     (dither off: per-pixel classification)
//!     |
//!     v
//! DitheredImage (one code per pixel)
//!     |
//!     +--> to_packed()      4 pixels per byte, MSB first
//!     +--> indices()        one byte per pixel (indexed bitmaps)
//! ```
//!
//! Distance is squared Euclidean RGB distance. Error-adjusted pixels are
//! compared unclamped unless [`DitherOptions::clamp_input`] is set.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;


pub use api::{DitherError, EpdDitherer};
pub use color::Rgb;
pub use dither::{Dither, DitherAlgorithm, DitherOptions, FloydSteinberg, NearestColor};
pub use output::{DitheredImage, GridError};
pub use palette::{ColorName, Palette, PaletteEntry, PaletteError, PaletteFormat};
