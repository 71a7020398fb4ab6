//! Output types for the quantization pipeline.
//!
//! [`DitheredImage`] is the canonical output of all quantizers. It stores
//! index codes with dimension metadata and offers derived forms on demand:
//!
//! - **Indexed** ([`DitheredImage::indices`]): one raw code per pixel, the
//!   form written into 8-bit indexed bitmaps
//! - **Packed** ([`DitheredImage::to_packed`]): 4 pixels per byte, MSB first
//! - **RGB** ([`DitheredImage::to_rgb`]): palette colors for previews

mod dithered_image;
mod error;
mod packed;
mod pattern;

pub use dithered_image::DitheredImage;
pub use error::GridError;
pub use packed::{pack_2bpp, packed_len, unpack_2bpp, PIXELS_PER_BYTE};
pub use pattern::stripe_pattern;
