//! epd-convert
//!
//! Converts raster images into the 3/4-color 2bpp format of 1.54" NFC
//! e-paper tags ("4EI1" files) or into 8-bit indexed bitmaps.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
