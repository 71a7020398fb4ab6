//! Palette types and nearest-color matching
//!
//! This module provides the closed panel palettes (3-color and 4-color) and
//! the error type for selecting them by name.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{ColorName, Palette, PaletteEntry, PaletteFormat, COLOR_TABLE_SIZE};
