//! Unified error type for the epd-dither public API.
//!
//! [`DitherError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::output::GridError;
use crate::palette::PaletteError;
use std::fmt;

/// Unified error type for the epd-dither public API.
///
/// # Example
///
/// ```
/// use epd_dither::{DitherError, Palette};
///
/// fn pick(name: &str) -> Result<Palette, DitherError> {
///     Ok(Palette::from_name(name)?)
/// }
///
/// assert!(pick("bwr").is_ok());
/// assert!(pick("cmyk").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DitherError {
    /// Palette selection error
    Palette(PaletteError),
    /// Grid shape error (empty, unaligned width, or buffer length mismatch)
    Grid(GridError),
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::Palette(err) => write!(f, "palette error: {}", err),
            DitherError::Grid(err) => write!(f, "grid error: {}", err),
        }
    }
}

impl std::error::Error for DitherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DitherError::Palette(err) => Some(err),
            DitherError::Grid(err) => Some(err),
        }
    }
}

impl From<PaletteError> for DitherError {
    fn from(err: PaletteError) -> Self {
        DitherError::Palette(err)
    }
}

impl From<GridError> for DitherError {
    fn from(err: GridError) -> Self {
        DitherError::Grid(err)
    }
}
