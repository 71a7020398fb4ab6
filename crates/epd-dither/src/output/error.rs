//! Error type for index grid shape problems.

use std::fmt;

/// Error type for index grids whose shape an output stage cannot handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero (or too small for the requested layout)
    Empty {
        /// Grid width in pixels
        width: usize,
        /// Grid height in pixels
        height: usize,
    },
    /// Width is not a multiple of 4, so rows cannot be packed 4 pixels per byte
    UnalignedWidth {
        /// Grid width in pixels
        width: usize,
    },
    /// Buffer length does not match the declared dimensions
    LengthMismatch {
        /// Length implied by the dimensions
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
    /// An index code has no entry in the palette (e.g. code 3 on a 3-color panel)
    CodeOutOfRange {
        /// The offending code
        code: u8,
        /// Number of colors in the palette
        palette_len: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty { width, height } => {
                write!(f, "grid {}x{} is too small", width, height)
            }
            GridError::UnalignedWidth { width } => {
                write!(f, "grid width {} is not a multiple of 4", width)
            }
            GridError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer length mismatch: expected {} elements, got {}",
                    expected, actual
                )
            }
            GridError::CodeOutOfRange { code, palette_len } => {
                write!(
                    f,
                    "index code {} is outside a {}-color palette",
                    code, palette_len
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
