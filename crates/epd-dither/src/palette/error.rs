//! Error types for palette operations

use std::fmt;

/// Error type for palette selection.
///
/// Returned when a palette format selector does not name one of the
/// supported panel palettes.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// The format selector is neither `bwry` nor `bwr`
    UnknownFormat(String),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::UnknownFormat(value) => {
                write!(
                    f,
                    "unknown palette format '{}' (expected 'bwry' or 'bwr')",
                    value
                )
            }
        }
    }
}

impl std::error::Error for PaletteError {}
