use epd_dither::{DitherError, GridError, PaletteError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Invalid palette format: '{0}' (expected 'bwry' or 'bwr')")]
    InvalidPaletteFormat(String),

    #[error("Unsupported grid dimensions {width}x{height}: {reason}")]
    UnsupportedGridDimensions {
        width: usize,
        height: usize,
        reason: String,
    },

    #[error("Failed to load image {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid 4EI container: {0}")]
    InvalidContainer(String),

    #[error("BMP encode error: {0}")]
    BmpEncode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Attach the grid dimensions to a library grid error.
    pub fn grid(err: GridError, width: usize, height: usize) -> Self {
        ConvertError::UnsupportedGridDimensions {
            width,
            height,
            reason: err.to_string(),
        }
    }

    /// Map a library quantization error for a grid of the given size.
    pub fn dither(err: DitherError, width: usize, height: usize) -> Self {
        match err {
            DitherError::Palette(e) => e.into(),
            DitherError::Grid(e) => Self::grid(e, width, height),
        }
    }
}

impl From<PaletteError> for ConvertError {
    fn from(e: PaletteError) -> Self {
        match e {
            PaletteError::UnknownFormat(value) => ConvertError::InvalidPaletteFormat(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_palette_format() {
        let error = ConvertError::InvalidPaletteFormat("cmyk".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid palette format: 'cmyk' (expected 'bwry' or 'bwr')"
        );
    }

    #[test]
    fn test_unsupported_grid_dimensions() {
        let error = ConvertError::grid(GridError::UnalignedWidth { width: 202 }, 202, 200);
        assert_eq!(
            error.to_string(),
            "Unsupported grid dimensions 202x200: grid width 202 is not a multiple of 4"
        );
    }

    #[test]
    fn test_invalid_container() {
        let error = ConvertError::InvalidContainer("bad magic".to_string());
        assert_eq!(error.to_string(), "Invalid 4EI container: bad magic");
    }

    #[test]
    fn test_bmp_encode() {
        let error = ConvertError::BmpEncode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "BMP encode error: Encoding failed");
    }

    #[test]
    fn test_png_encode() {
        let error = ConvertError::PngEncode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }

    #[test]
    fn test_config() {
        let error = ConvertError::Config("missing field".to_string());
        assert_eq!(error.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_from_palette_error_keeps_value() {
        let error: ConvertError = PaletteError::UnknownFormat("bwrx".to_string()).into();
        match error {
            ConvertError::InvalidPaletteFormat(value) => assert_eq!(value, "bwrx"),
            _ => panic!("Expected InvalidPaletteFormat variant"),
        }
    }

    #[test]
    fn test_from_dither_error() {
        let error = ConvertError::dither(
            DitherError::Grid(GridError::LengthMismatch {
                expected: 4,
                actual: 3,
            }),
            2,
            2,
        );
        match error {
            ConvertError::UnsupportedGridDimensions { width, height, .. } => {
                assert_eq!((width, height), (2, 2));
            }
            _ => panic!("Expected UnsupportedGridDimensions variant"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: ConvertError = io.into();
        assert_eq!(error.to_string(), "IO error: gone");
    }
}
