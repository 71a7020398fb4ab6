use crate::error::ConvertError;
use epd_dither::PaletteFormat;

/// Panel geometry for the supported e-paper tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySpec {
    pub width: u32,
    pub height: u32,
}

impl DisplaySpec {
    /// 1.54" 4-color tag (black/white/yellow/red): 200x200
    pub const EPAPER_154_Y: Self = Self {
        width: 200,
        height: 200,
    };

    /// 1.54" 3-color tag (black/white/red): 200x200
    pub const EPAPER_154_B: Self = Self {
        width: 200,
        height: 200,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Default panel for a palette format
    pub fn for_format(format: PaletteFormat) -> Self {
        match format {
            PaletteFormat::Bwry => Self::EPAPER_154_Y,
            PaletteFormat::Bwr => Self::EPAPER_154_B,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Reject zero-sized panels before any image is loaded
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.width == 0 || self.height == 0 {
            Err(ConvertError::UnsupportedGridDimensions {
                width: self.width as usize,
                height: self.height as usize,
                reason: "width and height must be non-zero".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl Default for DisplaySpec {
    fn default() -> Self {
        Self::EPAPER_154_Y
    }
}
