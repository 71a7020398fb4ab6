//! "4EI1" container: 8-byte header followed by 2bpp packed index codes.
//!
//! ```text
//! offset 0  "4EI1"
//! offset 4  width  u16 LE
//! offset 6  height u16 LE
//! offset 8  packed data, width * height / 4 bytes
//! ```

use crate::error::ConvertError;
use epd_dither::output::{packed_len, unpack_2bpp};
use epd_dither::{DitheredImage, GridError, Palette};

pub const MAGIC: &[u8; 4] = b"4EI1";
pub const HEADER_LEN: usize = 8;

/// Parsed 4EI header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub width: u16,
    pub height: u16,
}

impl Header {
    pub fn payload_len(&self) -> usize {
        packed_len(self.width as usize, self.height as usize)
    }

    pub fn file_len(&self) -> usize {
        HEADER_LEN + self.payload_len()
    }
}

/// Encode an index grid as a 4EI file
pub fn encode(image: &DitheredImage) -> Result<Vec<u8>, ConvertError> {
    let (width, height) = (image.width(), image.height());
    let too_large = |side: &str| ConvertError::UnsupportedGridDimensions {
        width,
        height,
        reason: format!("{side} does not fit in a 16-bit header field"),
    };
    let w = u16::try_from(width).map_err(|_| too_large("width"))?;
    let h = u16::try_from(height).map_err(|_| too_large("height"))?;

    let packed = image
        .to_packed()
        .map_err(|e| ConvertError::grid(e, width, height))?;

    let mut out = Vec::with_capacity(HEADER_LEN + packed.len());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&w.to_le_bytes());
    out.extend_from_slice(&h.to_le_bytes());
    out.extend_from_slice(&packed);
    Ok(out)
}

/// Validate magic and header size
pub fn parse_header(data: &[u8]) -> Result<Header, ConvertError> {
    if data.len() < HEADER_LEN {
        return Err(ConvertError::InvalidContainer(format!(
            "file is {} bytes, shorter than the {HEADER_LEN}-byte header",
            data.len()
        )));
    }
    if &data[..4] != MAGIC {
        return Err(ConvertError::InvalidContainer(format!(
            "bad magic {:?} (expected \"4EI1\")",
            String::from_utf8_lossy(&data[..4])
        )));
    }
    Ok(Header {
        width: u16::from_le_bytes([data[4], data[5]]),
        height: u16::from_le_bytes([data[6], data[7]]),
    })
}

/// Decode a 4EI file into an index grid interpreted with `palette`
pub fn decode(data: &[u8], palette: &Palette) -> Result<DitheredImage, ConvertError> {
    let header = parse_header(data)?;
    if data.len() != header.file_len() {
        return Err(ConvertError::InvalidContainer(format!(
            "{}x{} image needs {} bytes, file has {}",
            header.width,
            header.height,
            header.file_len(),
            data.len()
        )));
    }

    let (width, height) = (header.width as usize, header.height as usize);
    let indices = unpack_2bpp(&data[HEADER_LEN..], width, height)
        .map_err(|e| ConvertError::grid(e, width, height))?;

    DitheredImage::try_new(indices, width, height, palette.clone()).map_err(|e| match e {
        GridError::CodeOutOfRange { code, .. } => ConvertError::InvalidContainer(format!(
            "code {code} is not defined by the {} palette",
            palette.format()
        )),
        other => ConvertError::grid(other, width, height),
    })
}
