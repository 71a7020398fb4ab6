//! 2-bit packing of index grids.
//!
//! Four horizontally adjacent pixels share one byte. The first pixel takes
//! bits 7-6, the second 5-4, the third 3-2 and the fourth 1-0. Rows follow
//! each other with no padding, so a row is exactly `width / 4` bytes.

use super::error::GridError;

/// Pixels stored in one packed byte.
pub const PIXELS_PER_BYTE: usize = 4;

fn check_shape(width: usize, height: usize) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::Empty { width, height });
    }
    if width % PIXELS_PER_BYTE != 0 {
        return Err(GridError::UnalignedWidth { width });
    }
    Ok(())
}

/// Number of bytes `pack_2bpp` produces for a grid of the given size.
#[inline]
pub fn packed_len(width: usize, height: usize) -> usize {
    width / PIXELS_PER_BYTE * height
}

/// Pack 2-bit index codes, 4 pixels per byte, MSB first.
///
/// Codes are masked to their low two bits.
///
/// # Errors
///
/// - [`GridError::Empty`] if either dimension is zero
/// - [`GridError::UnalignedWidth`] if `width` is not a multiple of 4
/// - [`GridError::LengthMismatch`] if `indices.len() != width * height`
///
/// # Example
///
/// ```
/// use epd_dither::output::pack_2bpp;
///
/// let packed = pack_2bpp(&[0, 1, 2, 3], 4, 1).unwrap();
/// assert_eq!(packed, vec![0b00_01_10_11]);
/// ```
pub fn pack_2bpp(indices: &[u8], width: usize, height: usize) -> Result<Vec<u8>, GridError> {
    check_shape(width, height)?;
    if indices.len() != width * height {
        return Err(GridError::LengthMismatch {
            expected: width * height,
            actual: indices.len(),
        });
    }

    let packed = indices
        .chunks_exact(PIXELS_PER_BYTE)
        .map(|quad| {
            quad.iter()
                .fold(0u8, |byte, &code| (byte << 2) | (code & 0x03))
        })
        .collect();
    Ok(packed)
}

/// Unpack a `pack_2bpp` buffer back into one index code per pixel.
///
/// # Errors
///
/// Same shape checks as [`pack_2bpp`]; [`GridError::LengthMismatch`] if
/// `data` is not exactly `width / 4 * height` bytes.
pub fn unpack_2bpp(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, GridError> {
    check_shape(width, height)?;
    let expected = packed_len(width, height);
    if data.len() != expected {
        return Err(GridError::LengthMismatch {
            expected,
            actual: data.len(),
        });
    }

    let mut indices = Vec::with_capacity(width * height);
    for &byte in data {
        for slot in 0..PIXELS_PER_BYTE {
            let shift = 6 - 2 * slot;
            indices.push((byte >> shift) & 0x03);
        }
    }
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_four_codes_into_one_byte() {
        assert_eq!(pack_2bpp(&[0, 1, 2, 3], 4, 1).unwrap(), vec![0x1B]);
    }

    #[test]
    fn test_pack_msb_first() {
        assert_eq!(pack_2bpp(&[3, 0, 0, 0], 4, 1).unwrap(), vec![0b1100_0000]);
        assert_eq!(pack_2bpp(&[0, 0, 0, 3], 4, 1).unwrap(), vec![0b0000_0011]);
    }

    #[test]
    fn test_pack_row_major_no_padding() {
        let indices = [
            1, 1, 1, 1, 2, 2, 2, 2, // row 0
            3, 3, 3, 3, 0, 0, 0, 0, // row 1
        ];
        let packed = pack_2bpp(&indices, 8, 2).unwrap();
        assert_eq!(packed, vec![0x55, 0xAA, 0xFF, 0x00]);
        assert_eq!(packed.len(), packed_len(8, 2));
    }

    #[test]
    fn test_pack_masks_high_bits() {
        assert_eq!(pack_2bpp(&[4, 5, 6, 7], 4, 1).unwrap(), vec![0x1B]);
    }

    #[test]
    fn test_pack_rejects_unaligned_width() {
        let err = pack_2bpp(&[0; 6], 6, 1).unwrap_err();
        assert_eq!(err, GridError::UnalignedWidth { width: 6 });
    }

    #[test]
    fn test_pack_rejects_empty() {
        assert_eq!(
            pack_2bpp(&[], 0, 10).unwrap_err(),
            GridError::Empty {
                width: 0,
                height: 10
            }
        );
        assert_eq!(
            pack_2bpp(&[], 4, 0).unwrap_err(),
            GridError::Empty {
                width: 4,
                height: 0
            }
        );
    }

    #[test]
    fn test_pack_rejects_length_mismatch() {
        let err = pack_2bpp(&[0; 7], 4, 2).unwrap_err();
        assert_eq!(
            err,
            GridError::LengthMismatch {
                expected: 8,
                actual: 7
            }
        );
    }

    #[test]
    fn test_unpack_inverts_pack() {
        let indices: Vec<u8> = (0..200 * 3).map(|i| ((i * 7 + i / 5) % 4) as u8).collect();
        let packed = pack_2bpp(&indices, 200, 3).unwrap();
        assert_eq!(packed.len(), 150);
        assert_eq!(unpack_2bpp(&packed, 200, 3).unwrap(), indices);
    }

    #[test]
    fn test_unpack_rejects_short_buffer() {
        let err = unpack_2bpp(&[0; 49], 200, 1).unwrap_err();
        assert_eq!(
            err,
            GridError::LengthMismatch {
                expected: 50,
                actual: 49
            }
        );
    }
}
