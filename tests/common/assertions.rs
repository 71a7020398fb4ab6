//! Assertion helpers for output containers.

use pretty_assertions::assert_eq;

/// Assert a 4EI file has the expected header and length
pub fn assert_4ei(data: &[u8], width: u16, height: u16) {
    assert!(data.len() >= 8, "4EI file too short: {} bytes", data.len());
    assert_eq!(&data[..4], b"4EI1", "Expected 4EI1 magic");
    assert_eq!(u16::from_le_bytes([data[4], data[5]]), width);
    assert_eq!(u16::from_le_bytes([data[6], data[7]]), height);
    assert_eq!(
        data.len(),
        8 + width as usize * height as usize / 4,
        "Unexpected 4EI length"
    );
}

/// Payload of a 4EI file
pub fn payload(data: &[u8]) -> &[u8] {
    &data[8..]
}

/// Fields of an 8-bit indexed BMP needed by the tests
pub struct BmpLayout {
    pub bits_per_pixel: u16,
    pub table_offset: usize,
    pub pixel_offset: usize,
}

fn u32_at(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

pub fn bmp_layout(data: &[u8]) -> BmpLayout {
    assert_eq!(&data[..2], b"BM", "Expected BMP signature");
    BmpLayout {
        bits_per_pixel: u16::from_le_bytes([data[28], data[29]]),
        table_offset: 14 + u32_at(data, 14) as usize,
        pixel_offset: u32_at(data, 10) as usize,
    }
}

/// Color table as RGB triples (stored BGRx on disk)
pub fn bmp_color_table(data: &[u8]) -> Vec<[u8; 3]> {
    let layout = bmp_layout(data);
    data[layout.table_offset..layout.pixel_offset]
        .chunks_exact(4)
        .map(|bgrx| [bgrx[2], bgrx[1], bgrx[0]])
        .collect()
}
