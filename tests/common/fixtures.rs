//! Test fixtures: scratch directories and synthetic input images.

use image::{Rgb, RgbImage};
use std::path::PathBuf;
use tempfile::TempDir;

/// Reference colors
pub mod colors {
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const YELLOW: [u8; 3] = [255, 255, 0];
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const MID_GREY: [u8; 3] = [128, 128, 128];
}

/// Scratch directory removed when dropped
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Save an image; the format follows the file extension
    pub fn write_image(&self, name: &str, img: &RgbImage) -> PathBuf {
        let path = self.path(name);
        img.save(&path).expect("Failed to save fixture image");
        path
    }

    pub fn write_solid(&self, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
        self.write_image(name, &RgbImage::from_pixel(width, height, Rgb(color)))
    }

    /// Horizontal black-to-white ramp
    pub fn write_gradient(&self, name: &str, width: u32, height: u32) -> PathBuf {
        self.write_image(name, &gradient(width, height))
    }

    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture file");
        path
    }

    pub fn read(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.path(name)).expect("Failed to read output file")
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / (width - 1).max(1)) as u8;
        Rgb([v, v, v])
    })
}

/// Horizontal bands of the given colors, `height / colors.len()` rows each,
/// the last band taking the remainder
pub fn bands(width: u32, height: u32, band_colors: &[[u8; 3]]) -> RgbImage {
    let n = band_colors.len() as u32;
    let band = height / n;
    RgbImage::from_fn(width, height, |_, y| {
        Rgb(band_colors[(y / band).min(n - 1) as usize])
    })
}
