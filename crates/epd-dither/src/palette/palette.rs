//! The two closed panel palettes and nearest-color matching.
//!
//! Both palettes are declared as ordered entry tables. The declaration order
//! fixes the index codes, the nearest-color tie-break and the layout of the
//! bitmap color table, so every variant-specific decision lives in one
//! table instead of being spread over branching code.

use std::fmt;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// Number of entries in an 8-bit indexed color table.
pub const COLOR_TABLE_SIZE: usize = 256;

/// Name of a reference color on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    /// Black ink
    Black,
    /// White background
    White,
    /// Yellow ink (4-color panels only)
    Yellow,
    /// Red ink
    Red,
}

impl ColorName {
    /// Lowercase name, as used in logs and listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Black => "black",
            ColorName::White => "white",
            ColorName::Yellow => "yellow",
            ColorName::Red => "red",
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One palette entry: a named reference color and its output index code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Color name
    pub name: ColorName,
    /// Reference color as 8-bit sRGB bytes
    pub rgb: [u8; 3],
    /// Index code written to the output for this color
    pub code: u8,
}

const BLACK: [u8; 3] = [0, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];
const YELLOW: [u8; 3] = [255, 255, 0];
const RED: [u8; 3] = [255, 0, 0];

const BWRY_ENTRIES: &[PaletteEntry] = &[
    PaletteEntry {
        name: ColorName::Black,
        rgb: BLACK,
        code: 0b00,
    },
    PaletteEntry {
        name: ColorName::White,
        rgb: WHITE,
        code: 0b01,
    },
    PaletteEntry {
        name: ColorName::Yellow,
        rgb: YELLOW,
        code: 0b10,
    },
    PaletteEntry {
        name: ColorName::Red,
        rgb: RED,
        code: 0b11,
    },
];

const BWR_ENTRIES: &[PaletteEntry] = &[
    PaletteEntry {
        name: ColorName::Black,
        rgb: BLACK,
        code: 0b00,
    },
    PaletteEntry {
        name: ColorName::White,
        rgb: WHITE,
        code: 0b01,
    },
    PaletteEntry {
        name: ColorName::Red,
        rgb: RED,
        code: 0b10,
    },
];

/// Palette variant supported by the panels.
///
/// Parsed from the configuration selector strings `"bwry"` and `"bwr"`
/// (case-insensitive).
///
/// # Example
///
/// ```
/// use epd_dither::PaletteFormat;
///
/// let format: PaletteFormat = "bwr".parse().unwrap();
/// assert_eq!(format, PaletteFormat::Bwr);
/// assert!("rgb".parse::<PaletteFormat>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteFormat {
    /// 4-color: black, white, yellow, red
    #[default]
    Bwry,
    /// 3-color: black, white, red
    Bwr,
}

impl PaletteFormat {
    /// The configuration selector for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteFormat::Bwry => "bwry",
            PaletteFormat::Bwr => "bwr",
        }
    }

    /// Number of live colors in this format.
    pub fn color_count(&self) -> usize {
        self.entries().len()
    }

    fn entries(&self) -> &'static [PaletteEntry] {
        match self {
            PaletteFormat::Bwry => BWRY_ENTRIES,
            PaletteFormat::Bwr => BWR_ENTRIES,
        }
    }
}

impl fmt::Display for PaletteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteFormat {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bwry" => Ok(PaletteFormat::Bwry),
            "bwr" => Ok(PaletteFormat::Bwr),
            _ => Err(PaletteError::UnknownFormat(s.to_string())),
        }
    }
}

/// An immutable panel palette.
///
/// Entry `i` always carries index code `i`; codes are contiguous from zero.
/// Float versions of the reference colors are precomputed at construction
/// so per-pixel matching does no conversion.
///
/// # Example
///
/// ```
/// use epd_dither::{ColorName, Palette, PaletteFormat, Rgb};
///
/// let palette = Palette::new(PaletteFormat::Bwry);
/// assert_eq!(palette.len(), 4);
/// assert_eq!(palette.nearest(Rgb::from_u8(240, 230, 20)), ColorName::Yellow);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    format: PaletteFormat,
    entries: &'static [PaletteEntry],
    colors: Vec<Rgb>,
}

impl Palette {
    /// Build the palette for a format variant.
    pub fn new(format: PaletteFormat) -> Self {
        let entries = format.entries();
        debug_assert!(entries
            .iter()
            .enumerate()
            .all(|(i, entry)| entry.code as usize == i));
        Self {
            format,
            entries,
            colors: entries.iter().map(|e| Rgb::from_bytes(e.rgb)).collect(),
        }
    }

    /// Build a palette from a format selector string.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::UnknownFormat`] carrying the offending value.
    pub fn from_name(name: &str) -> Result<Self, PaletteError> {
        Ok(Self::new(name.parse()?))
    }

    /// The format variant this palette was built for.
    #[inline]
    pub fn format(&self) -> PaletteFormat {
        self.format
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: both palette variants have at least three entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        self.entries
    }

    /// Entry at the given index.
    #[inline]
    pub fn entry(&self, idx: usize) -> &PaletteEntry {
        &self.entries[idx]
    }

    /// Reference color at the given index, as floats.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// Index code assigned to a named color, if this palette has it.
    pub fn code_of(&self, name: ColorName) -> Option<u8> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.code)
    }

    /// Find the index of the palette color nearest to `pixel`.
    ///
    /// Distance is squared Euclidean distance over the three channels. The
    /// pixel is compared as given, out-of-range channels included. On a tie
    /// the entry declared first wins.
    pub fn find_nearest(&self, pixel: Rgb) -> usize {
        let mut best_idx = 0;
        let mut best_dist = f32::INFINITY;
        for (i, &color) in self.colors.iter().enumerate() {
            let dist = pixel.distance_sq(color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }
        best_idx
    }

    /// Name of the palette color nearest to `pixel`.
    #[inline]
    pub fn nearest(&self, pixel: Rgb) -> ColorName {
        self.entries[self.find_nearest(pixel)].name
    }

    /// Build the 256-entry color table for an 8-bit indexed bitmap.
    ///
    /// The palette colors come first in declaration order. A 3-color
    /// palette gets a duplicate black in slot 3 so the live region is four
    /// entries wide. Everything after that is black (zero).
    pub fn color_table(&self) -> Vec<[u8; 3]> {
        let mut table: Vec<[u8; 3]> = self.entries.iter().map(|e| e.rgb).collect();
        if self.format == PaletteFormat::Bwr {
            table.push(BLACK);
        }
        table.resize(COLOR_TABLE_SIZE, [0, 0, 0]);
        table
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(PaletteFormat::default())
    }
}
