//! Color types
//!
//! The pipeline works in plain RGB on the 0..=255 scale. Palette matching
//! uses squared Euclidean distance in that space.
//!
//! # Example
//!
//! ```
//! use epd_dither::Rgb;
//!
//! let pixel = Rgb::from_u8(250, 250, 10);
//! let yellow = Rgb::from_u8(255, 255, 0);
//! assert_eq!(pixel.distance_sq(yellow), 150.0);
//! ```

mod rgb;

pub use rgb::Rgb;
