//! Public API for the epd-dither crate.
//!
//! This module provides the high-level API: [`EpdDitherer`] builder and
//! [`DitherError`] unified error type.

mod builder;
mod error;

pub use builder::EpdDitherer;
pub use error::DitherError;
