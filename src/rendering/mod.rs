pub mod bmp;
pub mod four_ei;
pub mod loader;
pub mod preview;

pub use bmp::encode_bmp;
pub use preview::encode_preview;
