pub mod config;
pub mod display_spec;

pub use config::{ConvertConfig, OutputEncoding};
pub use display_spec::DisplaySpec;
