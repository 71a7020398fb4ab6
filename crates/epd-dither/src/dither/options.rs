//! Dithering options and configuration.

/// Configuration options for error diffusion dithering.
///
/// # Defaults
///
/// - Clamp input: disabled. Error-adjusted pixels are classified and their
///   error computed from the raw `f32` values, out-of-range channels
///   included. Nothing is rounded or truncated to integers between steps,
///   so pixels sitting on a decision boundary may classify differently
///   from a quantizer that works in whole numbers.
///
/// # Example
///
/// ```
/// use epd_dither::DitherOptions;
///
/// let options = DitherOptions::new().clamp_input(true);
/// assert!(options.clamp_input);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DitherOptions {
    /// Clamp each error-adjusted pixel to 0..=255 before classifying it.
    ///
    /// The clamped value is also the one the quantization error is measured
    /// from, so clamped-away energy is not diffused further.
    ///
    /// Default: `false`
    pub clamp_input: bool,
}

impl DitherOptions {
    /// Create new dither options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set input clamping.
    #[inline]
    pub fn clamp_input(mut self, enabled: bool) -> Self {
        self.clamp_input = enabled;
        self
    }
}
