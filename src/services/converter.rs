use std::path::Path;

use epd_dither::output::{stripe_pattern, PIXELS_PER_BYTE};
use epd_dither::{DitheredImage, EpdDitherer, Palette};
use image::RgbImage;

use crate::error::ConvertError;
use crate::models::{ConvertConfig, DisplaySpec, OutputEncoding};
use crate::rendering::{encode_bmp, encode_preview, four_ei, loader};

/// Conversion pipeline: load -> quantize -> encode
///
/// Holds the validated palette and panel geometry for one set of settings;
/// every call is independent.
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConvertConfig,
    spec: DisplaySpec,
    ditherer: EpdDitherer,
}

impl Converter {
    /// Validate the settings. Fails with `InvalidPaletteFormat` before any
    /// image is touched.
    pub fn new(config: ConvertConfig) -> Result<Self, ConvertError> {
        let format = config.palette_format()?;
        let spec = config.display_spec()?;
        spec.validate()?;

        let ditherer = EpdDitherer::new(Palette::new(format))
            .dither_enabled(config.dither)
            .clamp_input(config.clamp);

        tracing::debug!(
            format = %format,
            width = spec.width,
            height = spec.height,
            dither = config.dither,
            clamp = config.clamp,
            "Converter ready"
        );

        Ok(Self {
            config,
            spec,
            ditherer,
        })
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        self.ditherer.palette()
    }

    pub fn display_spec(&self) -> DisplaySpec {
        self.spec
    }

    /// Encoding for an output path: explicit choice, else the file
    /// extension, else the configured default.
    pub fn encoding_for(
        &self,
        output: &Path,
        explicit: Option<OutputEncoding>,
    ) -> OutputEncoding {
        explicit
            .or_else(|| OutputEncoding::from_path(output))
            .unwrap_or(self.config.encoding)
    }

    /// Quantize an RGB image, resizing it to the panel size first if needed
    pub fn quantize(&self, img: RgbImage) -> Result<DitheredImage, ConvertError> {
        let img = loader::fit_to_display(img, self.spec);
        let (width, height) = (img.width() as usize, img.height() as usize);
        let pixels = loader::to_pixels(&img);
        self.ditherer
            .dither(&pixels, width, height)
            .map_err(|e| ConvertError::dither(e, width, height))
    }

    /// Serialize an index grid in the requested container
    pub fn encode(
        &self,
        image: &DitheredImage,
        encoding: OutputEncoding,
    ) -> Result<Vec<u8>, ConvertError> {
        match encoding {
            OutputEncoding::FourEi => four_ei::encode(image),
            OutputEncoding::Bmp => encode_bmp(image),
            OutputEncoding::Png => encode_preview(image),
        }
    }

    /// Quantize and encode an in-memory image
    pub fn convert_image(
        &self,
        img: RgbImage,
        encoding: OutputEncoding,
    ) -> Result<Vec<u8>, ConvertError> {
        self.check_encodable(encoding)?;
        let image = self.quantize(img)?;
        self.encode(&image, encoding)
    }

    /// Convert an image file and write the result; returns the bytes written
    pub fn convert_file(
        &self,
        input: &Path,
        output: &Path,
        encoding: OutputEncoding,
    ) -> Result<usize, ConvertError> {
        self.check_encodable(encoding)?;
        let img = loader::load_for_display(input, self.spec)?;
        let image = self.quantize(img)?;
        let bytes = self.encode(&image, encoding)?;
        std::fs::write(output, &bytes)?;

        let counts = image.histogram();
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            encoding = %encoding,
            format = %self.palette().format(),
            bytes = bytes.len(),
            ?counts,
            "Converted image"
        );
        Ok(bytes.len())
    }

    /// Horizontal bands, one per palette color, at panel size
    pub fn test_pattern(&self, encoding: OutputEncoding) -> Result<Vec<u8>, ConvertError> {
        let (width, height) = (self.spec.width as usize, self.spec.height as usize);
        let image = stripe_pattern(self.palette(), width, height)
            .map_err(|e| ConvertError::grid(e, width, height))?;
        self.encode(&image, encoding)
    }

    /// Pack a bitmap that was already prepared at panel size: every pixel is
    /// classified to its nearest palette color without diffusion or resizing.
    pub fn pack_prepared(&self, input: &Path) -> Result<Vec<u8>, ConvertError> {
        self.check_encodable(OutputEncoding::FourEi)?;
        let img = loader::load_exact(input, self.spec)?;
        let (width, height) = (img.width() as usize, img.height() as usize);
        let image = self
            .ditherer
            .clone()
            .dither_enabled(false)
            .dither(&loader::to_pixels(&img), width, height)
            .map_err(|e| ConvertError::dither(e, width, height))?;
        four_ei::encode(&image)
    }

    /// Parse a 4EI file using this converter's palette
    pub fn decode_4ei(&self, data: &[u8]) -> Result<DitheredImage, ConvertError> {
        four_ei::decode(data, self.palette())
    }

    fn check_encodable(&self, encoding: OutputEncoding) -> Result<(), ConvertError> {
        let DisplaySpec { width, height } = self.spec;
        if encoding == OutputEncoding::FourEi {
            if width as usize % PIXELS_PER_BYTE != 0 {
                return Err(ConvertError::UnsupportedGridDimensions {
                    width: width as usize,
                    height: height as usize,
                    reason: format!("4EI needs a width divisible by {PIXELS_PER_BYTE}"),
                });
            }
            if width > u16::MAX as u32 || height > u16::MAX as u32 {
                return Err(ConvertError::UnsupportedGridDimensions {
                    width: width as usize,
                    height: height as usize,
                    reason: "4EI header fields are 16-bit".to_string(),
                });
            }
        }
        Ok(())
    }
}
