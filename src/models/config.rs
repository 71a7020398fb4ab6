use crate::error::ConvertError;
use crate::models::DisplaySpec;
use epd_dither::PaletteFormat;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Output container written by a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum OutputEncoding {
    /// "4EI1" header + 2bpp packed data
    #[default]
    #[serde(rename = "4ei")]
    FourEi,
    /// 8-bit indexed bitmap with a 256-entry color table
    #[serde(rename = "bmp")]
    Bmp,
    /// 2-bit indexed PNG preview
    #[serde(rename = "png")]
    Png,
}

impl OutputEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputEncoding::FourEi => "4ei",
            OutputEncoding::Bmp => "bmp",
            OutputEncoding::Png => "png",
        }
    }

    /// Guess the encoding from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputEncoding {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "4ei" => Ok(OutputEncoding::FourEi),
            "bmp" => Ok(OutputEncoding::Bmp),
            "png" => Ok(OutputEncoding::Png),
            _ => Err(ConvertError::Config(format!(
                "unknown encoding '{s}' (expected '4ei', 'bmp' or 'png')"
            ))),
        }
    }
}

/// Conversion settings loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// Floyd-Steinberg error diffusion on/off
    #[serde(default = "default_dither")]
    pub dither: bool,

    /// Palette selector: "bwry" or "bwr"
    #[serde(default = "default_format")]
    pub format: String,

    /// Output container
    #[serde(default)]
    pub encoding: OutputEncoding,

    /// Panel width; unset means the format's 1.54" tag
    #[serde(default)]
    pub width: Option<u32>,

    /// Panel height; unset means the format's 1.54" tag
    #[serde(default)]
    pub height: Option<u32>,

    /// Clamp error-adjusted pixels to 0..=255 before classification
    #[serde(default)]
    pub clamp: bool,
}

fn default_dither() -> bool {
    true
}

fn default_format() -> String {
    PaletteFormat::default().as_str().to_string()
}

impl ConvertConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            format = %config.format,
            encoding = %config.encoding,
            dither = config.dither,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from a YAML string; an empty document yields defaults
    pub fn from_yaml(content: &str) -> Result<Self, ConvertError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConvertError::Config(e.to_string()))
    }

    /// Validated palette selector
    pub fn palette_format(&self) -> Result<PaletteFormat, ConvertError> {
        Ok(self.format.parse::<PaletteFormat>()?)
    }

    /// Panel geometry, falling back per side to the format's panel
    pub fn display_spec(&self) -> Result<DisplaySpec, ConvertError> {
        let panel = DisplaySpec::for_format(self.palette_format()?);
        Ok(DisplaySpec::new(
            self.width.unwrap_or(panel.width),
            self.height.unwrap_or(panel.height),
        ))
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            dither: default_dither(),
            format: default_format(),
            encoding: OutputEncoding::default(),
            width: None,
            height: None,
            clamp: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = ConvertConfig::default();

        assert!(config.dither);
        assert_eq!(config.format, "bwry");
        assert_eq!(config.encoding, OutputEncoding::FourEi);
        assert_eq!(config.display_spec().unwrap(), DisplaySpec::EPAPER_154_Y);
        assert!(!config.clamp);
    }

    #[test]
    fn test_parse_partial_yaml_fills_defaults() {
        let config = ConvertConfig::from_yaml("format: bwr\nencoding: bmp\n").unwrap();

        assert_eq!(config.palette_format().unwrap(), PaletteFormat::Bwr);
        assert_eq!(config.encoding, OutputEncoding::Bmp);
        assert!(config.dither);
        assert_eq!(config.width, None);
        assert_eq!(config.display_spec().unwrap(), DisplaySpec::EPAPER_154_B);
    }

    #[test]
    fn test_explicit_side_overrides_panel_default() {
        let config = ConvertConfig::from_yaml("format: bwr
height: 96
").unwrap();
        assert_eq!(config.display_spec().unwrap(), DisplaySpec::new(200, 96));
    }

    #[test]
    fn test_display_spec_needs_valid_format() {
        let config = ConvertConfig {
            format: "cmyk".to_string(),
            width: Some(8),
            height: Some(8),
            ..Default::default()
        };
        assert!(matches!(
            config.display_spec(),
            Err(ConvertError::InvalidPaletteFormat(_))
        ));
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
dither: false
format: BWRY
encoding: png
width: 128
height: 64
clamp: true
"#;
        let config = ConvertConfig::from_yaml(yaml).unwrap();

        assert!(!config.dither);
        assert_eq!(config.palette_format().unwrap(), PaletteFormat::Bwry);
        assert_eq!(config.encoding, OutputEncoding::Png);
        assert_eq!(config.display_spec().unwrap(), DisplaySpec::new(128, 64));
        assert!(config.clamp);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(ConvertConfig::from_yaml("").unwrap(), ConvertConfig::default());
    }

    #[test]
    fn test_unknown_encoding_is_config_error() {
        let err = ConvertConfig::from_yaml("encoding: gif").unwrap_err();
        assert!(matches!(err, ConvertError::Config(_)));
    }

    #[test]
    fn test_unknown_field_is_config_error() {
        let err = ConvertConfig::from_yaml("colour: red").unwrap_err();
        assert!(matches!(err, ConvertError::Config(_)));
    }

    #[test]
    fn test_invalid_format_reported_by_name() {
        let config = ConvertConfig {
            format: "rgb".to_string(),
            ..Default::default()
        };
        match config.palette_format() {
            Err(ConvertError::InvalidPaletteFormat(value)) => assert_eq!(value, "rgb"),
            other => panic!("Expected InvalidPaletteFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_encoding_from_path() {
        assert_eq!(
            OutputEncoding::from_path(&PathBuf::from("out.4EI")),
            Some(OutputEncoding::FourEi)
        );
        assert_eq!(
            OutputEncoding::from_path(&PathBuf::from("out.bmp")),
            Some(OutputEncoding::Bmp)
        );
        assert_eq!(OutputEncoding::from_path(&PathBuf::from("out.bin")), None);
        assert_eq!(OutputEncoding::from_path(&PathBuf::from("out")), None);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ConvertConfig::load(Path::new("/nonexistent/epd.yaml")).unwrap_err();
        assert!(matches!(err, ConvertError::Io(_)));
    }
}
