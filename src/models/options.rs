use crate::assets;
use crate::error::ConfigurationError;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

/// Sampling/interpolation quality preset.
///
/// Selects both the estimator's sampling stride (see [`Quality::stride`]) and
/// the drawing-surface filter hints. Lower stride means denser sampling and a
/// more accurate tile color at higher cost (cost scales as
/// `tile pixel count / stride`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Fast,
    Good,
    Best,
    Nearest,
    Bilinear,
}

impl Quality {
    /// Preset sampling stride: every N-th pixel of a tile buffer is sampled.
    pub fn stride(self) -> u32 {
        match self {
            Quality::Fast => 8,
            Quality::Good => 5,
            Quality::Best => 3,
            Quality::Nearest => 2,
            Quality::Bilinear => 1,
        }
    }

    /// Drawing-surface filter hint corresponding to this preset.
    pub fn filter_quality(self) -> tiny_skia::FilterQuality {
        match self {
            Quality::Fast | Quality::Nearest => tiny_skia::FilterQuality::Nearest,
            Quality::Good | Quality::Bilinear => tiny_skia::FilterQuality::Bilinear,
            Quality::Best => tiny_skia::FilterQuality::Bicubic,
        }
    }
}

impl FromStr for Quality {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fast" => Ok(Quality::Fast),
            "good" => Ok(Quality::Good),
            "best" => Ok(Quality::Best),
            "nearest" => Ok(Quality::Nearest),
            "bilinear" => Ok(Quality::Bilinear),
            other => Err(ConfigurationError::UnknownQuality(other.to_string())),
        }
    }
}

/// Target encoding for the rendered mosaic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl FromStr for OutputFormat {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "png" => Ok(OutputFormat::Png),
            other => Err(ConfigurationError::UnknownFormat(other.to_string())),
        }
    }
}

/// A source the image decoder accepts: an encoded byte buffer or a file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

// Config files name sprites by path; byte sources only exist in-process.
impl<'de> Deserialize<'de> for ImageSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        PathBuf::deserialize(deserializer).map(ImageSource::Path)
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        ImageSource::Bytes(bytes)
    }
}

impl From<&[u8]> for ImageSource {
    fn from(bytes: &[u8]) -> Self {
        ImageSource::Bytes(bytes.to_vec())
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&std::path::Path> for ImageSource {
    fn from(path: &std::path::Path) -> Self {
        ImageSource::Path(path.to_path_buf())
    }
}

/// Render configuration, merged over defaults once per call and read-only
/// thereafter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Output encoding.
    pub format: OutputFormat,

    /// Quality preset; drives the sampling stride and the filter hints.
    pub quality: Quality,

    /// Explicit sampling stride, overriding the `quality` preset.
    pub pixel_interval: Option<u32>,

    /// Pattern filter hint override (falls back to `quality`).
    pub pattern_quality: Option<Quality>,

    /// Image filter hint override (falls back to `quality`).
    pub filter_quality: Option<Quality>,

    /// Alternate brick sprite. `None` uses the bundled sprite.
    pub brick: Option<ImageSource>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Jpeg,
            quality: Quality::Good,
            pixel_interval: None,
            pattern_quality: None,
            filter_quality: None,
            brick: None,
        }
    }
}

impl RenderOptions {
    /// Sampling stride for the color estimator.
    ///
    /// `pixel_interval` wins over the `quality` preset. A zero interval is
    /// rejected here rather than producing a degenerate estimate downstream.
    pub fn resolve_stride(&self) -> Result<u32, ConfigurationError> {
        match self.pixel_interval {
            Some(0) => Err(ConfigurationError::ZeroPixelInterval),
            Some(stride) => Ok(stride),
            None => Ok(self.quality.stride()),
        }
    }

    /// Filter hint for pattern draws (sprite blits).
    pub fn resolve_pattern_quality(&self) -> tiny_skia::FilterQuality {
        self.pattern_quality.unwrap_or(self.quality).filter_quality()
    }

    /// Filter hint for image draws (the base layer).
    pub fn resolve_filter_quality(&self) -> tiny_skia::FilterQuality {
        self.filter_quality.unwrap_or(self.quality).filter_quality()
    }

    /// The brick sprite source, falling back to the bundled asset.
    pub fn brick_source(&self) -> ImageSource {
        self.brick
            .clone()
            .unwrap_or_else(|| ImageSource::Bytes(assets::default_brick().to_vec()))
    }
}
