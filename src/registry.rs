//! Closed registries of schemes, qualities, and image formats.
//!
//! These are part of the public contract so that callers can offer the same
//! choices the grammar accepts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ParameterErrorKind};

/// JSON-LD context URL for Image API 2.x service descriptions.
pub const IMAGE_API_CONTEXT: &str = "http://iiif.io/api/image/2/context.json";

/// Schemes accepted by the scheme segment.
pub const VALID_SCHEMES: &[&str] = &["http", "https"];

/// Qualities accepted by the quality segment.
pub const VALID_QUALITIES: &[&str] = &["color", "gray", "bitonal", "default"];

/// Extensions accepted by the format segment, in registry order.
pub const IMAGE_FORMAT_EXTENSIONS: &[&str] = &["jpg", "tif", "png", "gif", "jp2", "pdf", "webp"];

/// Literal suffix that marks an info document URL.
pub const INFO_SUFFIX: &str = "info.json";

pub const DEFAULT_REGION: &str = "full";
pub const DEFAULT_SIZE: &str = "full";
pub const DEFAULT_ROTATION: &str = "0";
pub const DEFAULT_QUALITY: &str = "default";
pub const DEFAULT_FORMAT: &str = "jpg";

/// A registered output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpg,
    Tif,
    Png,
    Gif,
    Jp2,
    Pdf,
    Webp,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 7] = [
        ImageFormat::Jpg,
        ImageFormat::Tif,
        ImageFormat::Png,
        ImageFormat::Gif,
        ImageFormat::Jp2,
        ImageFormat::Pdf,
        ImageFormat::Webp,
    ];

    /// URL extension, e.g. `jpg`.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Jpg => "jpg",
            ImageFormat::Tif => "tif",
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
            ImageFormat::Jp2 => "jp2",
            ImageFormat::Pdf => "pdf",
            ImageFormat::Webp => "webp",
        }
    }

    /// Human-readable name for presenting format choices.
    pub fn label(self) -> &'static str {
        match self {
            ImageFormat::Jpg => "JPEG",
            ImageFormat::Tif => "TIFF",
            ImageFormat::Png => "PNG",
            ImageFormat::Gif => "GIF",
            ImageFormat::Jp2 => "JPEG2000",
            ImageFormat::Pdf => "PDF",
            ImageFormat::Webp => "WebP",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Jpg => "image/jpeg",
            ImageFormat::Tif => "image/tiff",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Jp2 => "image/jp2",
            ImageFormat::Pdf => "application/pdf",
            ImageFormat::Webp => "image/webp",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageFormat::ALL
            .into_iter()
            .find(|f| f.extension() == s)
            .ok_or_else(|| ParameterError::new(ParameterErrorKind::InvalidFormat, s))
    }
}
