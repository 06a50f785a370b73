//! Segment parsers for the Image API URL grammar.
//!
//! ```text
//! {scheme}://{server}{prefix}/{identifier}/{region}/{size}/{rotation}/{quality}.{format}
//! {scheme}://{server}{prefix}/{identifier}/info.json
//! ```
//!
//! Each segment has its own parser so that a failure always names the segment
//! that rejected its input. Parsers receive a [`SplitUrl`] (query and fragment
//! already removed) and the [`UrlKind`] that decides where the fixed tail starts.

mod output;
mod path;
mod region;
mod rotation;
mod size;
mod split;

pub use output::{check_format, check_quality};
pub use path::{check_identifier, check_prefix, check_scheme, check_server};
pub use region::check_region;
pub use rotation::check_rotation;
pub use size::check_size;
pub use split::SplitUrl;

use serde::{Deserialize, Serialize};

use crate::error::{ParameterErrorKind, Result};
use crate::registry::INFO_SUFFIX;

/// Which of the two canonical URL shapes a string is parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlKind {
    /// All nine segments.
    Image,
    /// `.../{identifier}/info.json`; rendition segments take defaults.
    Info,
}

impl UrlKind {
    /// Info iff the path (after dropping query and fragment) ends in `info.json`.
    pub fn classify(url: &str) -> UrlKind {
        if SplitUrl::new(url).path.ends_with(INFO_SUFFIX) {
            UrlKind::Info
        } else {
            UrlKind::Image
        }
    }
}

/// Parser for one segment.
pub type SegmentParser = fn(&SplitUrl<'_>, UrlKind) -> Result<String>;

/// One of the nine grammar segments, in URL order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Scheme,
    Server,
    Prefix,
    Identifier,
    Region,
    Size,
    Rotation,
    Quality,
    Format,
}

impl Segment {
    pub const ALL: [Segment; 9] = [
        Segment::Scheme,
        Segment::Server,
        Segment::Prefix,
        Segment::Identifier,
        Segment::Region,
        Segment::Size,
        Segment::Rotation,
        Segment::Quality,
        Segment::Format,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Segment::Scheme => "scheme",
            Segment::Server => "server",
            Segment::Prefix => "prefix",
            Segment::Identifier => "identifier",
            Segment::Region => "region",
            Segment::Size => "size",
            Segment::Rotation => "rotation",
            Segment::Quality => "quality",
            Segment::Format => "format",
        }
    }

    pub fn parser(self) -> SegmentParser {
        match self {
            Segment::Scheme => path::parse_scheme,
            Segment::Server => path::parse_server,
            Segment::Prefix => path::parse_prefix,
            Segment::Identifier => path::parse_identifier,
            Segment::Region => region::parse_region,
            Segment::Size => size::parse_size,
            Segment::Rotation => rotation::parse_rotation,
            Segment::Quality => output::parse_quality,
            Segment::Format => output::parse_format,
        }
    }

    pub fn parse(self, url: &SplitUrl<'_>, kind: UrlKind) -> Result<String> {
        (self.parser())(url, kind)
    }

    /// Validates a bare value against this segment's grammar.
    ///
    /// Server and identifier only reject the path and query delimiters.
    pub fn check(self, value: &str) -> Result<()> {
        match self {
            Segment::Scheme => check_scheme(value),
            Segment::Server => check_server(value),
            Segment::Prefix => check_prefix(value),
            Segment::Identifier => check_identifier(value),
            Segment::Region => check_region(value),
            Segment::Size => check_size(value),
            Segment::Rotation => check_rotation(value),
            Segment::Quality => check_quality(value),
            Segment::Format => check_format(value),
        }
    }

    /// Error kind reported when this segment fails or does not round-trip.
    pub fn error_kind(self) -> ParameterErrorKind {
        match self {
            Segment::Scheme => ParameterErrorKind::InvalidScheme,
            Segment::Server => ParameterErrorKind::InvalidServer,
            Segment::Prefix => ParameterErrorKind::InvalidPrefix,
            Segment::Identifier => ParameterErrorKind::InvalidIdentifier,
            Segment::Region => ParameterErrorKind::InvalidRegion,
            Segment::Size => ParameterErrorKind::InvalidSize,
            Segment::Rotation => ParameterErrorKind::InvalidRotation,
            Segment::Quality => ParameterErrorKind::InvalidQuality,
            Segment::Format => ParameterErrorKind::InvalidFormat,
        }
    }
}
