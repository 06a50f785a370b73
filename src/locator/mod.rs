//! The `ImageLocator` entity: nine validated fields and their two canonical URL forms.
//!
//! A locator is valid iff serialising it to an image request URL and parsing
//! that URL back reproduces every field. Construction from fields checks this
//! (unless asked not to), and every setter in [`guard`] keeps it true.

mod builder;
mod guard;

pub use builder::LocatorBuilder;
pub use guard::IdentifierEscape;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::RenditionDefaults;
use crate::error::{ParameterError, Result};
use crate::escape::unescape_identifier;
use crate::registry::INFO_SUFFIX;
use crate::segments::{Segment, SplitUrl, UrlKind};

/// A parsed, validated Image API URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LocatorFields")]
pub struct ImageLocator {
    scheme: String,
    server: String,
    prefix: String,
    identifier: String,
    region: String,
    size: String,
    rotation: String,
    quality: String,
    format: String,
}

/// Unvalidated field set; deserialisation goes through [`ImageLocator::new`].
#[derive(Deserialize)]
struct LocatorFields {
    scheme: String,
    server: String,
    #[serde(default)]
    prefix: String,
    identifier: String,
    #[serde(default = "RenditionDefaults::region_default")]
    region: String,
    #[serde(default = "RenditionDefaults::size_default")]
    size: String,
    #[serde(default = "RenditionDefaults::rotation_default")]
    rotation: String,
    #[serde(default = "RenditionDefaults::quality_default")]
    quality: String,
    #[serde(default = "RenditionDefaults::format_default")]
    format: String,
}

impl TryFrom<LocatorFields> for ImageLocator {
    type Error = ParameterError;

    fn try_from(f: LocatorFields) -> Result<Self> {
        ImageLocator::new(
            f.scheme,
            f.server,
            f.prefix,
            f.identifier,
            f.region,
            f.size,
            f.rotation,
            f.quality,
            f.format,
            true,
        )
    }
}

impl ImageLocator {
    /// Builds a locator from explicit field values.
    ///
    /// With `validate` set, construction fails unless the fields round-trip
    /// through the image request URL. Values are stored exactly as given; the
    /// identifier is not escaped here (see [`ImageLocator::builder`]).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        scheme: impl Into<String>,
        server: impl Into<String>,
        prefix: impl Into<String>,
        identifier: impl Into<String>,
        region: impl Into<String>,
        size: impl Into<String>,
        rotation: impl Into<String>,
        quality: impl Into<String>,
        format: impl Into<String>,
        validate: bool,
    ) -> Result<Self> {
        let locator = Self {
            scheme: scheme.into(),
            server: server.into(),
            prefix: prefix.into(),
            identifier: identifier.into(),
            region: region.into(),
            size: size.into(),
            rotation: rotation.into(),
            quality: quality.into(),
            format: format.into(),
        };
        if validate {
            locator.validate()?;
        }
        Ok(locator)
    }

    /// Starts a builder with rendition fields at their defaults.
    pub fn builder(
        scheme: impl Into<String>,
        server: impl Into<String>,
        identifier: impl Into<String>,
    ) -> LocatorBuilder {
        LocatorBuilder::new(scheme, server, identifier)
    }

    /// Parses an image request URL; all nine segments must be valid.
    pub fn from_image_url(url: &str) -> Result<Self> {
        Self::parse(url, UrlKind::Image)
    }

    /// Parses an info URL; rendition fields take the built-in defaults.
    pub fn from_info_url(url: &str) -> Result<Self> {
        Self::parse(url, UrlKind::Info)
    }

    /// Parses an info URL, filling rendition fields from `defaults`.
    pub fn from_info_url_with(url: &str, defaults: &RenditionDefaults) -> Result<Self> {
        Self::parse_with(url, UrlKind::Info, defaults)
    }

    /// Parses either URL shape, choosing by the `info.json` suffix.
    pub fn from_url(url: &str) -> Result<Self> {
        Self::parse(url, UrlKind::classify(url))
    }

    pub fn from_url_with(url: &str, defaults: &RenditionDefaults) -> Result<Self> {
        Self::parse_with(url, UrlKind::classify(url), defaults)
    }

    /// Parses `url` as the given shape, without classifying it.
    pub fn parse(url: &str, kind: UrlKind) -> Result<Self> {
        Self::parse_with(url, kind, &RenditionDefaults::default())
    }

    /// Runs the segment parsers in URL order; the first rejection wins.
    ///
    /// The result is then validated, so a URL whose segments parse but cannot
    /// reproduce themselves (e.g. `https:a/b/c/info.json`, where the missing
    /// authority leaves a prefix without a leading `/`) is rejected.
    pub fn parse_with(url: &str, kind: UrlKind, defaults: &RenditionDefaults) -> Result<Self> {
        let locator = Self::parse_segments(url, kind, defaults)?;
        locator.validate()?;
        Ok(locator)
    }

    fn parse_segments(url: &str, kind: UrlKind, defaults: &RenditionDefaults) -> Result<Self> {
        let split = SplitUrl::new(url);
        tracing::debug!(?kind, url = %split.normalized(), "parsing image api url");

        let segment = |s: Segment| s.parse(&split, kind);
        let scheme = segment(Segment::Scheme)?;
        let server = segment(Segment::Server)?;
        let prefix = segment(Segment::Prefix)?;
        let identifier = segment(Segment::Identifier)?;

        match kind {
            UrlKind::Image => Ok(Self {
                scheme,
                server,
                prefix,
                identifier,
                region: segment(Segment::Region)?,
                size: segment(Segment::Size)?,
                rotation: segment(Segment::Rotation)?,
                quality: segment(Segment::Quality)?,
                format: segment(Segment::Format)?,
            }),
            UrlKind::Info => Ok(Self {
                scheme,
                server,
                prefix,
                identifier,
                region: defaults.region.clone(),
                size: defaults.size.clone(),
                rotation: defaults.rotation.clone(),
                quality: defaults.quality.clone(),
                format: defaults.format.clone(),
            }),
        }
    }

    /// `{scheme}://{server}{prefix}/{identifier}/{region}/{size}/{rotation}/{quality}.{format}`
    pub fn to_image_url(&self) -> String {
        format!(
            "{}/{}/{}/{}/{}.{}",
            self.to_base_url(),
            self.region,
            self.size,
            self.rotation,
            self.quality,
            self.format
        )
    }

    /// `{scheme}://{server}{prefix}/{identifier}/info.json`
    pub fn to_info_url(&self) -> String {
        format!("{}/{}", self.to_base_url(), INFO_SUFFIX)
    }

    /// `{scheme}://{server}{prefix}/{identifier}`
    pub fn to_base_url(&self) -> String {
        format!(
            "{}://{}{}/{}",
            self.scheme, self.server, self.prefix, self.identifier
        )
    }

    /// The image request URL as a [`url::Url`], for handing to an HTTP client.
    ///
    /// This goes through WHATWG parsing, so the result may be normalised
    /// (lowercased host, default port dropped) and can fail where the grammar
    /// does not, e.g. on a server containing spaces.
    pub fn to_url(&self) -> std::result::Result<url::Url, url::ParseError> {
        url::Url::parse(&self.to_image_url())
    }

    /// Checks the round-trip invariant.
    ///
    /// Each stored value is first checked against its own grammar, in URL
    /// order, so a bad value is reported as itself. The image request URL is
    /// then reparsed and each field compared; a segment that parses to a
    /// different value reports the stored value under that segment's error
    /// kind. Does not modify `self`.
    pub fn validate(&self) -> Result<()> {
        for segment in Segment::ALL {
            segment.check(self.get(segment))?;
        }
        let reparsed = Self::parse_segments(
            &self.to_image_url(),
            UrlKind::Image,
            &RenditionDefaults::default(),
        )?;
        for segment in Segment::ALL {
            let stored = self.get(segment);
            if stored != reparsed.get(segment) {
                return Err(ParameterError::new(segment.error_kind(), stored));
            }
        }
        Ok(())
    }

    /// Value of one segment.
    pub fn get(&self, segment: Segment) -> &str {
        match segment {
            Segment::Scheme => &self.scheme,
            Segment::Server => &self.server,
            Segment::Prefix => &self.prefix,
            Segment::Identifier => &self.identifier,
            Segment::Region => &self.region,
            Segment::Size => &self.size,
            Segment::Rotation => &self.rotation,
            Segment::Quality => &self.quality,
            Segment::Format => &self.format,
        }
    }

    fn field_mut(&mut self, segment: Segment) -> &mut String {
        match segment {
            Segment::Scheme => &mut self.scheme,
            Segment::Server => &mut self.server,
            Segment::Prefix => &mut self.prefix,
            Segment::Identifier => &mut self.identifier,
            Segment::Region => &mut self.region,
            Segment::Size => &mut self.size,
            Segment::Rotation => &mut self.rotation,
            Segment::Quality => &mut self.quality,
            Segment::Format => &mut self.format,
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The identifier as stored (escaped).
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The identifier with percent-escapes decoded.
    pub fn decoded_identifier(&self) -> Cow<'_, str> {
        unescape_identifier(&self.identifier)
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn rotation(&self) -> &str {
        &self.rotation
    }

    pub fn quality(&self) -> &str {
        &self.quality
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}

impl fmt::Display for ImageLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_image_url())
    }
}

impl FromStr for ImageLocator {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_url(s)
    }
}

#[cfg(test)]
mod tests;
