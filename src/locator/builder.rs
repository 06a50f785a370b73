//! Builder for locators assembled from parts rather than parsed from a URL.

use crate::config::{LocatorConfig, RenditionDefaults};
use crate::error::Result;
use crate::escape::escape_identifier;
use crate::segments::check_prefix;

use super::ImageLocator;

/// Collects fields for an [`ImageLocator`].
///
/// Rendition fields start at the defaults (`full/full/0/default.jpg` unless a
/// config says otherwise) and the identifier is escaped on `build` unless
/// [`LocatorBuilder::escape_identifier`] turns that off.
#[derive(Debug, Clone)]
pub struct LocatorBuilder {
    scheme: String,
    server: String,
    prefix: String,
    identifier: String,
    rendition: RenditionDefaults,
    escape_identifier: bool,
    validate: bool,
}

impl LocatorBuilder {
    pub fn new(
        scheme: impl Into<String>,
        server: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            server: server.into(),
            prefix: String::new(),
            identifier: identifier.into(),
            rendition: RenditionDefaults::default(),
            escape_identifier: true,
            validate: true,
        }
    }

    /// Takes rendition defaults and the escaping policy from `config`.
    pub fn with_config(mut self, config: &LocatorConfig) -> Self {
        self.rendition = config.defaults.clone();
        self.escape_identifier = config.escape_identifiers;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.rendition.region = region.into();
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.rendition.size = size.into();
        self
    }

    pub fn rotation(mut self, rotation: impl Into<String>) -> Self {
        self.rendition.rotation = rotation.into();
        self
    }

    pub fn quality(mut self, quality: impl Into<String>) -> Self {
        self.rendition.quality = quality.into();
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.rendition.format = format.into();
        self
    }

    pub fn escape_identifier(mut self, escape: bool) -> Self {
        self.escape_identifier = escape;
        self
    }

    /// Skip the round-trip check in `build`. The prefix rule still applies.
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn build(self) -> Result<ImageLocator> {
        check_prefix(&self.prefix)?;
        let identifier = if self.escape_identifier {
            escape_identifier(&self.identifier)
        } else {
            self.identifier
        };
        let RenditionDefaults {
            region,
            size,
            rotation,
            quality,
            format,
        } = self.rendition;
        ImageLocator::new(
            self.scheme,
            self.server,
            self.prefix,
            identifier,
            region,
            size,
            rotation,
            quality,
            format,
            self.validate,
        )
    }
}
