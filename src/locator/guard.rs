//! Field setters that keep the round-trip invariant.
//!
//! Every setter writes the candidate value, revalidates the whole locator, and
//! restores the previous value if validation fails. Setters take `&mut self`,
//! so a locator has one writer at a time.

use crate::error::Result;
use crate::escape::escape_identifier;
use crate::segments::{check_prefix, Segment};

use super::ImageLocator;

/// Whether [`ImageLocator::set_identifier_with`] escapes its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierEscape {
    /// Percent-escape everything outside the unreserved set.
    #[default]
    Escape,
    /// The value is already escaped; store it as given.
    AlreadyEscaped,
}

impl ImageLocator {
    fn set(&mut self, segment: Segment, value: String) -> Result<()> {
        let old = std::mem::replace(self.field_mut(segment), value);
        match self.validate() {
            Ok(()) => {
                tracing::trace!(
                    segment = segment.name(),
                    value = self.get(segment),
                    "locator field updated"
                );
                Ok(())
            }
            Err(e) => {
                let rejected = std::mem::replace(self.field_mut(segment), old);
                tracing::debug!(
                    segment = segment.name(),
                    rejected = %rejected,
                    error = %e,
                    "locator field rejected, previous value restored"
                );
                Err(e)
            }
        }
    }

    pub fn set_scheme(&mut self, scheme: impl Into<String>) -> Result<()> {
        self.set(Segment::Scheme, scheme.into())
    }

    pub fn set_server(&mut self, server: impl Into<String>) -> Result<()> {
        self.set(Segment::Server, server.into())
    }

    /// A non-empty prefix without a leading `/` is rejected before any round-trip.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> Result<()> {
        let prefix = prefix.into();
        check_prefix(&prefix)?;
        self.set(Segment::Prefix, prefix)
    }

    /// Sets the identifier, percent-escaping it first.
    pub fn set_identifier(&mut self, identifier: &str) -> Result<()> {
        self.set_identifier_with(identifier, IdentifierEscape::Escape)
    }

    pub fn set_identifier_with(&mut self, identifier: &str, escape: IdentifierEscape) -> Result<()> {
        let identifier = match escape {
            IdentifierEscape::Escape => escape_identifier(identifier),
            IdentifierEscape::AlreadyEscaped => identifier.to_string(),
        };
        self.set(Segment::Identifier, identifier)
    }

    pub fn set_region(&mut self, region: impl Into<String>) -> Result<()> {
        self.set(Segment::Region, region.into())
    }

    pub fn set_size(&mut self, size: impl Into<String>) -> Result<()> {
        self.set(Segment::Size, size.into())
    }

    pub fn set_rotation(&mut self, rotation: impl Into<String>) -> Result<()> {
        self.set(Segment::Rotation, rotation.into())
    }

    pub fn set_quality(&mut self, quality: impl Into<String>) -> Result<()> {
        self.set(Segment::Quality, quality.into())
    }

    pub fn set_format(&mut self, format: impl Into<String>) -> Result<()> {
        self.set(Segment::Format, format.into())
    }

    // Consuming variants: return the edited locator or the error, never a
    // half-edited value.

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Result<Self> {
        self.set_scheme(scheme)?;
        Ok(self)
    }

    pub fn with_server(mut self, server: impl Into<String>) -> Result<Self> {
        self.set_server(server)?;
        Ok(self)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Result<Self> {
        self.set_prefix(prefix)?;
        Ok(self)
    }

    /// Escapes `identifier`, like [`ImageLocator::set_identifier`].
    pub fn with_identifier(mut self, identifier: &str) -> Result<Self> {
        self.set_identifier(identifier)?;
        Ok(self)
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Result<Self> {
        self.set_region(region)?;
        Ok(self)
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Result<Self> {
        self.set_size(size)?;
        Ok(self)
    }

    pub fn with_rotation(mut self, rotation: impl Into<String>) -> Result<Self> {
        self.set_rotation(rotation)?;
        Ok(self)
    }

    pub fn with_quality(mut self, quality: impl Into<String>) -> Result<Self> {
        self.set_quality(quality)?;
        Ok(self)
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Result<Self> {
        self.set_format(format)?;
        Ok(self)
    }
}
