//! Scheme, server, prefix, and identifier: the segments that locate the resource.

use crate::error::{ParameterError, ParameterErrorKind, Result};
use crate::registry::VALID_SCHEMES;

use super::{SplitUrl, UrlKind};

/// Segments an image request path keeps after the prefix:
/// identifier, region, size, rotation, quality.format.
const IMAGE_TAIL: usize = 5;
/// identifier, info.json.
const INFO_TAIL: usize = 2;

fn tail_len(kind: UrlKind) -> usize {
    match kind {
        UrlKind::Image => IMAGE_TAIL,
        UrlKind::Info => INFO_TAIL,
    }
}

pub fn check_scheme(value: &str) -> Result<()> {
    if VALID_SCHEMES.contains(&value) {
        Ok(())
    } else {
        Err(ParameterError::new(ParameterErrorKind::InvalidScheme, value))
    }
}

/// Characters that end a path segment or the path itself.
const DELIMITERS: [char; 3] = ['/', '?', '#'];

pub fn check_prefix(value: &str) -> Result<()> {
    if (value.is_empty() || value.starts_with('/')) && !value.contains(['?', '#']) {
        Ok(())
    } else {
        Err(ParameterError::new(ParameterErrorKind::InvalidPrefix, value))
    }
}

/// A server is one authority; anything that would start a path is rejected.
pub fn check_server(value: &str) -> Result<()> {
    if value.contains(DELIMITERS) {
        Err(ParameterError::new(ParameterErrorKind::InvalidServer, value))
    } else {
        Ok(())
    }
}

/// An identifier is one path segment; reserved characters must be escaped.
pub fn check_identifier(value: &str) -> Result<()> {
    if value.contains(DELIMITERS) {
        Err(ParameterError::new(ParameterErrorKind::InvalidIdentifier, value))
    } else {
        Ok(())
    }
}

pub fn parse_scheme(url: &SplitUrl<'_>, _kind: UrlKind) -> Result<String> {
    check_scheme(url.scheme)?;
    Ok(url.scheme.to_string())
}

/// Any authority is accepted, including an empty one.
pub fn parse_server(url: &SplitUrl<'_>, _kind: UrlKind) -> Result<String> {
    Ok(url.server.to_string())
}

/// Everything before the fixed tail, joined back with `/`.
///
/// The leading empty segment of an absolute path makes the join start with
/// `/`, so `/iiif/2/abc/info.json` yields `/iiif/2`.
pub fn parse_prefix(url: &SplitUrl<'_>, kind: UrlKind) -> Result<String> {
    let segments = url.segments();
    let tail = tail_len(kind);
    if segments.len() > tail + 1 {
        Ok(segments[..segments.len() - tail].join("/"))
    } else {
        Ok(String::new())
    }
}

/// Taken as-is; only a path too short to hold one is rejected.
pub fn parse_identifier(url: &SplitUrl<'_>, kind: UrlKind) -> Result<String> {
    url.from_end(tail_len(kind))
        .map(str::to_string)
        .ok_or_else(|| ParameterError::new(ParameterErrorKind::InvalidIdentifier, url.path))
}
