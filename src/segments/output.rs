//! Quality and format: the two halves of the final `quality.format` segment.

use crate::error::{ParameterError, ParameterErrorKind, Result};
use crate::registry::{IMAGE_FORMAT_EXTENSIONS, VALID_QUALITIES};

use super::{SplitUrl, UrlKind};

pub fn check_quality(value: &str) -> Result<()> {
    if VALID_QUALITIES.contains(&value) {
        Ok(())
    } else {
        Err(ParameterError::new(ParameterErrorKind::InvalidQuality, value))
    }
}

pub fn check_format(value: &str) -> Result<()> {
    if IMAGE_FORMAT_EXTENSIONS.contains(&value) {
        Ok(())
    } else {
        Err(ParameterError::new(ParameterErrorKind::InvalidFormat, value))
    }
}

/// Stem of the last segment, with a trailing `.<ext>` removed.
pub fn parse_quality(url: &SplitUrl<'_>, _kind: UrlKind) -> Result<String> {
    let last = url.from_end(1).unwrap_or_default();
    let stem = last.rsplit_once('.').map_or(last, |(stem, _)| stem);
    check_quality(stem)?;
    Ok(stem.to_string())
}

/// Extension of the last segment; a segment without `.` has none and is rejected.
pub fn parse_format(url: &SplitUrl<'_>, _kind: UrlKind) -> Result<String> {
    let last = url.from_end(1).unwrap_or_default();
    let (_, ext) = last
        .rsplit_once('.')
        .ok_or_else(|| ParameterError::new(ParameterErrorKind::InvalidFormat, last))?;
    check_format(ext)?;
    Ok(ext.to_string())
}
