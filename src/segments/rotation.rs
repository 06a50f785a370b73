//! Rotation grammar: optional `!` (mirror) then degrees in `[0, 360]`.

use crate::error::{ParameterError, ParameterErrorKind, Result};

use super::{SplitUrl, UrlKind};

const MAX_DEGREES: f64 = 360.0;

pub fn check_rotation(value: &str) -> Result<()> {
    let degrees = value.strip_prefix('!').unwrap_or(value);
    match degrees.parse::<f64>() {
        // Closed on both ends; NaN fails the range check.
        Ok(v) if (0.0..=MAX_DEGREES).contains(&v) => Ok(()),
        _ => Err(ParameterError::new(ParameterErrorKind::InvalidRotation, value)),
    }
}

pub fn parse_rotation(url: &SplitUrl<'_>, _kind: UrlKind) -> Result<String> {
    let value = url
        .from_end(2)
        .ok_or_else(|| ParameterError::new(ParameterErrorKind::InvalidRotation, url.path))?;
    check_rotation(value)?;
    Ok(value.to_string())
}
