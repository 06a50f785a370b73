//! Region grammar: `full`, `square`, `x,y,w,h`, or `pct:x,y,w,h`.

use crate::error::{ParameterError, ParameterErrorKind, Result};

use super::{SplitUrl, UrlKind};

/// Validates a region value on its own.
///
/// - `"full"`, `"square"`
/// - `"125,15,120,140"`: four non-negative integers
/// - `"pct:41.6,7.5,40,70"`: four floats
pub fn check_region(value: &str) -> Result<()> {
    let ok = match value {
        "full" | "square" => true,
        _ => match value.strip_prefix("pct:") {
            Some(list) => four(list, |s| s.parse::<f64>().is_ok()),
            None => four(value, is_digits),
        },
    };
    if ok {
        Ok(())
    } else {
        Err(ParameterError::new(ParameterErrorKind::InvalidRegion, value))
    }
}

pub fn parse_region(url: &SplitUrl<'_>, _kind: UrlKind) -> Result<String> {
    let value = url
        .from_end(4)
        .ok_or_else(|| ParameterError::new(ParameterErrorKind::InvalidRegion, url.path))?;
    check_region(value)?;
    Ok(value.to_string())
}

fn four(list: &str, valid: impl Fn(&str) -> bool) -> bool {
    let parts: Vec<&str> = list.split(',').collect();
    parts.len() == 4 && parts.into_iter().all(valid)
}

pub(super) fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
