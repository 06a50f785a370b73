//! Size grammar: `full`, `max`, `w,`, `,h`, `pct:n`, `w,h`, `!w,h`.

use crate::error::{ParameterError, ParameterErrorKind, Result};

use super::region::is_digits;
use super::{SplitUrl, UrlKind};

/// Validates a size value on its own.
///
/// The single-dimension forms accept any signed integer (`"-5,"` passes);
/// only syntax is checked, never magnitude, so there is no length limit.
pub fn check_size(value: &str) -> Result<()> {
    let ok = if matches!(value, "full" | "max") {
        true
    } else if let Some(w) = value.strip_suffix(',') {
        is_integer(w)
    } else if let Some(h) = value.strip_prefix(',') {
        is_integer(h)
    } else if let Some(pct) = value.strip_prefix("pct:") {
        pct.parse::<f64>().is_ok()
    } else {
        let pair = value.strip_prefix('!').unwrap_or(value);
        match pair.split_once(',') {
            Some((w, h)) => is_digits(w) && is_digits(h),
            None => false,
        }
    };
    if ok {
        Ok(())
    } else {
        Err(ParameterError::new(ParameterErrorKind::InvalidSize, value))
    }
}

fn is_integer(s: &str) -> bool {
    is_digits(s.strip_prefix(['+', '-']).unwrap_or(s))
}

pub fn parse_size(url: &SplitUrl<'_>, _kind: UrlKind) -> Result<String> {
    let value = url
        .from_end(3)
        .ok_or_else(|| ParameterError::new(ParameterErrorKind::InvalidSize, url.path))?;
    check_size(value)?;
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords() {
        assert!(check_size("full").is_ok());
        assert!(check_size("max").is_ok());
        assert!(check_size("min").is_err());
    }

    #[test]
    fn single_dimension() {
        assert!(check_size("150,").is_ok());
        assert!(check_size(",150").is_ok());
        assert!(check_size("-5,").is_ok());
        assert!(check_size(",").is_err());
        assert!(check_size("a,").is_err());
        assert!(check_size("!150,").is_err());
        assert!(check_size("+5,").is_ok());
        assert!(check_size("--5,").is_err());
        assert!(check_size("-,").is_err());
    }

    #[test]
    fn single_dimension_has_no_magnitude_limit() {
        assert!(check_size("99999999999999999999,").is_ok());
        assert!(check_size(",99999999999999999999").is_ok());
        assert!(check_size("-99999999999999999999,").is_ok());
        let u = SplitUrl::new("https://h/id/full/99999999999999999999,/0/default.jpg");
        assert_eq!(
            parse_size(&u, UrlKind::Image).unwrap(),
            "99999999999999999999,"
        );
    }

    #[test]
    fn percent() {
        assert!(check_size("pct:50").is_ok());
        assert!(check_size("pct:12.5").is_ok());
        assert!(check_size("pct:").is_err());
        assert!(check_size("pct:half").is_err());
    }

    #[test]
    fn width_height() {
        assert!(check_size("225,100").is_ok());
        assert!(check_size("!225,100").is_ok());
        assert!(check_size("0,0").is_ok());
        assert!(check_size("225,100,3").is_err());
        assert!(check_size("!!225,100").is_err());
        assert!(check_size("225x100").is_err());
        assert!(check_size("-5,10").is_err());
    }

    #[test]
    fn parsed_from_third_segment_from_end() {
        let u = SplitUrl::new("https://h/id/full/!200,200/0/default.jpg");
        assert_eq!(parse_size(&u, UrlKind::Image).unwrap(), "!200,200");
        let err = parse_size(&SplitUrl::new("https://h/id/full/big/0/default.jpg"), UrlKind::Image)
            .unwrap_err();
        assert_eq!(err.kind, ParameterErrorKind::InvalidSize);
        assert_eq!(err.value, "big");
    }
}
