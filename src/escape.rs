//! Percent-escaping for identifiers.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the RFC 3986 unreserved characters is escaped, `/` included.
const IDENTIFIER: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Escapes an identifier for inclusion as a single path segment.
///
/// - `"apf/2/apf2-00001.tif"` → `"apf%2F2%2Fapf2-00001.tif"`
/// - `"a b"` → `"a%20b"`
pub fn escape_identifier(identifier: &str) -> String {
    utf8_percent_encode(identifier, IDENTIFIER).to_string()
}

/// Reverses [`escape_identifier`]. Invalid UTF-8 sequences are replaced lossily.
pub fn unescape_identifier(identifier: &str) -> Cow<'_, str> {
    percent_decode_str(identifier).decode_utf8_lossy()
}
