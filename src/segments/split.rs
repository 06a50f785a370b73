//! Splits a URL into scheme, authority, and path, discarding query and fragment.
//!
//! No normalisation happens here: host case, default ports, dot segments, and
//! percent-escapes are all kept verbatim, so that a reassembled URL compares
//! byte-for-byte with its source.

/// Scheme/authority/path view of a URL with query and fragment removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitUrl<'a> {
    pub scheme: &'a str,
    pub server: &'a str,
    pub path: &'a str,
}

impl<'a> SplitUrl<'a> {
    pub fn new(url: &'a str) -> Self {
        let (scheme, rest) = match url.split_once(':') {
            Some((candidate, rest)) if is_scheme(candidate) => (candidate, rest),
            _ => ("", url),
        };

        // Query and fragment both end the authority and the path.
        let rest = match rest.find(['?', '#']) {
            Some(i) => &rest[..i],
            None => rest,
        };

        let (server, path) = match rest.strip_prefix("//") {
            Some(after) => match after.find('/') {
                Some(i) => (&after[..i], &after[i..]),
                None => (after, ""),
            },
            None => ("", rest),
        };

        Self {
            scheme,
            server,
            path,
        }
    }

    /// Path split on `/`; a leading `/` yields a leading empty segment.
    pub fn segments(&self) -> Vec<&'a str> {
        self.path.split('/').collect()
    }

    /// The `n`th segment counting from the end (1 = last).
    pub fn from_end(&self, n: usize) -> Option<&'a str> {
        let segments = self.segments();
        segments.len().checked_sub(n).map(|i| segments[i])
    }

    /// Reassembled `scheme://server/path` form.
    pub fn normalized(&self) -> String {
        if self.scheme.is_empty() {
            format!("//{}{}", self.server, self.path)
        } else {
            format!("{}://{}{}", self.scheme, self.server, self.path)
        }
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
