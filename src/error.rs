//! Error type for rejected URL segments.

use thiserror::Error;

use crate::registry::VALID_SCHEMES;

/// Result alias for grammar operations.
pub type Result<T> = std::result::Result<T, ParameterError>;

/// A URL segment (or a field destined for one) failed its grammar.
///
/// Every failure in this crate is a `ParameterError`; `kind` says which
/// segment rejected `value`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.kind, .value))]
pub struct ParameterError {
    pub kind: ParameterErrorKind,
    pub value: String,
}

/// Which segment grammar rejected the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterErrorKind {
    InvalidScheme,
    /// The server holds a path, query, or fragment delimiter.
    InvalidServer,
    InvalidPrefix,
    /// Raised when the path is too short to hold an identifier, or when a
    /// stored identifier holds an unescaped `/`, `?`, or `#`.
    InvalidIdentifier,
    InvalidRegion,
    InvalidSize,
    InvalidRotation,
    InvalidQuality,
    InvalidFormat,
}

impl ParameterErrorKind {
    /// Segment name as used in messages.
    pub fn segment(self) -> &'static str {
        match self {
            ParameterErrorKind::InvalidScheme => "scheme",
            ParameterErrorKind::InvalidServer => "server",
            ParameterErrorKind::InvalidPrefix => "prefix",
            ParameterErrorKind::InvalidIdentifier => "identifier",
            ParameterErrorKind::InvalidRegion => "region",
            ParameterErrorKind::InvalidSize => "size",
            ParameterErrorKind::InvalidRotation => "rotation",
            ParameterErrorKind::InvalidQuality => "quality",
            ParameterErrorKind::InvalidFormat => "format",
        }
    }
}

impl ParameterError {
    pub fn new(kind: ParameterErrorKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

fn render(kind: &ParameterErrorKind, value: &str) -> String {
    match kind {
        ParameterErrorKind::InvalidScheme => format!(
            "invalid scheme parameter: {:?}; valid schemes include: {}",
            value,
            VALID_SCHEMES.join(", ")
        ),
        ParameterErrorKind::InvalidPrefix => {
            format!(
                "invalid prefix parameter: {:?}; prefixes must be empty or start with '/'",
                value
            )
        }
        other => format!("invalid {} parameter: {:?}", other.segment(), value),
    }
}
