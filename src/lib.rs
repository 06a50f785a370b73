//! Parse, validate, build, and edit IIIF Image API 2.x URLs.
//!
//! ```text
//! {scheme}://{server}{prefix}/{identifier}/{region}/{size}/{rotation}/{quality}.{format}
//! {scheme}://{server}{prefix}/{identifier}/info.json
//! ```
//!
//! [`ImageLocator`] holds the nine segments and always satisfies the
//! round-trip invariant: its image request URL parses back to the same fields.
//!
//! ```
//! use iiif_url::ImageLocator;
//!
//! let mut loc = ImageLocator::from_url("https://example.org/iiif/2/abc123/info.json").unwrap();
//! loc.set_size("!200,200").unwrap();
//! assert_eq!(
//!     loc.to_image_url(),
//!     "https://example.org/iiif/2/abc123/full/!200,200/0/default.jpg"
//! );
//! assert!(loc.set_rotation("!400").is_err());
//! assert_eq!(loc.rotation(), "0");
//! ```

pub mod config;
pub mod error;
pub mod escape;
pub mod locator;
pub mod logging;
pub mod registry;
pub mod segments;

pub use error::{ParameterError, ParameterErrorKind, Result};
pub use locator::{IdentifierEscape, ImageLocator, LocatorBuilder};
pub use registry::{ImageFormat, IMAGE_FORMAT_EXTENSIONS, VALID_QUALITIES, VALID_SCHEMES};
pub use segments::{Segment, UrlKind};
