//! Tests for ImageLocator parsing, serialisation, and guarded setters.

use crate::config::RenditionDefaults;
use crate::error::ParameterErrorKind;
use crate::segments::{Segment, UrlKind};

use super::{IdentifierEscape, ImageLocator};

const IMAGE_URL: &str = "https://example.org/iiif/2/abc123/full/full/0/default.jpg";
const INFO_URL: &str = "https://example.org/iiif/2/abc123/info.json";

fn sample() -> ImageLocator {
    ImageLocator::from_url(IMAGE_URL).unwrap()
}

fn snapshot(loc: &ImageLocator) -> Vec<String> {
    Segment::ALL.iter().map(|s| loc.get(*s).to_string()).collect()
}

#[test]
fn from_url_image_request() {
    let loc = sample();
    assert_eq!(loc.scheme(), "https");
    assert_eq!(loc.server(), "example.org");
    assert_eq!(loc.prefix(), "/iiif/2");
    assert_eq!(loc.identifier(), "abc123");
    assert_eq!(loc.region(), "full");
    assert_eq!(loc.size(), "full");
    assert_eq!(loc.rotation(), "0");
    assert_eq!(loc.quality(), "default");
    assert_eq!(loc.format(), "jpg");
}

#[test]
fn from_url_info_document_uses_defaults() {
    let loc = ImageLocator::from_url(INFO_URL).unwrap();
    assert_eq!(loc, sample());
    assert_eq!(loc.to_info_url(), INFO_URL);
    assert_eq!(ImageLocator::from_info_url(INFO_URL).unwrap(), loc);
}

#[test]
fn image_url_reproduces_input() {
    assert_eq!(sample().to_image_url(), IMAGE_URL);
    assert_eq!(sample().to_string(), IMAGE_URL);
}

#[test]
fn base_url() {
    assert_eq!(sample().to_base_url(), "https://example.org/iiif/2/abc123");
}

#[test]
fn query_and_fragment_ignored() {
    let loc = ImageLocator::from_url(&format!("{IMAGE_URL}?token=x#frag")).unwrap();
    assert_eq!(loc, sample());
    let loc = ImageLocator::from_url(&format!("{INFO_URL}?token=x")).unwrap();
    assert_eq!(loc, sample());
}

#[test]
fn explicit_kind_skips_classification() {
    // Parsed as an image URL, "info.json" is a quality.format segment.
    let err = ImageLocator::parse(INFO_URL, UrlKind::Image).unwrap_err();
    assert_eq!(err.kind, ParameterErrorKind::InvalidRegion);
    assert!(ImageLocator::parse(INFO_URL, UrlKind::Info).is_ok());
}

#[test]
fn info_defaults_can_be_configured() {
    let defaults = RenditionDefaults {
        size: "max".to_string(),
        format: "png".to_string(),
        ..RenditionDefaults::default()
    };
    let loc = ImageLocator::from_url_with(INFO_URL, &defaults).unwrap();
    assert_eq!(
        loc.to_image_url(),
        "https://example.org/iiif/2/abc123/full/max/0/default.png"
    );
    let same = ImageLocator::from_info_url_with(INFO_URL, &defaults).unwrap();
    assert_eq!(loc, same);
}

#[test]
fn parse_fails_fast_on_first_bad_segment() {
    let err = ImageLocator::from_url("ftp://h/id/1,2,3/full/0/sepia.bmp").unwrap_err();
    assert_eq!(err.kind, ParameterErrorKind::InvalidScheme);
    let err = ImageLocator::from_url("https://h/id/1,2,3/full/0/sepia.bmp").unwrap_err();
    assert_eq!(err.kind, ParameterErrorKind::InvalidRegion);
    let err = ImageLocator::from_url("https://h/id/full/full/0/sepia.bmp").unwrap_err();
    assert_eq!(err.kind, ParameterErrorKind::InvalidQuality);
}

#[test]
fn url_without_authority_must_still_round_trip() {
    // No `//`, so the path has no leading slash and the prefix would lose it.
    let err = ImageLocator::from_url("https:a/b/c/info.json").unwrap_err();
    assert_eq!(err.kind, ParameterErrorKind::InvalidPrefix);
    assert_eq!(err.value, "a/b");

    let err = ImageLocator::from_url("https:iiif/x/id/full/full/0/default.jpg").unwrap_err();
    assert_eq!(err.kind, ParameterErrorKind::InvalidPrefix);
    assert_eq!(err.value, "iiif/x");

    // Without a prefix there is nothing to lose.
    let loc = ImageLocator::from_url("https:abc/full/full/0/default.jpg").unwrap();
    assert_eq!(loc.prefix(), "");
    assert_eq!(loc.server(), "");
    assert!(loc.validate().is_ok());
}

#[test]
fn every_parsed_locator_validates() {
    for url in [
        IMAGE_URL,
        INFO_URL,
        "https:///abc/info.json",
        "http://h//abc/full/full/0/default.jpg",
        "https://h/iiif/2/abc/full/99999999999999999999,/0/default.jpg",
    ] {
        let loc = ImageLocator::from_url(url).unwrap();
        assert!(loc.validate().is_ok(), "{url}");
    }
}

#[test]
fn short_image_path_rejected() {
    let err = ImageLocator::from_image_url("https://h/full/0/default.jpg").unwrap_err();
    assert_eq!(err.kind, ParameterErrorKind::InvalidIdentifier);
}

#[test]
fn new_validates_by_default() {
    let loc = ImageLocator::new(
        "https", "example.org", "/iiif/2", "abc123", "full", "full", "0", "default", "jpg", true,
    )
    .unwrap();
    assert_eq!(loc, sample());

    let err = ImageLocator::new(
        "https", "example.org", "", "abc", "full", "full", "0", "sepia", "jpg", true,
    )
    .unwrap_err();
    assert_eq!(err.kind, ParameterErrorKind::InvalidQuality);
}

#[test]
fn new_without_validation_keeps_fields() {
    let loc = ImageLocator::new(
        "https", "h", "", "abc", "full", "full", "999", "default", "jpg", false,
    )
    .unwrap();
    assert_eq!(loc.rotation(), "999");
    assert_eq!(
        loc.validate().unwrap_err().kind,
        ParameterErrorKind::InvalidRotation
    );
}

#[test]
fn validate_is_idempotent() {
    let loc = sample();
    let before = loc.clone();
    assert!(loc.validate().is_ok());
    assert!(loc.validate().is_ok());
    assert_eq!(loc, before);

    let bad = ImageLocator::new("https", "h", "", "a", "1,2", "full", "0", "default", "jpg", false)
        .unwrap();
    assert_eq!(bad.validate(), bad.validate());
}

#[test]
fn validate_names_the_field_that_breaks_the_round_trip() {
    // An identifier with a raw slash would reparse as prefix + identifier.
    let loc = ImageLocator::new("https", "h", "/p", "a/b", "full", "full", "0", "default", "jpg", false)
        .unwrap();
    let err = loc.validate().unwrap_err();
    assert_eq!(err.kind, ParameterErrorKind::InvalidIdentifier);
    assert_eq!(err.value, "a/b");
    assert_eq!(err.to_string(), "invalid identifier parameter: \"a/b\"");

    // A server with a path glued on would shift everything after it.
    let loc = ImageLocator::new("https", "h/x", "", "id", "full", "full", "0", "default", "jpg", false)
        .unwrap();
    let err = loc.validate().unwrap_err();
    assert_eq!(err.kind, ParameterErrorKind::InvalidServer);
    assert_eq!(err.value, "h/x");

    // A query mark in the prefix would cut the path short.
    let loc = ImageLocator::new("https", "h", "/p?q", "id", "full", "full", "0", "default", "jpg", false)
        .unwrap();
    assert_eq!(loc.validate().unwrap_err().kind, ParameterErrorKind::InvalidPrefix);

    // Format with a dot splits differently on reparse.
    let loc = ImageLocator::new("https", "h", "", "id", "full", "full", "0", "default", "a.jpg", false)
        .unwrap();
    let err = loc.validate().unwrap_err();
    assert_eq!(err.kind, ParameterErrorKind::InvalidFormat);
    assert_eq!(err.value, "a.jpg");
}

#[test]
fn set_region_commits() {
    let mut loc = sample();
    loc.set_region("150,15,120,140").unwrap();
    assert_eq!(loc.region(), "150,15,120,140");
    assert_eq!(
        loc.to_image_url(),
        "https://example.org/iiif/2/abc123/150,15,120,140/full/0/default.jpg"
    );
}

#[test]
fn set_region_rolls_back() {
    let mut loc = sample();
    let before = snapshot(&loc);
    let err = loc.set_region("150,15,120").unwrap_err();
    assert_eq!(err.kind, ParameterErrorKind::InvalidRegion);
    assert_eq!(err.value, "150,15,120");
    assert_eq!(loc.region(), "full");
    assert_eq!(snapshot(&loc), before);
}

#[test]
fn set_rotation_rolls_back() {
    let mut loc = sample();
    let err = loc.set_rotation("!400").unwrap_err();
    assert_eq!(err.kind, ParameterErrorKind::InvalidRotation);
    assert_eq!(loc.rotation(), "0");
    loc.set_rotation("!45.5").unwrap();
    assert_eq!(loc.rotation(), "!45.5");
    loc.set_rotation("360").unwrap();
}

#[test]
fn every_setter_rolls_back() {
    let mut loc = sample();
    let before = snapshot(&loc);
    assert_eq!(
        loc.set_scheme("ftp").unwrap_err().kind,
        ParameterErrorKind::InvalidScheme
    );
    assert_eq!(
        loc.set_server("example.org/extra").unwrap_err().kind,
        ParameterErrorKind::InvalidServer
    );
    assert_eq!(
        loc.set_identifier_with("a/b", IdentifierEscape::AlreadyEscaped)
            .unwrap_err()
            .kind,
        ParameterErrorKind::InvalidIdentifier
    );
    assert_eq!(
        loc.set_size("huge").unwrap_err().kind,
        ParameterErrorKind::InvalidSize
    );
    assert_eq!(
        loc.set_quality("sepia").unwrap_err().kind,
        ParameterErrorKind::InvalidQuality
    );
    assert_eq!(
        loc.set_format("bmp").unwrap_err().kind,
        ParameterErrorKind::InvalidFormat
    );
    assert_eq!(snapshot(&loc), before);
    assert!(loc.validate().is_ok());
}

#[test]
fn prefix_fast_fail() {
    let mut loc = sample();
    let err = loc.set_prefix("iiif/3").unwrap_err();
    assert_eq!(err.kind, ParameterErrorKind::InvalidPrefix);
    assert_eq!(err.value, "iiif/3");
    assert_eq!(loc.prefix(), "/iiif/2");
}

#[test]
fn prefix_can_change_or_clear() {
    let mut loc = sample();
    loc.set_prefix("/iiif/3").unwrap();
    assert_eq!(loc.to_info_url(), "https://example.org/iiif/3/abc123/info.json");
    loc.set_prefix("").unwrap();
    assert_eq!(loc.to_info_url(), "https://example.org/abc123/info.json");
}

#[test]
fn identifier_setter_escapes() {
    let mut loc = sample();
    loc.set_identifier("apf/2/apf2-00001.tif").unwrap();
    assert_eq!(loc.identifier(), "apf%2F2%2Fapf2-00001.tif");
    assert_eq!(loc.decoded_identifier(), "apf/2/apf2-00001.tif");

    loc.set_identifier_with("already%20escaped", IdentifierEscape::AlreadyEscaped)
        .unwrap();
    assert_eq!(loc.identifier(), "already%20escaped");
}

#[test]
fn size_zero_accepted() {
    let mut loc = sample();
    loc.set_size("0,0").unwrap();
    assert_eq!(loc.size(), "0,0");
}

#[test]
fn setters_touch_only_their_field() {
    let mut loc = sample();
    loc.set_quality("gray").unwrap();
    loc.set_format("png").unwrap();
    assert_eq!(
        loc.to_image_url(),
        "https://example.org/iiif/2/abc123/full/full/0/gray.png"
    );
    assert_eq!(loc.region(), "full");
    assert_eq!(loc.prefix(), "/iiif/2");
}

#[test]
fn with_transformers() {
    let thumb = sample()
        .with_size("!200,200")
        .and_then(|l| l.with_quality("color"))
        .and_then(|l| l.with_format("webp"))
        .unwrap();
    assert_eq!(
        thumb.to_image_url(),
        "https://example.org/iiif/2/abc123/full/!200,200/0/color.webp"
    );
    assert!(sample().with_region("pct:a,b").is_err());
    assert!(sample().with_prefix("nope").is_err());
    let moved = sample()
        .with_scheme("http")
        .and_then(|l| l.with_server("iiif.example.net:8182"))
        .and_then(|l| l.with_identifier("b c"))
        .and_then(|l| l.with_rotation("90"))
        .unwrap();
    assert_eq!(
        moved.to_image_url(),
        "http://iiif.example.net:8182/iiif/2/b%20c/full/full/90/default.jpg"
    );
}

#[test]
fn from_str_and_to_url() {
    let loc: ImageLocator = IMAGE_URL.parse().unwrap();
    let url = loc.to_url().unwrap();
    assert_eq!(url.host_str(), Some("example.org"));
    assert_eq!(url.path(), "/iiif/2/abc123/full/full/0/default.jpg");

    // The grammar leaves the server unconstrained; WHATWG parsing does not.
    let bad_host = ImageLocator::builder("https", "bad host", "id").build().unwrap();
    assert!(bad_host.to_url().is_err());
}

#[test]
fn serde_roundtrip_and_validation() {
    let json = serde_json::to_string(&sample()).unwrap();
    let back: ImageLocator = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sample());

    let minimal = r#"{"scheme":"https","server":"h","identifier":"x"}"#;
    let loc: ImageLocator = serde_json::from_str(minimal).unwrap();
    assert_eq!(loc.to_image_url(), "https://h/x/full/full/0/default.jpg");

    let bad = r#"{"scheme":"https","server":"h","identifier":"x","rotation":"361"}"#;
    let err = serde_json::from_str::<ImageLocator>(bad).unwrap_err();
    assert!(err.to_string().contains("rotation"));
}
