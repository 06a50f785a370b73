use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::registry::{
    DEFAULT_FORMAT, DEFAULT_QUALITY, DEFAULT_REGION, DEFAULT_ROTATION, DEFAULT_SIZE,
};
use crate::segments::Segment;

/// Rendition segments used when a URL (or builder) does not name them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenditionDefaults {
    #[serde(default = "RenditionDefaults::region_default")]
    pub region: String,
    #[serde(default = "RenditionDefaults::size_default")]
    pub size: String,
    #[serde(default = "RenditionDefaults::rotation_default")]
    pub rotation: String,
    #[serde(default = "RenditionDefaults::quality_default")]
    pub quality: String,
    #[serde(default = "RenditionDefaults::format_default")]
    pub format: String,
}

impl RenditionDefaults {
    pub(crate) fn region_default() -> String {
        DEFAULT_REGION.to_string()
    }

    pub(crate) fn size_default() -> String {
        DEFAULT_SIZE.to_string()
    }

    pub(crate) fn rotation_default() -> String {
        DEFAULT_ROTATION.to_string()
    }

    pub(crate) fn quality_default() -> String {
        DEFAULT_QUALITY.to_string()
    }

    pub(crate) fn format_default() -> String {
        DEFAULT_FORMAT.to_string()
    }

    /// Checks each value against its segment grammar.
    pub fn validate(&self) -> crate::Result<()> {
        Segment::Region.check(&self.region)?;
        Segment::Size.check(&self.size)?;
        Segment::Rotation.check(&self.rotation)?;
        Segment::Quality.check(&self.quality)?;
        Segment::Format.check(&self.format)
    }
}

impl Default for RenditionDefaults {
    fn default() -> Self {
        Self {
            region: Self::region_default(),
            size: Self::size_default(),
            rotation: Self::rotation_default(),
            quality: Self::quality_default(),
            format: Self::format_default(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Library configuration loaded from `~/.config/iiif-url/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Rendition used for info URLs and fresh builders.
    #[serde(default)]
    pub defaults: RenditionDefaults,
    /// Whether builders percent-escape identifiers by default.
    #[serde(default = "default_true")]
    pub escape_identifiers: bool,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            defaults: RenditionDefaults::default(),
            escape_identifiers: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("iiif-url")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Parse and validate a config file.
pub fn load_from_path(path: &Path) -> Result<LocatorConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: LocatorConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    cfg.defaults
        .validate()
        .with_context(|| format!("invalid rendition defaults in {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration if a file exists; built-in defaults otherwise.
pub fn load_or_default() -> Result<LocatorConfig> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("iiif-url")?;
    match xdg_dirs.find_config_file("config.toml") {
        Some(path) => load_from_path(&path),
        None => Ok(LocatorConfig::default()),
    }
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LocatorConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LocatorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let cfg = LocatorConfig::default();
        assert_eq!(cfg.defaults.region, "full");
        assert_eq!(cfg.defaults.size, "full");
        assert_eq!(cfg.defaults.rotation, "0");
        assert_eq!(cfg.defaults.quality, "default");
        assert_eq!(cfg.defaults.format, "jpg");
        assert!(cfg.escape_identifiers);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = LocatorConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: LocatorConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_values() {
        let toml = r#"
            escape_identifiers = false

            [defaults]
            size = "max"
            format = "png"
        "#;
        let cfg: LocatorConfig = toml::from_str(toml).unwrap();
        assert!(!cfg.escape_identifiers);
        assert_eq!(cfg.defaults.size, "max");
        assert_eq!(cfg.defaults.format, "png");
        assert_eq!(cfg.defaults.region, "full");
        assert_eq!(cfg.defaults.quality, "default");
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg: LocatorConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, LocatorConfig::default());
    }

    #[test]
    fn load_from_path_reads_file() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[defaults]\nquality = \"gray\"").unwrap();
        f.flush().unwrap();
        let cfg = load_from_path(f.path()).unwrap();
        assert_eq!(cfg.defaults.quality, "gray");
    }

    #[test]
    fn load_from_path_rejects_bad_defaults() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[defaults]\nrotation = \"400\"").unwrap();
        f.flush().unwrap();
        let err = load_from_path(f.path()).unwrap_err();
        let cause = err.downcast_ref::<crate::ParameterError>().unwrap();
        assert_eq!(cause.kind, crate::ParameterErrorKind::InvalidRotation);
    }

    #[test]
    fn rendition_validate_names_segment() {
        let mut d = RenditionDefaults::default();
        assert!(d.validate().is_ok());
        d.format = "bmp".to_string();
        assert_eq!(
            d.validate().unwrap_err().kind,
            crate::ParameterErrorKind::InvalidFormat
        );
    }
}
