use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::theme::ThemeMode;

// site configuration
//
// the webapp embeds site.toml at build time, so there is no file i/o here; a
// document that fails to parse is a build mistake, and the caller decides whether
// to fall back to the defaults
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    // name shown in the hero, about page and footer
    pub owner: String,

    pub role: String,

    pub copyright_year: u16,

    // prefix for images that ship with the site
    pub asset_root: String,

    // used when nothing has been stored in the browser yet
    pub default_theme: ThemeMode,

    // vertical scroll offset past which the nav bar switches style
    pub scroll_threshold_px: f64,

    // how long the contact form shows its confirmation before resetting
    pub submit_reset_ms: u32,

    // one of trace, debug, info, warn, error
    pub log_level: String,

    pub persist_theme: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            owner: String::from("Irsal Shydiq"),
            role: String::from("Multidisciplinary Designer & React Developer"),
            copyright_year: 2024,
            asset_root: String::from("/assets"),
            default_theme: ThemeMode::Light,
            scroll_threshold_px: 50.0,
            submit_reset_ms: 3000,
            log_level: String::from("debug"),
            persist_theme: true,
        }
    }
}

impl SiteConfig {
    pub fn level(&self) -> Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" => Level::TRACE,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::DEBUG,
        }
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: &str) -> Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc)
        .map_err(|err| anyhow::Error::msg(format!("failed to parse site config: {err}")))?;

    // nan would compare false against every offset and pin the nav bar unscrolled
    let threshold = data.config.scroll_threshold_px;
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(anyhow::Error::msg(format!(
            "scroll_threshold_px must be a finite, non-negative number, got {threshold}"
        )));
    }

    Ok(data.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let config = read_config(
            r#"
            [config]
            owner = "Someone Else"
            default_theme = "dark"
            "#,
        )
        .unwrap();

        assert_eq!(config.owner, "Someone Else");
        assert_eq!(config.default_theme, ThemeMode::Dark);
        assert_eq!(config.submit_reset_ms, 3000);
        assert_eq!(config.scroll_threshold_px, 50.0);
    }

    #[test]
    fn empty_document_is_the_default() {
        assert_eq!(read_config("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_documents_are_rejected() {
        assert!(read_config("[config\nowner = ").is_err());
        assert!(read_config("[config]\nsubmit_reset_ms = \"soon\"").is_err());
        assert!(read_config("[config]\nscroll_threshold_px = -1.0").is_err());
    }

    #[test]
    fn non_finite_thresholds_are_rejected() {
        assert!(read_config("[config]\nscroll_threshold_px = nan").is_err());
        assert!(read_config("[config]\nscroll_threshold_px = inf").is_err());
        assert!(read_config("[config]\nscroll_threshold_px = 0.0").is_ok());
    }

    #[test]
    fn log_level_maps_to_tracing() {
        let mut config = SiteConfig::default();
        assert_eq!(config.level(), Level::DEBUG);

        config.log_level = String::from("WARN");
        assert_eq!(config.level(), Level::WARN);
    }
}
