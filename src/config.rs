//! Site configuration module.
//!
//! Handles loading, validating and merging `config.toml`. Stock defaults are
//! the base layer; the user file in the content root only needs the keys it
//! wants to override.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! lang = "en"                  # <html lang> of generated pages
//!
//! [media]
//! # base_url = "https://cms.example.com"   # media host; CMS_API_URL wins
//!
//! [cards]
//! back_title = "DEMO ONLY"     # Back face of flip cards
//! back_text = "CONTACT US"
//!
//! [colors]
//! primary = "#00b2e2"
//! primary_dark = "#0090b8"
//! secondary = "#c64b9b"
//! text = "#7a7a7a"
//! dark = "#000000"
//! light = "#ffffff"
//! muted = "#e0dede"
//! dark_muted = "#282a2b"
//!
//! [fonts]
//! sans = "'Open Sans', sans-serif"
//! display = "'DIN Medium', sans-serif"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::render::CardBack;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document-level settings.
    pub site: SiteSettings,
    /// Where relative media paths are resolved.
    pub media: MediaConfig,
    /// Flip card placeholder text.
    pub cards: CardsConfig,
    /// Palette, emitted as CSS custom properties.
    pub colors: ColorConfig,
    /// Font stacks, emitted as CSS custom properties.
    pub fonts: FontConfig,
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.lang.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.lang must not be empty".into(),
            ));
        }
        if let Some(url) = self.media.base_url.as_deref()
            && !url.is_empty()
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ConfigError::Validation(format!(
                "media.base_url must start with http:// or https://, got {url:?}"
            )));
        }
        for (name, value) in self.colors.entries() {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "colors.{name} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    /// Value of `<html lang>`.
    pub lang: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MediaConfig {
    /// Media host. When absent, the `CMS_API_URL` environment variable or the
    /// local default is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardsConfig {
    pub back_title: String,
    pub back_text: String,
}

impl Default for CardsConfig {
    fn default() -> Self {
        let back = CardBack::default();
        Self {
            back_title: back.title,
            back_text: back.text,
        }
    }
}

impl CardsConfig {
    pub fn card_back(&self) -> CardBack {
        CardBack {
            title: self.back_title.clone(),
            text: self.back_text.clone(),
        }
    }
}

/// Site palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Brand color: solid buttons, headings, links.
    pub primary: String,
    /// Hover state of primary elements.
    pub primary_dark: String,
    pub secondary: String,
    /// Body text.
    pub text: String,
    pub dark: String,
    pub light: String,
    /// Borders and flip card backs.
    pub muted: String,
    /// Footer background.
    pub dark_muted: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#00b2e2".to_string(),
            primary_dark: "#0090b8".to_string(),
            secondary: "#c64b9b".to_string(),
            text: "#7a7a7a".to_string(),
            dark: "#000000".to_string(),
            light: "#ffffff".to_string(),
            muted: "#e0dede".to_string(),
            dark_muted: "#282a2b".to_string(),
        }
    }
}

impl ColorConfig {
    /// `(key, value)` pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("primary", &self.primary),
            ("primary_dark", &self.primary_dark),
            ("secondary", &self.secondary),
            ("text", &self.text),
            ("dark", &self.dark),
            ("light", &self.light),
            ("muted", &self.muted),
            ("dark_muted", &self.dark_muted),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    /// Body font stack.
    pub sans: String,
    /// Headings and navigation.
    pub display: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            sans: "'Open Sans', sans-serif".to_string(),
            display: "'DIN Medium', sans-serif".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, on top of stock
/// defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`. Used by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# headless-pages configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Document
# ---------------------------------------------------------------------------
[site]
# Value of the <html lang> attribute.
lang = "en"

# ---------------------------------------------------------------------------
# Media
# ---------------------------------------------------------------------------
[media]
# Host that relative media paths (/uploads/...) are resolved against.
# The CMS_API_URL environment variable takes precedence over this value.
# When neither is set, http://localhost:1337 is used.
# base_url = "https://cms.example.com"

# ---------------------------------------------------------------------------
# Flip cards
# ---------------------------------------------------------------------------
[cards]
# Text shown on the back face of flip cards.
back_title = "DEMO ONLY"
back_text = "CONTACT US"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
primary = "#00b2e2"
primary_dark = "#0090b8"     # Hover state of primary elements
secondary = "#c64b9b"
text = "#7a7a7a"
dark = "#000000"
light = "#ffffff"
muted = "#e0dede"
dark_muted = "#282a2b"       # Footer background

# ---------------------------------------------------------------------------
# Fonts
# ---------------------------------------------------------------------------
[fonts]
sans = "'Open Sans', sans-serif"
display = "'DIN Medium', sans-serif"
"##
}

/// Generate CSS custom properties from colors and fonts.
pub fn generate_theme_css(config: &SiteConfig) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in config.colors.entries() {
        css.push_str(&format!(
            "    --color-{}: {};\n",
            name.replace('_', "-"),
            value
        ));
    }
    css.push_str(&format!("    --font-sans: {};\n", config.fonts.sans));
    css.push_str(&format!("    --font-display: {};\n", config.fonts.display));
    css.push('}');
    css
}
