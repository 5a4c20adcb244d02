//! Provider settings loaded from TOML.
//!
//! - `parse_settings_toml(toml)` parses and validates a settings document
//! - `Settings::default()` equals the embedded `default_settings.toml`
//! - missing sections or keys fall back to their defaults

use serde::{Deserialize, Serialize};

use crate::unicode::KanaMatcher;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

pub const DEFAULT_KANA_PATTERN: &str = "[\u{3041}-\u{3093}\u{30fc}]";
pub const DEFAULT_KATAKANA_PATTERN: &str = "[\u{3041}-\u{3093}\u{309d}\u{309e}]";
pub const DEFAULT_SPACE_PATTERN: &str = "[\u{3000}]";

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid pattern for {field}: {reason}")]
    InvalidPattern { field: String, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub patterns: PatternSettings,
    pub behavior: BehaviorSettings,
}

impl Settings {
    /// Compile the character patterns.
    pub fn matcher(&self) -> Result<KanaMatcher, SettingsError> {
        KanaMatcher::from_patterns(&self.patterns)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSettings {
    pub kana: String,
    pub katakana: String,
    pub space: String,
}

impl Default for PatternSettings {
    fn default() -> Self {
        Self {
            kana: DEFAULT_KANA_PATTERN.to_string(),
            katakana: DEFAULT_KATAKANA_PATTERN.to_string(),
            space: DEFAULT_SPACE_PATTERN.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorSettings {
    pub on_cleared: bool,
    pub debug: bool,
    pub stop_on_error: bool,
    pub to_katakana: bool,
    pub allow_space: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            on_cleared: true,
            debug: false,
            stop_on_error: false,
            to_katakana: true,
            allow_space: false,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    s.matcher()?;
    Ok(s)
}
