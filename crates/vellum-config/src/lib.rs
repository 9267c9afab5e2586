//! Vellum configuration system
//!
//! Centralized configuration for the vellum workspace, loading defaults
//! from `vellum.toml` with environment variable overrides on top.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure for vellum
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VellumConfig {
    /// Text layout settings
    pub text: TextConfig,
}

/// Text layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Path to custom font file (.ttf/.otf)
    pub font: Option<PathBuf>,
    /// Default text size in pixels
    pub size: Option<f32>,
    /// Default spacing between glyphs in pixels
    pub spacing: Option<f32>,
    /// Extra vertical padding between wrapped lines in pixels
    pub line_padding: Option<f32>,
    /// Prefer word boundaries when wrapping (default: true)
    pub word_wrap: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font: None,
            size: None,
            spacing: None,
            line_padding: None,
            word_wrap: true,
        }
    }
}

impl VellumConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default location (vellum.toml in the
    /// current directory) or return default configuration if the file
    /// doesn't exist.
    pub fn load_or_default() -> Self {
        Self::load_from_file("vellum.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables.
    ///
    /// Environment variables take precedence over configuration file
    /// values, which allows temporary overrides without editing the file.
    pub fn merge_with_env(&mut self) {
        if let Ok(font) = std::env::var("VELLUM_FONT") {
            self.text.font = Some(PathBuf::from(font));
        }
        if let Ok(val) = std::env::var("VELLUM_TEXT_SIZE") {
            if let Ok(size) = val.parse::<f32>() {
                self.text.size = Some(size);
            }
        }
        if let Ok(val) = std::env::var("VELLUM_TEXT_SPACING") {
            if let Ok(spacing) = val.parse::<f32>() {
                self.text.spacing = Some(spacing);
            }
        }
        if let Ok(val) = std::env::var("VELLUM_LINE_PADDING") {
            if let Ok(pad) = val.parse::<f32>() {
                self.text.line_padding = Some(pad);
            }
        }
        if let Ok(val) = std::env::var("VELLUM_WORD_WRAP") {
            self.text.word_wrap = val == "1" || val.eq_ignore_ascii_case("true");
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// 1. Load from vellum.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VellumConfig::default();
        assert!(config.text.word_wrap);
        assert!(config.text.font.is_none());
        assert!(config.text.line_padding.is_none());
    }

    #[test]
    fn test_toml_serialization() {
        let config = VellumConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: VellumConfig = toml::from_str(&toml_str).unwrap();
        assert!(parsed.text.word_wrap);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: VellumConfig = toml::from_str("[text]\nsize = 18.0\n").unwrap();
        assert_eq!(parsed.text.size, Some(18.0));
        assert!(parsed.text.word_wrap);
    }

    #[test]
    fn test_load_or_default() {
        // Should not panic even if vellum.toml doesn't exist
        let config = VellumConfig::load_or_default();
        assert!(config.text.word_wrap);
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("VELLUM_TEXT_SIZE", "24");
            std::env::set_var("VELLUM_WORD_WRAP", "false");
        }

        let mut config = VellumConfig::default();
        config.merge_with_env();

        assert_eq!(config.text.size, Some(24.0));
        assert!(!config.text.word_wrap);

        // Clean up
        unsafe {
            std::env::remove_var("VELLUM_TEXT_SIZE");
            std::env::remove_var("VELLUM_WORD_WRAP");
        }
    }
}
