//! Rune tag renderer configuration
//!
//! Loads render defaults (base font size, layout bounds, host platform, the
//! embedded-content host) from `rune-tags.toml`, with environment variable
//! overrides for quick experiments.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "rune-tags.toml";

/// Errors raised while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure for the tag renderers
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RenderConfig {
    /// Text sizing settings
    pub text: TextConfig,
    /// Static layout bounds
    pub layout: LayoutConfig,
    /// Host platform, drives platform-specific font choices
    pub platform: Platform,
    /// Embedded frame (iframe) hosting
    pub frame: FrameConfig,
    /// Style filtering
    pub styles: StylesConfig,
    /// Comma-separated diagnostics categories (`style`, `html`, `list`, `all`)
    pub diagnostics: Option<String>,
}

/// Text configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Base font size used for list markers and tag defaults
    pub base_font_size: f64,
    /// Size of one `em`, used by line breaks and `em` lengths
    pub em_size: f64,
    /// Whether text nodes honor the host's font scaling
    pub allow_font_scaling: bool,
}

/// Layout configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayoutConfig {
    /// Maximum content width, the fallback width of embedded frames
    pub static_content_max_width: Option<f64>,
}

/// Embedded frame configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FrameConfig {
    /// Name of the host component able to display embedded content.
    /// Frames render nothing when unset.
    pub host: Option<String>,
}

/// Style filtering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StylesConfig {
    /// CSS property names dropped from inline `style` attributes
    pub ignored: Vec<String>,
}

/// Host platform identifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Android,
    Ios,
    #[default]
    Other,
}

impl Platform {
    /// Parse a platform name, case-insensitively. Unknown names map to `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "android" => Platform::Android,
            "ios" => Platform::Ios,
            _ => Platform::Other,
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            base_font_size: 16.0,
            em_size: 16.0,
            allow_font_scaling: true,
        }
    }
}

impl RenderConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from `rune-tags.toml` in the current directory,
    /// or return the defaults if it is missing or invalid
    pub fn load_or_default() -> Self {
        Self::load_from_file(CONFIG_FILE).unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        self.merge_with(|key| std::env::var(key).ok());
    }

    fn merge_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(size) = lookup("RUNE_TAGS_BASE_FONT_SIZE").and_then(|v| v.parse().ok()) {
            self.text.base_font_size = size;
        }
        if let Some(size) = lookup("RUNE_TAGS_EM_SIZE").and_then(|v| v.parse().ok()) {
            self.text.em_size = size;
        }
        if let Some(val) = lookup("RUNE_TAGS_FONT_SCALING") {
            self.text.allow_font_scaling = val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Some(width) = lookup("RUNE_TAGS_MAX_WIDTH").and_then(|v| v.parse().ok()) {
            self.layout.static_content_max_width = Some(width);
        }
        if let Some(platform) = lookup("RUNE_TAGS_PLATFORM") {
            self.platform = Platform::from_name(&platform);
        }
        if let Some(host) = lookup("RUNE_TAGS_FRAME_HOST") {
            self.frame.host = Some(host);
        }
        if let Some(ignored) = lookup("RUNE_TAGS_IGNORED_STYLES") {
            self.styles.ignored = ignored
                .split(',')
                .map(|s| s.trim().to_ascii_lowercase())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(diagnostics) = lookup("RUNE_DIAGNOSTICS") {
            self.diagnostics = Some(diagnostics);
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from `rune-tags.toml` (or use defaults if not found)
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
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.text.base_font_size, 16.0);
        assert_eq!(config.text.em_size, 16.0);
        assert!(config.text.allow_font_scaling);
        assert_eq!(config.platform, Platform::Other);
        assert!(config.frame.host.is_none());
    }

    #[test]
    fn test_toml_serialization() {
        let mut config = RenderConfig::default();
        config.platform = Platform::Android;
        config.layout.static_content_max_width = Some(320.0);
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: RenderConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.platform, Platform::Android);
        assert_eq!(parsed.layout.static_content_max_width, Some(320.0));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            "platform = \"ios\"\n[text]\nbase_font_size = 14.0\n[frame]\nhost = \"WebView\"\n",
        )
        .unwrap();

        let config = RenderConfig::load_from_file(&path).unwrap();
        assert_eq!(config.platform, Platform::Ios);
        assert_eq!(config.text.base_font_size, 14.0);
        assert_eq!(config.text.em_size, 16.0);
        assert_eq!(config.frame.host.as_deref(), Some("WebView"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RenderConfig::load_from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "text = 3").unwrap();
        let err = RenderConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("RUNE_TAGS_BASE_FONT_SIZE", "18"),
            ("RUNE_TAGS_FONT_SCALING", "false"),
            ("RUNE_TAGS_PLATFORM", "Android"),
            ("RUNE_TAGS_IGNORED_STYLES", "font-family, Color"),
        ]);
        let mut config = RenderConfig::default();
        config.merge_with(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.text.base_font_size, 18.0);
        assert!(!config.text.allow_font_scaling);
        assert_eq!(config.platform, Platform::Android);
        assert_eq!(config.styles.ignored, vec!["font-family", "color"]);
    }

    #[test]
    fn test_platform_from_name() {
        assert_eq!(Platform::from_name(" IOS "), Platform::Ios);
        assert_eq!(Platform::from_name("windows"), Platform::Other);
    }
}
