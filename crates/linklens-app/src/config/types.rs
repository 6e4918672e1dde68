//! Configuration types for linklens
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `BackendSettings`, `BehaviorSettings`, `UiSettings` - its sections

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Global settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the analyzer backend lives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BackendSettings {
    #[serde(default = "default_backend_url")]
    pub base_url: String,

    /// Overall request timeout; 0 leaves the HTTP client default in place
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            timeout_secs: 0,
        }
    }
}

impl BackendSettings {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Reject profile URLs without `linkedin.com/in/` before calling the backend
    #[serde(default = "default_true")]
    pub validate_url: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { validate_url: true }
    }
}

/// Icon rendering mode for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Unicode symbols (check marks, bullets, gauges)
    #[default]
    Unicode,
    /// Plain ASCII for limited terminals
    Ascii,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::Ascii => write!(f, "ascii"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.backend.base_url, "http://localhost:8001");
        assert_eq!(settings.backend.timeout(), None);
        assert!(settings.behavior.validate_url);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
    }

    #[test]
    fn test_partial_settings_deserialize() {
        let settings: Settings = toml::from_str(
            r#"
[backend]
timeout_secs = 30

[ui]
icons = "ascii"
"#,
        )
        .unwrap();

        assert_eq!(settings.backend.base_url, DEFAULT_BACKEND_URL);
        assert_eq!(settings.backend.timeout(), Some(Duration::from_secs(30)));
        assert!(settings.behavior.validate_url);
        assert_eq!(settings.ui.icons, IconMode::Ascii);
    }

    #[test]
    fn test_icon_mode_display() {
        assert_eq!(IconMode::Unicode.to_string(), "unicode");
        assert_eq!(IconMode::Ascii.to_string(), "ascii");
    }
}
