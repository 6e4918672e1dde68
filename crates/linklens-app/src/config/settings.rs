//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use linklens_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "linklens";

/// Environment variable overriding `[backend] base_url`
pub const BACKEND_URL_ENV: &str = "LINKLENS_BACKEND_URL";

/// Default location: `<config dir>/linklens/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from a config file.
///
/// A missing or unparsable file falls back to defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply the backend URL overrides and validate the result.
///
/// Precedence: `cli_backend_url` > [`BACKEND_URL_ENV`] > config file > default.
pub fn apply_overrides(mut settings: Settings, cli_backend_url: Option<&str>) -> Result<Settings> {
    let env_url = std::env::var(BACKEND_URL_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty());

    if let Some(url) = cli_backend_url {
        debug!("Backend URL from command line: {}", url);
        settings.backend.base_url = url.to_string();
    } else if let Some(url) = env_url {
        debug!("Backend URL from {}: {}", BACKEND_URL_ENV, url);
        settings.backend.base_url = url;
    }

    linklens_api::parse_base_url(&settings.backend.base_url)?;
    Ok(settings)
}

/// Resolve the effective settings for a run.
///
/// `config_path` of `None` reads [`default_config_path`]. An invalid backend
/// URL is a fatal [`Error::ConfigInvalid`].
pub fn load_config(config_path: Option<&Path>, cli_backend_url: Option<&str>) -> Result<Settings> {
    let settings = match config_path {
        Some(path) => load_settings(path),
        None => default_config_path()
            .map(|path| load_settings(&path))
            .unwrap_or_default(),
    };
    let settings = apply_overrides(settings, cli_backend_url)?;
    info!(
        "Backend: {} (validate_url={})",
        settings.backend.base_url, settings.behavior.validate_url
    );
    Ok(settings)
}
