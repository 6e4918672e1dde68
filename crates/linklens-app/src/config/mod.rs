//! Configuration file parsing for linklens
//!
//! Supports `<config dir>/linklens/config.toml` plus the backend URL
//! overrides from the environment and the command line.

pub mod settings;
pub mod types;

pub use settings::{
    apply_overrides, default_config_path, load_config, load_settings, BACKEND_URL_ENV,
};
pub use types::*;
