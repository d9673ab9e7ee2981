//! Configuration file parsing for OmniHub
//!
//! A single optional TOML file: `<config_dir>/omnihub/config.toml`.
//! Missing or malformed files fall back to defaults.

pub mod settings;
pub mod types;

pub use settings::{config_path, load_settings, load_settings_from};
pub use types::*;
