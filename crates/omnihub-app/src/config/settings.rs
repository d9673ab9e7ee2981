//! Settings parser for the OmniHub config file

use std::path::{Path, PathBuf};

use omnihub_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "omnihub";

/// Platform config file location: `<config_dir>/omnihub/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the platform config file.
///
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_settings() -> Settings {
    match config_path() {
        Some(path) => load_settings_from(&path),
        None => {
            warn!("No config directory on this platform, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from an explicit path. Missing or malformed files fall
/// back to defaults so a bad config never blocks startup.
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}
