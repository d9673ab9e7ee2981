//! Configuration types for OmniHub

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global application settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    #[serde(default)]
    pub assistant: AssistantSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub hook: HookSettings,
}

/// Assistant collaborator settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AssistantSettings {
    /// Generative model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL (overridable for proxies and tests)
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// API key; the `OMNIHUB_API_KEY` environment variable wins over this
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
            api_key: None,
        }
    }
}

impl AssistantSettings {
    /// Resolved API key: environment first, then the settings file.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var("OMNIHUB_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.api_key.clone())
    }
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

/// Device snapshot persistence settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StorageSettings {
    /// Override the snapshot file location (defaults to the platform data
    /// dir)
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

/// Webhook endpoint settings (`omnihub hook`)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HookSettings {
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Shared secret echoed by the verification handshake
    #[serde(default = "default_verify_token")]
    pub verify_token: String,
}

impl Default for HookSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            verify_token: default_verify_token(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_verify_token() -> String {
    "fmtransWebhook2026".to_string()
}
