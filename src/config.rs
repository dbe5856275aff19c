use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/client.json";
pub const BASE_URL_ENV: &str = "SENTIMENT_CHAT_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Origin of the sentiment backend, e.g. `http://127.0.0.1:5000`.
    pub base_url: String,
    pub window_title: String,
    pub palette: PaletteConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            window_title: "Sentiment Chat".to_string(),
            palette: PaletteConfig::default(),
        }
    }
}

/// Hex colours (`#rrggbb`) used for muted text and sentiment accents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub text_muted: String,
    pub green: String,
    pub red: String,
    pub muted: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            text_muted: "#475569".to_string(),
            green: "#10b981".to_string(),
            red: "#ef4444".to_string(),
            muted: "#6b7280".to_string(),
        }
    }
}

impl AppConfig {
    /// Environment beats the file, the command line beats both.
    pub fn with_overrides(mut self, env_base_url: Option<String>, cli_base_url: Option<String>) -> Self {
        if let Some(base_url) = cli_base_url.or(env_base_url) {
            let base_url = base_url.trim();
            if !base_url.is_empty() {
                self.base_url = base_url.to_string();
            }
        }
        self
    }
}

/// Reads the client config, falling back to defaults when the file is
/// missing or unreadable.
pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            log::info!("No client config at {} ({err}); using built-in defaults", path.display());
            return AppConfig::default();
        }
    };

    serde_json::from_str(&content).unwrap_or_else(|err| {
        log::warn!("Ignoring malformed client config {}: {err}", path.display());
        AppConfig::default()
    })
}
