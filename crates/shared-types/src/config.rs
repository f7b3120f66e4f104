use serde::{Deserialize, Serialize};

use crate::booking::{DEFAULT_END_TIME, DEFAULT_START_TIME};

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Absolute prefix prepended to every REST path, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

/// Initial time window of a new booking form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingDefaults {
    #[serde(default = "default_start_time")]
    pub start_time: String,
    #[serde(default = "default_end_time")]
    pub end_time: String,
}

impl Default for BookingDefaults {
    fn default() -> Self {
        Self {
            start_time: default_start_time(),
            end_time: default_end_time(),
        }
    }
}

fn default_start_time() -> String {
    DEFAULT_START_TIME.to_string()
}

fn default_end_time() -> String {
    DEFAULT_END_TIME.to_string()
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field has a default so a missing or partial file still yields a
/// usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub booking: BookingDefaults,
}

impl AppConfig {
    /// Replace the base URL, dropping any trailing slash.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}
