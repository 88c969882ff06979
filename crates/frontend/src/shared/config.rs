//! Runtime configuration.
//!
//! Loaded once at start from `/app-config.toml` (served next to `index.html`).
//! When the file is missing or invalid the embedded default is used.

use contracts::shared::list_query::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use contracts::system::settings::{SESSION_TIMEOUT_DEFAULT, SESSION_TIMEOUT_MAX, SESSION_TIMEOUT_MIN};
use gloo_net::http::Request;
use leptos::prelude::*;
use serde::Deserialize;

pub const CONFIG_URL: &str = "/app-config.toml";

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
use_mock_data = false

[ui]
default_page_size = 10

[session]
timeout_minutes = 30
"#;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix for every REST path. Empty means same origin (proxied by Trunk).
    pub base_url: String,
    /// Serve lists and dashboards from built-in sample data.
    pub use_mock_data: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub default_page_size: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub timeout_minutes: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            use_mock_data: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout_minutes: SESSION_TIMEOUT_DEFAULT,
        }
    }
}

impl AppConfig {
    /// Parse TOML text and replace out-of-range values with defaults.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        let config: AppConfig = toml::from_str(text)?;
        Ok(config.sanitized())
    }

    fn sanitized(mut self) -> Self {
        if !PAGE_SIZE_OPTIONS.contains(&self.ui.default_page_size) {
            log::warn!(
                "ui.default_page_size = {} is not one of {:?}, using {}",
                self.ui.default_page_size,
                PAGE_SIZE_OPTIONS,
                DEFAULT_PAGE_SIZE
            );
            self.ui.default_page_size = DEFAULT_PAGE_SIZE;
        }
        if !(SESSION_TIMEOUT_MIN..=SESSION_TIMEOUT_MAX).contains(&self.session.timeout_minutes) {
            log::warn!(
                "session.timeout_minutes = {} out of range, using {}",
                self.session.timeout_minutes,
                SESSION_TIMEOUT_DEFAULT
            );
            self.session.timeout_minutes = SESSION_TIMEOUT_DEFAULT;
        }
        self.api.base_url = self.api.base_url.trim_end_matches('/').to_string();
        self
    }

    /// Embedded default configuration.
    pub fn embedded() -> Self {
        Self::parse(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Fetch `/app-config.toml`, falling back to the embedded default.
    pub async fn load() -> Self {
        let text = match Request::get(CONFIG_URL).send().await {
            Ok(response) if response.ok() => response.text().await.ok(),
            Ok(response) => {
                log::warn!("{} returned HTTP {}", CONFIG_URL, response.status());
                None
            }
            Err(e) => {
                log::warn!("{} not available: {}", CONFIG_URL, e);
                None
            }
        };

        match text.map(|t| Self::parse(&t)) {
            Some(Ok(config)) => {
                log::info!("Loaded configuration from {}", CONFIG_URL);
                config
            }
            Some(Err(e)) => {
                log::warn!("Invalid {}: {}. Using embedded configuration", CONFIG_URL, e);
                Self::embedded()
            }
            None => {
                log::info!("Using embedded configuration");
                Self::embedded()
            }
        }
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::parse(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::parse("[api]\nuse_mock_data = true\n").unwrap();
        assert!(config.api.use_mock_data);
        assert_eq!(config.ui.default_page_size, 10);
        assert_eq!(config.session.timeout_minutes, 30);
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        let text = r#"
[api]
base_url = "http://localhost:8000/"

[ui]
default_page_size = 7

[session]
timeout_minutes = 500
"#;
        let config = AppConfig::parse(text).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.ui.default_page_size, 10);
        assert_eq!(config.session.timeout_minutes, 30);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(AppConfig::parse("[api\nbase_url=").is_err());
    }
}
