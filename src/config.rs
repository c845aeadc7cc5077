// src/config.rs
//
// Startup configuration
//
// PRINCIPLES:
// - Resolved once at startup, then passed explicitly
// - Library code never reads the environment; only `from_env` does

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";
pub const BASE_URL_ENV: &str = "CIVILSHIELD_API_URL";
pub const DEFAULT_STATE_ENV: &str = "CIVILSHIELD_DEFAULT_STATE";

/// Defaults applied by the endpoint catalog when a caller omits an argument.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogDefaults {
    pub state: String,
    pub lat: f64,
    pub lon: f64,
}

impl Default for CatalogDefaults {
    fn default() -> Self {
        // Austin, TX
        Self {
            state: "TX".to_string(),
            lat: 30.2672,
            lon: -97.7431,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Versioned API prefix, without a trailing slash.
    pub base_url: String,
    pub defaults: CatalogDefaults,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            defaults: CatalogDefaults::default(),
        }
    }
}

impl ApiConfig {
    /// Validates `base_url` and returns a config pointing at it.
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            ..Self::default()
        })
    }

    pub fn with_default_state(mut self, state: impl Into<String>) -> Self {
        self.defaults.state = state.into();
        self
    }

    /// Reads `CIVILSHIELD_API_URL` and `CIVILSHIELD_DEFAULT_STATE`, falling
    /// back to the built-in defaults for anything unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match non_blank_env(BASE_URL_ENV) {
            Some(url) => Self::with_base_url(&url)?,
            None => Self::default(),
        };

        if let Some(state) = non_blank_env(DEFAULT_STATE_ENV) {
            config = config.with_default_state(state);
        }

        Ok(config)
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

/// Notification lifecycle settings.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationConfig {
    /// How long a toast stays up before it removes itself.
    pub ttl: Duration,
    /// Optional cap on concurrently displayed toasts. When reached, the
    /// oldest toast is evicted. `None` shows every toast.
    pub max_visible: Option<usize>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(5),
            max_visible: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api/v1");
        assert_eq!(config.defaults.state, "TX");
        assert_eq!(config.defaults.lat, 30.2672);
        assert_eq!(config.defaults.lon, -97.7431);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::with_base_url("https://shield.example/api/v1/").unwrap();
        assert_eq!(config.base_url, "https://shield.example/api/v1");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = ApiConfig::with_base_url("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let err = ApiConfig::with_base_url("ftp://shield.example/api").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(s) if s == "ftp"));
    }

    #[test]
    fn test_notification_defaults() {
        let config = NotificationConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(5));
        assert!(config.max_visible.is_none());
    }
}
