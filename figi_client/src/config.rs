//! Client configuration: defaults, environment and an optional TOML file.
//!
//! Configuration is resolved once, when the client is built. The API key is
//! optional; without it requests go out unauthenticated and the service applies
//! its lower rate limit.
//!
//! ```toml
//! base_url = "https://api.openfigi.com"
//! mapping_path = "/v3/mapping"
//! search_path = "/v3/search"
//! api_key = "..."
//! timeout_secs = 30
//! ```

use std::{path::Path, time::Duration};

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use shared_utils::{
    config::{ConfigError, read_config_file},
    env::get_optional_env_var,
};

pub const DEFAULT_BASE_URL: &str = "https://api.openfigi.com";
pub const DEFAULT_MAPPING_PATH: &str = "/v3/mapping";
pub const DEFAULT_SEARCH_PATH: &str = "/v3/search";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENFIGI_API_KEY";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "OPENFIGI_BASE_URL";

/// Settings for an [`ApiClient`](crate::client::ApiClient).
#[derive(Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub mapping_path: String,
    pub search_path: String,
    pub api_key: Option<SecretString>,
    /// Whole-request timeout. `None` leaves the transport without one.
    pub timeout: Option<Duration>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    base_url: Option<String>,
    mapping_path: Option<String>,
    search_path: Option<String>,
    api_key: Option<String>,
    timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            mapping_path: DEFAULT_MAPPING_PATH.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            api_key: None,
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Defaults plus whatever `OPENFIGI_API_KEY` / `OPENFIGI_BASE_URL` provide.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Parses a TOML document. Missing keys fall back to the defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse_toml(toml_str, "inline TOML")
    }

    /// Reads and parses a TOML file.
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = read_config_file(path)?;
        Self::parse_toml(&contents, &path.display().to_string())
    }

    /// Environment values win over what is already set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(key) = get_optional_env_var(API_KEY_ENV) {
            self.api_key = Some(SecretString::new(key.into()));
        }
        if let Some(base_url) = get_optional_env_var(BASE_URL_ENV) {
            self.base_url = base_url;
        }
        self
    }

    pub fn with_api_key(self, api_key: impl Into<String>) -> Self {
        Self {
            api_key: non_empty_key(api_key.into()),
            ..self
        }
    }

    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..self
        }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }

    /// The configured key, if any. Blank keys are never stored.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|key| key.expose_secret())
    }

    fn parse_toml(toml_str: &str, origin: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(toml_str).map_err(|err| ConfigError::Parse {
            origin: origin.to_string(),
            message: err.to_string(),
        })?;

        let timeout = match file.timeout_secs {
            Some(0) => {
                return Err(ConfigError::InvalidValue {
                    key: "timeout_secs".to_string(),
                    message: "must be greater than zero".to_string(),
                });
            }
            secs => secs.map(Duration::from_secs),
        };

        let defaults = Self::default();
        Ok(Self {
            base_url: file.base_url.unwrap_or(defaults.base_url),
            mapping_path: file.mapping_path.unwrap_or(defaults.mapping_path),
            search_path: file.search_path.unwrap_or(defaults.search_path),
            api_key: file.api_key.and_then(non_empty_key),
            timeout,
        })
    }
}

fn non_empty_key(key: String) -> Option<SecretString> {
    let key = key.trim();
    (!key.is_empty()).then(|| SecretString::new(key.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_point_at_v3() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.openfigi.com");
        assert_eq!(config.mapping_path, "/v3/mapping");
        assert_eq!(config.search_path, "/v3/search");
        assert!(config.api_key().is_none());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn toml_overrides_selected_fields() {
        let config = ClientConfig::from_toml_str(
            r#"
            mapping_path = "/v3/mapping"
            api_key = "abc-123"
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key(), Some("abc-123"));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn blank_key_in_file_means_no_key() {
        let config = ClientConfig::from_toml_str(r#"api_key = "  ""#).unwrap();
        assert!(config.api_key().is_none());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = ClientConfig::from_toml_str("timeout_secs = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ClientConfig::from_toml_str(r#"base_uri = "x""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn reads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "base_url = \"http://localhost:8080\"").unwrap();
        let config = ClientConfig::from_toml_path(file.path()).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    #[serial]
    fn env_overrides_file_values() {
        unsafe {
            std::env::set_var(API_KEY_ENV, "from-env");
            std::env::set_var(BASE_URL_ENV, "http://127.0.0.1:9999");
        }
        let config = ClientConfig::from_toml_str(r#"api_key = "from-file""#)
            .unwrap()
            .with_env_overrides();
        unsafe {
            std::env::remove_var(API_KEY_ENV);
            std::env::remove_var(BASE_URL_ENV);
        }
        assert_eq!(config.api_key(), Some("from-env"));
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
    }

    #[test]
    #[serial]
    fn missing_env_key_leaves_client_unauthenticated() {
        unsafe { std::env::remove_var(API_KEY_ENV) };
        assert!(ClientConfig::from_env().api_key().is_none());
    }
}
