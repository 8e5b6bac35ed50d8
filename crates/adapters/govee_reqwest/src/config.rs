//! Govee API configuration.

use std::fmt;

use serde::Deserialize;

use crate::client::GoveeClient;
use crate::error::ClientError;

/// Public Govee developer API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://openapi.api.govee.com";

/// Configuration for the Govee cloud client.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct GoveeConfig {
    /// Developer API key, sent as `Govee-API-Key` on every request.
    pub api_key: String,
    /// Scheme and host of the API, without a trailing path.
    pub base_url: String,
}

impl Default for GoveeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

// Keeps the key out of logs.
impl fmt::Debug for GoveeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoveeConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GoveeConfig {
    /// Check that a key is present and the base URL parses.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingApiKey`] or [`ClientError::InvalidBaseUrl`].
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.api_key.trim().is_empty() {
            return Err(ClientError::MissingApiKey);
        }
        reqwest::Url::parse(&self.base_url).map_err(|err| ClientError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: err.to_string(),
        })?;
        Ok(())
    }

    /// Build a [`GoveeClient`] with a fresh connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if validation fails or the HTTP client cannot
    /// be initialised.
    pub fn build(self) -> Result<GoveeClient, ClientError> {
        self.validate()?;
        let http = reqwest::Client::builder().build()?;
        Ok(GoveeClient::new(self, http))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key(api_key: &str) -> GoveeConfig {
        GoveeConfig {
            api_key: api_key.to_string(),
            ..GoveeConfig::default()
        }
    }

    #[test]
    fn should_default_to_public_endpoint() {
        let config = GoveeConfig::default();
        assert_eq!(config.base_url, "https://openapi.api.govee.com");
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            api_key = "secret"
            base_url = "http://127.0.0.1:8080"
        "#;
        let config: GoveeConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config: GoveeConfig = toml::from_str(r#"api_key = "secret""#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn should_reject_empty_api_key() {
        let config = with_key("  ");
        assert!(matches!(config.validate(), Err(ClientError::MissingApiKey)));
    }

    #[test]
    fn should_reject_unparseable_base_url() {
        let config = GoveeConfig {
            base_url: "openapi.api.govee.com".to_string(),
            ..with_key("secret")
        };
        assert!(matches!(
            config.validate(),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn should_accept_valid_config() {
        assert!(with_key("secret").validate().is_ok());
    }

    #[test]
    fn should_redact_api_key_in_debug_output() {
        let rendered = format!("{:?}", with_key("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
