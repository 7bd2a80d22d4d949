//! Client configuration.
//!
//! Supplied once at construction and never reloaded. There are no built-in
//! default credentials or endpoint domain.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::auth::Credentials;
use crate::error::ClientError;

/// Default environment variable prefix used by [`ApiConfig::from_env`].
pub const DEFAULT_ENV_PREFIX: &str = "OAUTH1_API";

/// Total time allowed for one request, redirects included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Maximum number of redirects followed before giving up.
pub const MAX_REDIRECTS: usize = 10;

/// URL scheme used to reach the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Plain HTTP
    Http,
    /// HTTP over TLS
    #[default]
    Https,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Http => write!(f, "http"),
            Scheme::Https => write!(f, "https"),
        }
    }
}

impl FromStr for Scheme {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Scheme::Http),
            "https" => Ok(Scheme::Https),
            other => Err(ClientError::config(format!("unsupported scheme: {other}"))),
        }
    }
}

/// Connection and credential settings for an [`ApiClient`](crate::rest::ApiClient).
#[derive(Clone)]
pub struct ApiConfig {
    /// Consumer key issued by the API provider
    pub consumer_key: String,
    /// Consumer secret issued by the API provider
    consumer_secret: SecretString,
    /// API host, optionally with a port (`shop.example.com`, `localhost:8080`)
    pub domain: String,
    /// URL scheme
    pub scheme: Scheme,
    /// Path prefix of the REST API (`wp-json/wc/v3`), may be empty
    pub api_path: String,
}

impl ApiConfig {
    /// Create and validate a configuration.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        domain: impl Into<String>,
        scheme: Scheme,
    ) -> Result<Self, ClientError> {
        let config = Self {
            consumer_key: consumer_key.into(),
            consumer_secret: SecretString::from(consumer_secret.into()),
            domain: domain.into(),
            scheme,
            api_path: String::new(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the REST API path prefix.
    pub fn with_api_path(mut self, api_path: impl Into<String>) -> Self {
        self.api_path = api_path.into();
        self
    }

    /// Create a configuration from the default environment variables.
    ///
    /// See [`ApiConfig::from_env_prefix`].
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_env_prefix(DEFAULT_ENV_PREFIX)
    }

    /// Create a configuration from environment variables sharing `prefix`.
    ///
    /// Reads the following variables:
    /// - `<PREFIX>_CONSUMER_KEY` (required)
    /// - `<PREFIX>_CONSUMER_SECRET` (required)
    /// - `<PREFIX>_DOMAIN` (required)
    /// - `<PREFIX>_SCHEME`: `http` or `https` (default `https`)
    /// - `<PREFIX>_API_PATH`: path prefix (default empty)
    pub fn from_env_prefix(prefix: &str) -> Result<Self, ClientError> {
        let required = |name: &str| {
            let var = format!("{prefix}_{name}");
            env::var(&var).map_err(|_| ClientError::config(format!("environment variable {var} not set")))
        };

        let consumer_key = required("CONSUMER_KEY")?;
        let consumer_secret = required("CONSUMER_SECRET")?;
        let domain = required("DOMAIN")?;
        let scheme = match env::var(format!("{prefix}_SCHEME")) {
            Ok(value) => value.parse()?,
            Err(_) => Scheme::default(),
        };
        let api_path = env::var(format!("{prefix}_API_PATH")).unwrap_or_default();

        Ok(Self::new(consumer_key, consumer_secret, domain, scheme)?.with_api_path(api_path))
    }

    /// Check that key, secret and domain are present.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.consumer_key.trim().is_empty() {
            return Err(ClientError::config("consumer key must not be empty"));
        }
        if self.consumer_secret.expose_secret().is_empty() {
            return Err(ClientError::config("consumer secret must not be empty"));
        }
        let domain = self.domain.trim();
        if domain.is_empty() {
            return Err(ClientError::config("API domain must not be empty"));
        }
        let not_bare = || ClientError::config(format!("API domain must be a bare host, got {domain}"));
        if domain.contains("://") || domain.contains('/') {
            return Err(not_bare());
        }
        let url = Url::parse(&format!("{}://{}", self.scheme, domain)).map_err(|_| not_bare())?;
        if url.host_str().is_none()
            || url.path() != "/"
            || url.query().is_some()
            || url.fragment().is_some()
            || !url.username().is_empty()
            || url.password().is_some()
        {
            return Err(not_bare());
        }
        Ok(())
    }

    /// The endpoint base URL: `scheme://domain[/api_path]`, without a trailing slash.
    pub fn base_url(&self) -> String {
        let domain = self.domain.trim();
        let path = self.api_path.trim_matches('/');
        if path.is_empty() {
            format!("{}://{}", self.scheme, domain)
        } else {
            format!("{}://{}/{}", self.scheme, domain, path)
        }
    }

    /// Build signing credentials from this configuration.
    pub fn credentials(&self) -> Result<Credentials, ClientError> {
        Credentials::new(&self.consumer_key, self.consumer_secret.expose_secret())
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("domain", &self.domain)
            .field("scheme", &self.scheme)
            .field("api_path", &self.api_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        let config = ApiConfig::new("ck", "cs", "example.com", Scheme::Http).unwrap();
        assert_eq!(config.base_url(), "http://example.com");

        let config = config.with_api_path("/wp-json/wc/v3/");
        assert_eq!(config.base_url(), "http://example.com/wp-json/wc/v3");
    }

    #[test]
    fn test_rejects_empty_values() {
        assert!(ApiConfig::new("", "cs", "example.com", Scheme::Https)
            .unwrap_err()
            .is_configuration());
        assert!(ApiConfig::new("ck", "", "example.com", Scheme::Https)
            .unwrap_err()
            .is_configuration());
        assert!(ApiConfig::new("ck", "cs", " ", Scheme::Https)
            .unwrap_err()
            .is_configuration());
    }

    #[test]
    fn test_rejects_domain_with_scheme() {
        let err = ApiConfig::new("ck", "cs", "https://example.com", Scheme::Https).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_rejects_domain_with_query_or_userinfo() {
        for domain in [
            "example.com?x",
            "example.com#frag",
            "user@example.com",
            "user:pass@example.com",
            "exa mple.com",
        ] {
            let err = ApiConfig::new("ck", "cs", domain, Scheme::Https).unwrap_err();
            assert!(err.is_configuration(), "{domain} accepted");
        }
    }

    #[test]
    fn test_accepts_host_with_port() {
        let config = ApiConfig::new("ck", "cs", "127.0.0.1:8080", Scheme::Http).unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
        assert!(ApiConfig::new("ck", "cs", "shop.example.com", Scheme::Https).is_ok());
    }

    #[test]
    fn test_scheme_parse_and_display() {
        assert_eq!("HTTP".parse::<Scheme>().unwrap(), Scheme::Http);
        assert_eq!("https".parse::<Scheme>().unwrap(), Scheme::Https);
        assert!("ftp".parse::<Scheme>().is_err());
        assert_eq!(Scheme::Https.to_string(), "https");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ApiConfig::new("ck_visible", "cs_hidden", "example.com", Scheme::Https).unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("ck_visible"));
        assert!(!debug.contains("cs_hidden"));
    }

    #[test]
    fn test_from_env_missing() {
        let err = ApiConfig::from_env_prefix("OAUTH1_TEST_SURELY_UNSET").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_credentials_from_config() {
        let config = ApiConfig::new("ck", "cs", "example.com", Scheme::Https).unwrap();
        let creds = config.credentials().unwrap();
        assert_eq!(creds.consumer_key, "ck");
        assert_eq!(creds.expose_secret(), "cs");
    }
}
