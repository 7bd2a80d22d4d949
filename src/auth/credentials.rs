//! Consumer credential management for one-legged OAuth signing.

use secrecy::{ExposeSecret, SecretString};

use crate::error::ClientError;

/// Default environment variable holding the consumer key.
pub const ENV_CONSUMER_KEY: &str = "OAUTH1_API_CONSUMER_KEY";
/// Default environment variable holding the consumer secret.
pub const ENV_CONSUMER_SECRET: &str = "OAUTH1_API_CONSUMER_SECRET";

/// Consumer credentials: the key and secret issued by the API provider.
///
/// There is no token or token secret; every request is signed with the
/// consumer secret alone.
#[derive(Clone)]
pub struct Credentials {
    /// The consumer key (public identifier, sent as `oauth_consumer_key`)
    pub consumer_key: String,
    /// The consumer secret (private, used to derive the signing key)
    consumer_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from a consumer key and secret.
    ///
    /// Returns [`ClientError::Configuration`] if either value is empty, so a
    /// bad setup fails at construction instead of at signing time.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let consumer_key = consumer_key.into();
        let consumer_secret = consumer_secret.into();

        if consumer_key.trim().is_empty() {
            return Err(ClientError::config("consumer key must not be empty"));
        }
        if consumer_secret.is_empty() {
            return Err(ClientError::config("consumer secret must not be empty"));
        }

        Ok(Self {
            consumer_key,
            consumer_secret: SecretString::from(consumer_secret),
        })
    }

    /// Get the consumer secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.consumer_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing consumer credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

impl CredentialsProvider for Credentials {
    fn get_credentials(&self) -> &Credentials {
        self
    }
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            credentials: Credentials::new(consumer_key, consumer_secret)?,
        })
    }
}

impl From<Credentials> for StaticCredentials {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `OAUTH1_API_CONSUMER_KEY` and `OAUTH1_API_CONSUMER_SECRET`.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_env_vars(ENV_CONSUMER_KEY, ENV_CONSUMER_SECRET)
    }

    /// Create credentials from custom environment variable names.
    ///
    /// A missing or empty variable is a configuration error.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, ClientError> {
        let consumer_key = std::env::var(key_var)
            .map_err(|_| ClientError::config(format!("environment variable {key_var} not set")))?;
        let consumer_secret = std::env::var(secret_var).map_err(|_| {
            ClientError::config(format!("environment variable {secret_var} not set"))
        })?;

        Ok(Self {
            credentials: Credentials::new(consumer_key, consumer_secret)?,
        })
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if the variables are not set or are empty.
    pub fn try_from_env() -> Option<Self> {
        Self::from_env().ok()
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("ck_live", "cs_super_secret").unwrap();
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("ck_live"));
        assert!(!debug_str.contains("cs_super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("key", "secret").unwrap();
        let creds = provider.get_credentials();
        assert_eq!(creds.consumer_key, "key");
        assert_eq!(creds.expose_secret(), "secret");
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = Credentials::new("  ", "secret").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_empty_secret_rejected() {
        let err = StaticCredentials::new("key", "").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_env_credentials_missing_vars() {
        let err = EnvCredentials::from_env_vars(
            "OAUTH1_TEST_SURELY_UNSET_KEY",
            "OAUTH1_TEST_SURELY_UNSET_SECRET",
        )
        .unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("OAUTH1_TEST_SURELY_UNSET_KEY"));
    }
}
