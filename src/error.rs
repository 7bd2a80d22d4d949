//! Error types for the OAuth 1.0a REST client.

use thiserror::Error;

/// The main error type for all client operations.
///
/// Every variant is recoverable: the client never panics or aborts on a
/// failed request, it hands the failure back to the caller once.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Missing or invalid client configuration (empty key, secret or domain).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The signature could not be computed.
    #[error("Signing error: {0}")]
    Signing(String),

    /// The request never produced a response body.
    ///
    /// `code` is a stable classifier (`timeout`, `connect`, `redirect`,
    /// `request`, `body`, `middleware`), `message` carries the underlying error.
    #[error("Transport error ({code}): {message}")]
    Transport {
        /// Failure classifier
        code: &'static str,
        /// Underlying error message
        message: String,
    },

    /// The server answered, but the body is not valid JSON.
    #[error("Response decode error: {message}")]
    ResponseDecode {
        /// Parser error message
        message: String,
        /// The raw body as received
        body: String,
    },

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Query or payload could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl ClientError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a transport error with the given classifier.
    pub fn transport(code: &'static str, message: impl Into<String>) -> Self {
        Self::Transport {
            code,
            message: message.into(),
        }
    }

    /// Check if this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Check if this is a transport-level failure (server unreachable, timeout, ...).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if the server returned a payload that is not JSON.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::ResponseDecode { .. })
    }

    /// The transport classifier, if this is a transport error.
    pub fn transport_code(&self) -> Option<&'static str> {
        match self {
            Self::Transport { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Stable classifier for a reqwest failure.
pub(crate) fn reqwest_error_code(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connect"
    } else if err.is_redirect() {
        "redirect"
    } else if err.is_body() || err.is_decode() {
        "body"
    } else {
        "request"
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the OAuth signature.
        let err = err.without_url();
        Self::transport(reqwest_error_code(&err), err.to_string())
    }
}

impl From<reqwest_middleware::Error> for ClientError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => Self::transport("middleware", e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let error = ClientError::transport("connect", "connection refused");
        assert_eq!(
            error.to_string(),
            "Transport error (connect): connection refused"
        );
        assert!(error.is_transport());
        assert_eq!(error.transport_code(), Some("connect"));
    }

    #[test]
    fn test_decode_error_is_distinct_from_transport() {
        let error = ClientError::ResponseDecode {
            message: "expected value".to_string(),
            body: "<html>".to_string(),
        };
        assert!(error.is_decode());
        assert!(!error.is_transport());
        assert_eq!(error.transport_code(), None);
    }

    #[test]
    fn test_config_error() {
        let error = ClientError::config("consumer key is empty");
        assert!(error.is_configuration());
        assert_eq!(error.to_string(), "Configuration error: consumer key is empty");
    }
}
