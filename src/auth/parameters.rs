//! Collection of the parameters covered by an OAuth 1.0a signature.

use crate::auth::Credentials;
use crate::auth::nonce::NonceAndTimestamp;

/// The only protocol version this client speaks.
pub const OAUTH_VERSION: &str = "1.0";

/// The only signature method this client speaks.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// OAuth protocol parameter names.
pub mod keys {
    /// Consumer key parameter.
    pub const CONSUMER_KEY: &str = "oauth_consumer_key";
    /// Nonce parameter.
    pub const NONCE: &str = "oauth_nonce";
    /// Signature parameter (never part of the base string).
    pub const SIGNATURE: &str = "oauth_signature";
    /// Signature method parameter.
    pub const SIGNATURE_METHOD: &str = "oauth_signature_method";
    /// Timestamp parameter.
    pub const TIMESTAMP: &str = "oauth_timestamp";
    /// Version parameter.
    pub const VERSION: &str = "oauth_version";
}

/// Everything that goes into one signature.
///
/// Built fresh for each request and never modified afterwards: the
/// signature covers exactly the parameters held here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    consumer_key: String,
    nonce: String,
    timestamp: i64,
    uri: String,
    params: Vec<(String, String)>,
}

impl RequestParameters {
    /// Merge the OAuth protocol values with the caller's own parameters.
    ///
    /// `None` is the same as an empty parameter list. Names colliding with
    /// the reserved `oauth_*` keys are passed through unchanged; avoiding
    /// them is up to the caller.
    pub fn collect(
        credentials: &Credentials,
        nonce: NonceAndTimestamp,
        uri: impl Into<String>,
        caller_params: Option<Vec<(String, String)>>,
    ) -> Self {
        Self {
            consumer_key: credentials.consumer_key.clone(),
            nonce: nonce.nonce,
            timestamp: nonce.timestamp,
            uri: uri.into(),
            params: caller_params.unwrap_or_default(),
        }
    }

    /// The consumer key sent as `oauth_consumer_key`.
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    /// The per-request nonce.
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// The Unix timestamp in seconds.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// The protocol version, always `1.0`.
    pub fn version(&self) -> &'static str {
        OAUTH_VERSION
    }

    /// The request URI the parameters were collected for.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The caller's query parameters, in insertion order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// The OAuth protocol parameters (everything except the signature), unencoded.
    pub fn protocol_params(&self) -> Vec<(&'static str, String)> {
        vec![
            (keys::CONSUMER_KEY, self.consumer_key.clone()),
            (keys::NONCE, self.nonce.clone()),
            (keys::SIGNATURE_METHOD, SIGNATURE_METHOD.to_string()),
            (keys::TIMESTAMP, self.timestamp.to_string()),
            (keys::VERSION, OAUTH_VERSION.to_string()),
        ]
    }

    /// Every parameter the signature must cover: protocol plus caller parameters.
    pub fn signable_params(&self) -> Vec<(String, String)> {
        self.protocol_params()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .chain(self.params.iter().cloned())
            .collect()
    }
}
