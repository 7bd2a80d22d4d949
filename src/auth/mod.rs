//! One-legged OAuth 1.0a request signing.
//!
//! This module provides:
//! - Consumer credential management with secure secret storage
//! - Nonce and timestamp generation for replay protection
//! - RFC 3986 percent-encoding
//! - Signature base string construction and HMAC-SHA1 signing
//! - Rendering of the signed parameters as a query string or header

mod authorization;
mod base_string;
mod credentials;
mod encoding;
mod nonce;
mod parameters;
mod signature;

pub use authorization::{AuthorizationParameters, OAUTH_SCHEME, header_to_query};
pub use base_string::{base_string_uri, build_base_string, normalize_parameters};
pub use credentials::{
    Credentials, CredentialsProvider, ENV_CONSUMER_KEY, ENV_CONSUMER_SECRET, EnvCredentials,
    StaticCredentials,
};
pub use encoding::{OAUTH_ENCODE_SET, percent_decode, percent_encode};
pub use nonce::{FixedNonce, NonceAndTimestamp, NonceProvider, RandomNonce, unix_timestamp};
pub use parameters::{OAUTH_VERSION, RequestParameters, SIGNATURE_METHOD, keys};
pub use signature::{sign_base_string, signing_key};

use crate::error::ClientError;

/// Sign a collected parameter set.
///
/// Builds the base string over every parameter in `request`, signs it with
/// the consumer secret and assembles the authorization parameters.
///
/// # Arguments
///
/// * `credentials` - Consumer credentials containing the secret
/// * `method` - HTTP method, any case
/// * `base_uri` - Request URL in base string URI form (no query, no fragment)
/// * `request` - The parameters collected for this request
///
/// # Example
///
/// ```rust
/// use oauth1_rest_client::auth::{Credentials, NonceAndTimestamp, RequestParameters, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("ck", "cs")?;
/// let nonce = NonceAndTimestamp { nonce: "n1".to_string(), timestamp: 1_000_000_000 };
/// let request = RequestParameters::collect(&credentials, nonce, "orders", None);
/// let auth = sign_request(&credentials, "GET", "http://example.com/api/orders", &request)?;
/// assert_eq!(auth.signature(), "NpE6XLzCmsTUfQnPaksgn2gkLtU=");
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    credentials: &Credentials,
    method: &str,
    base_uri: &str,
    request: &RequestParameters,
) -> Result<AuthorizationParameters, ClientError> {
    let base_string = build_base_string(method, base_uri, &request.signable_params());
    tracing::debug!(base_string = %base_string, "built signature base string");

    let signature = sign_base_string(&base_string, credentials.expose_secret())?;
    Ok(AuthorizationParameters::assemble(request, signature))
}
