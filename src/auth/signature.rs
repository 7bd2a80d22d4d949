//! HMAC-SHA1 signature generation for one-legged OAuth 1.0a.
//!
//! ```text
//! key       = encode(consumer_secret) + "&" + encode(token_secret)
//! signature = base64(HMAC-SHA1(key, base_string))
//! ```
//!
//! This client never holds a token, so the second half of the key is empty.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::auth::encoding::percent_encode;
use crate::error::ClientError;

type HmacSha1 = Hmac<Sha1>;

/// Derive the HMAC key from the consumer secret (empty token secret).
pub fn signing_key(consumer_secret: &str) -> String {
    format!("{}&", percent_encode(consumer_secret))
}

/// Sign a signature base string with the consumer secret.
///
/// # Returns
///
/// Base64-encoded HMAC-SHA1 digest (28 characters, with padding).
///
/// # Example
///
/// ```rust
/// use oauth1_rest_client::auth::sign_base_string;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let signature = sign_base_string("GET&http%3A%2F%2Fexample.com%2F&", "secret")?;
/// assert_eq!(signature.len(), 28);
/// # Ok(())
/// # }
/// ```
pub fn sign_base_string(base_string: &str, consumer_secret: &str) -> Result<String, ClientError> {
    let key = signing_key(consumer_secret);

    let mut hmac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| ClientError::Signing(format!("Invalid HMAC key: {e}")))?;
    hmac.update(base_string.as_bytes());
    let digest = hmac.finalize().into_bytes();

    Ok(BASE64.encode(digest))
}
