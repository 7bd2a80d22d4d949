//! Assembly of the signed OAuth parameter set and its two renderings.
//!
//! The target API reads OAuth parameters from the query string, so the set
//! is normally rendered with [`AuthorizationParameters::to_query`]:
//!
//! ```text
//! oauth_consumer_key=..&oauth_nonce=..&oauth_signature=..&oauth_signature_method=HMAC-SHA1&oauth_timestamp=..&oauth_version=1.0
//! ```
//!
//! The header form is still available for servers that accept it.

use crate::auth::encoding::percent_encode;
use crate::auth::parameters::{RequestParameters, keys};

/// Authorization scheme token of the header form.
pub const OAUTH_SCHEME: &str = "OAuth";

/// The OAuth protocol parameters of one request, signature included.
///
/// Values are stored unencoded and kept sorted by name, which is the order
/// both renderings use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationParameters {
    params: Vec<(&'static str, String)>,
}

impl AuthorizationParameters {
    /// Combine the protocol parameters of `request` with its signature.
    pub fn assemble(request: &RequestParameters, signature: impl Into<String>) -> Self {
        let mut params = request.protocol_params();
        params.push((keys::SIGNATURE, signature.into()));
        params.sort_by(|a, b| a.0.cmp(b.0));
        Self { params }
    }

    /// The base64 signature.
    pub fn signature(&self) -> &str {
        self.get(keys::SIGNATURE).unwrap_or_default()
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, unencoded value)` pairs in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.params.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Render as an `Authorization` header value:
    /// `OAuth oauth_consumer_key="..", oauth_nonce="..", ...`.
    pub fn to_header(&self) -> String {
        let joined = self
            .params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} {}", OAUTH_SCHEME, joined)
    }

    /// Render as a query-string fragment ready to append after `&` or `?`.
    pub fn to_query(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", k, percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Convert an `Authorization` header value into its query-string form.
///
/// Drops the leading `OAuth ` token, turns every `, ` separator into `&` and
/// strips the quotes. Agrees with [`AuthorizationParameters::to_query`] for
/// headers produced by [`AuthorizationParameters::to_header`]; values are
/// percent-encoded there, so they never contain a literal comma or quote.
pub fn header_to_query(header: &str) -> String {
    let params = header
        .strip_prefix(OAUTH_SCHEME)
        .map(|rest| rest.strip_prefix(' ').unwrap_or(rest))
        .unwrap_or(header);
    params.replace(", ", "&").replace('"', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::auth::nonce::NonceAndTimestamp;

    fn reference() -> AuthorizationParameters {
        let creds = Credentials::new("ck", "cs").unwrap();
        let request = RequestParameters::collect(
            &creds,
            NonceAndTimestamp {
                nonce: "n1".to_string(),
                timestamp: 1_000_000_000,
            },
            "orders",
            None,
        );
        AuthorizationParameters::assemble(&request, "NpE6XLzCmsTUfQnPaksgn2gkLtU=")
    }

    #[test]
    fn test_header_form() {
        assert_eq!(
            reference().to_header(),
            "OAuth oauth_consumer_key=\"ck\", oauth_nonce=\"n1\", oauth_signature=\"NpE6XLzCmsTUfQnPaksgn2gkLtU%3D\", oauth_signature_method=\"HMAC-SHA1\", oauth_timestamp=\"1000000000\", oauth_version=\"1.0\""
        );
    }

    #[test]
    fn test_query_form() {
        assert_eq!(
            reference().to_query(),
            "oauth_consumer_key=ck&oauth_nonce=n1&oauth_signature=NpE6XLzCmsTUfQnPaksgn2gkLtU%3D&oauth_signature_method=HMAC-SHA1&oauth_timestamp=1000000000&oauth_version=1.0"
        );
    }

    #[test]
    fn test_header_to_query_matches_direct_rendering() {
        let auth = reference();
        assert_eq!(header_to_query(&auth.to_header()), auth.to_query());
    }

    #[test]
    fn test_header_to_query_shape() {
        let creds = Credentials::new("key, with \"quotes\"", "cs").unwrap();
        let request = RequestParameters::collect(
            &creds,
            NonceAndTimestamp {
                nonce: "a/b+c".to_string(),
                timestamp: 42,
            },
            "orders",
            None,
        );
        let auth = AuthorizationParameters::assemble(&request, "ab/cd+ef==");
        let query = header_to_query(&auth.to_header());

        assert!(!query.contains('"'));
        assert!(!query.starts_with("OAuth"));
        assert!(!query.contains(','));
        assert_eq!(query.matches('&').count(), 5);
        assert_eq!(query, auth.to_query());
    }

    #[test]
    fn test_accessors() {
        let auth = reference();
        assert_eq!(auth.signature(), "NpE6XLzCmsTUfQnPaksgn2gkLtU=");
        assert_eq!(auth.get(keys::SIGNATURE_METHOD), Some("HMAC-SHA1"));
        assert_eq!(auth.get("oauth_token"), None);
        let names: Vec<_> = auth.iter().map(|(k, _)| k).collect();
        assert_eq!(
            names,
            vec![
                "oauth_consumer_key",
                "oauth_nonce",
                "oauth_signature",
                "oauth_signature_method",
                "oauth_timestamp",
                "oauth_version"
            ]
        );
    }
}
