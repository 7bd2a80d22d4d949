//! Signature base string construction (RFC 5849 §3.4.1).
//!
//! ```text
//! METHOD & encode(base_uri) & encode(k1=v1&k2=v2...)
//! ```
//!
//! Parameter names and values are percent-encoded first, then sorted by
//! encoded name and, for equal names, by encoded value.

use url::Url;

use crate::auth::encoding::percent_encode;

/// Normalize a parameter set into the `k=v&k=v` form of RFC 5849 §3.4.1.3.2.
///
/// The result does not depend on the order of the input.
pub fn normalize_parameters<K, V>(params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k.as_ref()), percent_encode(v.as_ref())))
        .collect();

    // Tuple ordering is byte-wise on the key, then on the value.
    encoded.sort();

    encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// The base string URI of a request URL: `scheme://host[:port]/path`.
///
/// Scheme and host come out lowercase, default ports are dropped and the
/// query and fragment are removed.
pub fn base_string_uri(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    match url.port() {
        Some(port) => format!("{}://{}:{}{}", url.scheme(), host, port, url.path()),
        None => format!("{}://{}{}", url.scheme(), host, url.path()),
    }
}

/// Build the signature base string.
///
/// `base_uri` must already be in base string URI form (see
/// [`base_string_uri`]). An empty parameter set still yields three
/// `&`-joined segments, the last one empty.
pub fn build_base_string<K, V>(method: &str, base_uri: &str, params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let method = method.to_ascii_uppercase();
    let normalized = normalize_parameters(params);
    format!(
        "{}&{}&{}",
        percent_encode(&method),
        percent_encode(base_uri),
        percent_encode(&normalized)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sorts_by_key_then_value() {
        let params = [("b", "x"), ("a", "2"), ("a", "10"), ("a", "1")];
        assert_eq!(normalize_parameters(&params), "a=1&a=10&a=2&b=x");
    }

    #[test]
    fn test_normalize_sorts_on_encoded_form() {
        // "a b" encodes to "a%20b", which sorts before "a-b" ('%' < '-').
        let params = [("a-b", "1"), ("a b", "2")];
        assert_eq!(normalize_parameters(&params), "a%20b=2&a-b=1");
    }

    #[test]
    fn test_normalize_is_order_independent() {
        let forward = [("c", "3"), ("a", "1"), ("b", "2")];
        let backward = [("b", "2"), ("a", "1"), ("c", "3")];
        assert_eq!(normalize_parameters(&forward), normalize_parameters(&backward));
    }

    #[test]
    fn test_empty_parameter_set() {
        let params: [(&str, &str); 0] = [];
        assert_eq!(
            build_base_string("get", "http://example.com/api/orders", &params),
            "GET&http%3A%2F%2Fexample.com%2Fapi%2Forders&"
        );
    }

    #[test]
    fn test_method_uppercased() {
        let params = [("a", "1")];
        let lower = build_base_string("post", "http://example.com/", &params);
        let upper = build_base_string("POST", "http://example.com/", &params);
        assert_eq!(lower, upper);
        assert!(lower.starts_with("POST&"));
    }

    #[test]
    fn test_base_string_uri_normalization() {
        let url = Url::parse("HTTP://Example.COM:80/api/orders?status=any#frag").unwrap();
        assert_eq!(base_string_uri(&url), "http://example.com/api/orders");

        let url = Url::parse("https://example.com:8443/wp-json/wc/v3/orders").unwrap();
        assert_eq!(
            base_string_uri(&url),
            "https://example.com:8443/wp-json/wc/v3/orders"
        );
    }

    #[test]
    fn test_reference_vector() {
        let params = [
            ("oauth_consumer_key", "ck"),
            ("oauth_nonce", "n1"),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", "1000000000"),
            ("oauth_version", "1.0"),
        ];
        assert_eq!(
            build_base_string("GET", "http://example.com/api/orders", &params),
            "GET&http%3A%2F%2Fexample.com%2Fapi%2Forders&oauth_consumer_key%3Dck%26oauth_nonce%3Dn1%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1000000000%26oauth_version%3D1.0"
        );
    }

    #[test]
    fn test_rfc5849_initiate_example() {
        let params = [
            ("oauth_consumer_key", "dpf43f3p2l4k3l03"),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", "137131200"),
            ("oauth_nonce", "wIjqoS"),
            ("oauth_callback", "http://printer.example.com/ready"),
        ];
        assert_eq!(
            build_base_string("POST", "https://photos.example.net/initiate", &params),
            "POST&https%3A%2F%2Fphotos.example.net%2Finitiate&oauth_callback%3Dhttp%253A%252F%252Fprinter.example.com%252Fready%26oauth_consumer_key%3Ddpf43f3p2l4k3l03%26oauth_nonce%3DwIjqoS%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D137131200"
        );
    }

    #[test]
    fn test_values_double_encoded_in_base_string() {
        let params = [("search", "a b&c=d/é")];
        let base = build_base_string("GET", "http://example.com/", &params);
        assert!(base.ends_with("&search%3Da%2520b%2526c%253Dd%252F%25C3%25A9"));
    }
}
