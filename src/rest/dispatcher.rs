//! HTTP dispatch of signed requests.
//!
//! Fixed transport policy: 60 second total timeout, at most 10 redirects,
//! HTTP/1.1 only, gzip/brotli/deflate negotiated transparently. No retries.

use http::Extensions;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::redirect::Policy;
use reqwest::{Request, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::{
    ERROR_MESSAGE, OTEL_STATUS_CODE, ReqwestOtelSpanBackend, TracingMiddleware,
    default_on_request_success, default_span_name, reqwest_otel_span,
};
use serde::Serialize;
use serde_json::Value;

use crate::config::{MAX_REDIRECTS, REQUEST_TIMEOUT};
use crate::error::{ClientError, reqwest_error_code};
use crate::types::HttpMethod;

/// Default user agent sent with every request.
pub fn default_user_agent() -> String {
    format!("oauth1-rest-client/{}", env!("CARGO_PKG_VERSION"))
}

/// Sends one signed request and decodes the JSON answer.
///
/// The HTTP status is not inspected: a `500` with a JSON body decodes the
/// same way a `200` does. Telling them apart is up to the endpoint caller.
#[derive(Clone)]
pub struct RequestDispatcher {
    http_client: ClientWithMiddleware,
}

impl RequestDispatcher {
    /// Create a dispatcher with the default user agent.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_user_agent(default_user_agent())
    }

    /// Create a dispatcher sending `user_agent`.
    pub fn with_user_agent(user_agent: impl AsRef<str>) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        let header_value = HeaderValue::from_str(user_agent.as_ref())
            .map_err(|e| ClientError::config(format!("invalid user agent: {e}")))?;
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .http1_only()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| ClientError::config(format!("failed to build HTTP client: {e}")))?;

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::<RedactedSpanBackend>::new())
            .build();

        Ok(Self { http_client })
    }

    /// Issue `method` against `signed_url` with `payload` as the JSON body.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Serialize`] if the payload cannot be encoded
    /// - [`ClientError::Transport`] if no response body was received
    /// - [`ClientError::ResponseDecode`] if the body is not JSON
    pub async fn dispatch<P>(
        &self,
        signed_url: &str,
        method: HttpMethod,
        payload: &P,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload).map_err(|e| ClientError::Serialize(e.to_string()))?;
        let endpoint = strip_query(signed_url);
        tracing::debug!(%method, endpoint, body_len = body.len(), "dispatching signed request");

        let response = self
            .http_client
            .request(method.into(), signed_url)
            .header(CONTENT_TYPE, "application/json")
            .header(CONTENT_LENGTH, body.len().to_string())
            .body(body)
            .send()
            .await
            .map_err(|e| {
                let err = ClientError::from(e);
                tracing::warn!(%method, endpoint, error = %err, "request failed");
                err
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            let err = ClientError::from(e);
            tracing::warn!(%method, endpoint, error = %err, "failed to read response body");
            err
        })?;

        tracing::debug!(%method, endpoint, status = status.as_u16(), "received response");
        decode_body(&body).inspect_err(|err| {
            tracing::warn!(%method, endpoint, status = status.as_u16(), error = %err, "response is not JSON");
        })
    }
}

impl std::fmt::Debug for RequestDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestDispatcher")
            .field("timeout", &REQUEST_TIMEOUT)
            .field("max_redirects", &MAX_REDIRECTS)
            .finish()
    }
}

/// Decode a response body into a JSON value.
///
/// An empty (or whitespace-only) body decodes to `null`. The bytes are parsed
/// as they arrived, so invalid UTF-8 is a decode error rather than being
/// replaced.
pub fn decode_body(body: &[u8]) -> Result<Value, ClientError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| ClientError::ResponseDecode {
        message: e.to_string(),
        body: String::from_utf8_lossy(body).into_owned(),
    })
}

/// The part of a URL before `?`, so signatures never end up in logs.
fn strip_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

/// Request spans that record the endpoint path but never the query string.
///
/// Failures are recorded by classifier only: reqwest error messages embed
/// the full signed URL.
struct RedactedSpanBackend;

impl ReqwestOtelSpanBackend for RedactedSpanBackend {
    fn on_request_start(req: &Request, ext: &mut Extensions) -> tracing::Span {
        let name = default_span_name(req, ext);
        reqwest_otel_span!(name = name, req, url.path = %req.url().path())
    }

    fn on_request_end(
        span: &tracing::Span,
        outcome: &reqwest_middleware::Result<Response>,
        _: &mut Extensions,
    ) {
        match outcome {
            Ok(response) => default_on_request_success(span, response),
            Err(err) => {
                let code = match err {
                    reqwest_middleware::Error::Reqwest(e) => reqwest_error_code(e),
                    reqwest_middleware::Error::Middleware(_) => "middleware",
                };
                span.record(OTEL_STATUS_CODE, "ERROR");
                span.record(ERROR_MESSAGE, code);
            }
        }
    }
}
