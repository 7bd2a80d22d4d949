//! OAuth 1.0a signed REST client implementation.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::auth::{
    AuthorizationParameters, CredentialsProvider, NonceProvider, RandomNonce, RequestParameters,
    base_string_uri, percent_encode, sign_request,
};
use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::rest::dispatcher::{RequestDispatcher, default_user_agent};
use crate::types::HttpMethod;

/// A request that has been signed and is ready to send once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// HTTP method the signature was computed for
    pub method: HttpMethod,
    /// Full URL: endpoint, caller query parameters, then the OAuth parameters
    pub url: String,
    /// The signed OAuth parameters appended to `url`
    pub authorization: AuthorizationParameters,
}

/// The signed REST API client.
///
/// Every call signs the exact query string it transmits with one-legged
/// OAuth 1.0a (HMAC-SHA1, consumer key and secret only), appends the OAuth
/// parameters to the URL and sends the payload as JSON.
///
/// # Example
///
/// ```rust,no_run
/// use oauth1_rest_client::config::{ApiConfig, Scheme};
/// use oauth1_rest_client::rest::ApiClient;
/// use oauth1_rest_client::types::{EmptyPayload, HttpMethod};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ApiConfig::new("ck_key", "cs_secret", "shop.example.com", Scheme::Https)?
///         .with_api_path("wp-json/wc/v3");
///     let client = ApiClient::new(config)?;
///
///     let orders = client
///         .sign_and_dispatch("orders", HttpMethod::Get, &[("status", "processing")], &EmptyPayload {})
///         .await?;
///     println!("Orders: {}", orders);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    dispatcher: RequestDispatcher,
    base_url: String,
    credentials: Arc<dyn CredentialsProvider>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl ApiClient {
    /// Create a client from a configuration with default settings.
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        Self::builder(config).build()
    }

    /// Create a new client builder.
    pub fn builder(config: ApiConfig) -> ApiClientBuilder {
        ApiClientBuilder::new(config)
    }

    /// The endpoint base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a request path against the base URL.
    pub fn endpoint_url(&self, uri: &str) -> Result<Url, ClientError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            uri.trim_start_matches('/')
        );
        Ok(Url::parse(&url)?)
    }

    /// Sign a request without sending it.
    ///
    /// Query parameters already present in `uri` and those in `query` are
    /// both covered by the signature and both transmitted.
    pub fn sign<Q>(&self, uri: &str, method: HttpMethod, query: &Q) -> Result<SignedRequest, ClientError>
    where
        Q: Serialize + ?Sized,
    {
        let mut url = self.endpoint_url(uri)?;
        let mut params: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        params.extend(query_pairs(query)?);
        url.set_query(None);
        url.set_fragment(None);

        let credentials = self.credentials.get_credentials();
        let request = RequestParameters::collect(
            credentials,
            self.nonce_provider.generate(),
            uri,
            Some(params),
        );
        let authorization =
            sign_request(credentials, method.as_str(), &base_string_uri(&url), &request)?;

        let caller_query = request
            .params()
            .iter()
            .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let signed_url = if caller_query.is_empty() {
            format!("{}?{}", url, authorization.to_query())
        } else {
            format!("{}?{}&{}", url, caller_query, authorization.to_query())
        };

        tracing::debug!(%method, endpoint = %url, params = request.params().len(), "signed request");

        Ok(SignedRequest {
            method,
            url: signed_url,
            authorization,
        })
    }

    /// Sign a request and return only its URL.
    pub fn signed_url<Q>(&self, uri: &str, method: HttpMethod, query: &Q) -> Result<String, ClientError>
    where
        Q: Serialize + ?Sized,
    {
        Ok(self.sign(uri, method, query)?.url)
    }

    /// Sign a request and send it, returning the decoded JSON body.
    ///
    /// This is the single pipeline every endpoint goes through. The HTTP
    /// status is not inspected; any JSON body is returned as-is.
    pub async fn sign_and_dispatch<Q, P>(
        &self,
        uri: &str,
        method: HttpMethod,
        query: &Q,
        payload: &P,
    ) -> Result<Value, ClientError>
    where
        Q: Serialize + ?Sized,
        P: Serialize + ?Sized,
    {
        let signed = self.sign(uri, method, query)?;
        self.dispatcher
            .dispatch(&signed.url, signed.method, payload)
            .await
    }

    /// Like [`ApiClient::sign_and_dispatch`], deserializing into `T`.
    pub async fn sign_and_dispatch_as<T, Q, P>(
        &self,
        uri: &str,
        method: HttpMethod,
        query: &Q,
        payload: &P,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        P: Serialize + ?Sized,
    {
        let value = self.sign_and_dispatch(uri, method, query, payload).await?;
        T::deserialize(&value).map_err(|e| ClientError::ResponseDecode {
            message: e.to_string(),
            body: value.to_string(),
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("consumer_key", &self.credentials.get_credentials().consumer_key)
            .finish()
    }
}

/// Flatten a serializable query into decoded `(name, value)` pairs.
fn query_pairs<Q>(query: &Q) -> Result<Vec<(String, String)>, ClientError>
where
    Q: Serialize + ?Sized,
{
    let encoded =
        serde_urlencoded::to_string(query).map_err(|e| ClientError::Serialize(e.to_string()))?;
    Ok(url::form_urlencoded::parse(encoded.as_bytes())
        .into_owned()
        .collect())
}

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    config: ApiConfig,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Create a new builder from a configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            credentials: None,
            nonce_provider: None,
            user_agent: None,
        }
    }

    /// Override the credentials taken from the configuration.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    ///
    /// Fails with [`ClientError::Configuration`] on an invalid configuration
    /// or if the HTTP client cannot be created.
    pub fn build(self) -> Result<ApiClient, ClientError> {
        self.config.validate()?;

        let credentials: Arc<dyn CredentialsProvider> = match self.credentials {
            Some(credentials) => credentials,
            None => Arc::new(self.config.credentials()?),
        };

        let user_agent = self.user_agent.unwrap_or_else(default_user_agent);
        let dispatcher = RequestDispatcher::with_user_agent(user_agent)?;

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(RandomNonce::new()));

        Ok(ApiClient {
            dispatcher,
            base_url: self.config.base_url(),
            credentials,
            nonce_provider,
        })
    }
}
