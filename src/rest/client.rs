//! Bleutrade REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::{
    Credentials, CredentialsProvider, NonceProvider, StaticCredentials, UnixTimeNonce, sign_url,
};
use crate::error::{ApiError, BleutradeError};
use crate::rest::endpoints::{API_SIGN_HEADER, BLEUTRADE_BASE_URL};
use crate::rest::query::{QueryParams, compose_url};
use crate::types::serde_helpers::{bool_or_string, empty_string_as_none};

/// Whether a request needs the `apisign` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Unsigned request.
    Public,
    /// Signed request; fails without credentials.
    Private,
}

/// The Bleutrade REST API client.
///
/// Every call issues one signed or unsigned GET request and returns the
/// `result` field of the response envelope.
///
/// # Example
///
/// ```rust,no_run
/// use bleutrade_api_client::rest::BleutradeRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = BleutradeRestClient::new();
///
///     let markets = client.get_markets().await?;
///     println!("Markets: {markets}");
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use bleutrade_api_client::rest::BleutradeRestClient;
/// use bleutrade_api_client::types::Currencies;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BleutradeRestClient::with_credentials("api_key", "api_secret");
///
///     let balances = client.get_balances(Currencies::list(["BTC", "DOGE"])).await?;
///     println!("Balances: {balances}");
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BleutradeRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl BleutradeRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`BleutradeRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a client authenticated with an API key and secret.
    pub fn with_credentials(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::builder()
            .credentials(Arc::new(StaticCredentials::new(api_key, api_secret)))
            .build()
    }

    /// Create a new client builder.
    pub fn builder() -> BleutradeRestClientBuilder {
        BleutradeRestClientBuilder::new()
    }

    /// The API root every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn credentials(&self) -> Option<&Credentials> {
        self.credentials
            .as_ref()
            .map(|provider| provider.get_credentials())
    }

    /// Build the full request URL for `path`.
    ///
    /// When an API key is configured, `apikey` and a fresh `nonce` come
    /// first, followed by `params` in insertion order.
    pub fn build_url(&self, path: &str, params: &QueryParams) -> String {
        let auth = match self.credentials() {
            Some(creds) if !creds.api_key.is_empty() => QueryParams::new()
                .push("apikey", &creds.api_key)
                .push("nonce", self.nonce_provider.next_nonce()),
            _ => QueryParams::new(),
        };

        let query = auth.extend(params).to_query_string();
        compose_url(&self.base_url, path, &query)
    }

    /// Send a GET request and return the envelope's `result`.
    ///
    /// Private requests are refused before any network activity when the
    /// client lacks a key or a secret.
    pub async fn fetch(
        &self,
        path: &str,
        params: &QueryParams,
        access: Access,
    ) -> Result<Value, BleutradeError> {
        let secret = match access {
            Access::Public => None,
            Access::Private => match self.credentials() {
                Some(creds) if creds.is_complete() => Some(creds.expose_secret()),
                _ => return Err(BleutradeError::missing_credentials()),
            },
        };

        let url = self.build_url(path, params);
        let mut request = self.http_client.get(&url);
        if let Some(secret) = secret {
            request = request.header(API_SIGN_HEADER, sign_url(&url, secret)?);
        }

        tracing::debug!(path, ?access, "sending Bleutrade request");
        let response = request.send().await?;
        self.parse_response(path, response).await
    }

    /// Like [`fetch`](Self::fetch), deserializing `result` into `T`.
    pub async fn fetch_as<T>(
        &self,
        path: &str,
        params: &QueryParams,
        access: Access,
    ) -> Result<T, BleutradeError>
    where
        T: DeserializeOwned,
    {
        let result = self.fetch(path, params, access).await?;
        serde_json::from_value(result)
            .map_err(|e| BleutradeError::Protocol(format!("Unexpected result shape: {e}")))
    }

    pub(crate) async fn public_get(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> Result<Value, BleutradeError> {
        self.fetch(path, params, Access::Public).await
    }

    pub(crate) async fn private_get(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> Result<Value, BleutradeError> {
        self.fetch(path, params, Access::Private).await
    }

    /// Parse a response from the Bleutrade API.
    async fn parse_response(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<Value, BleutradeError> {
        let status_error = response.error_for_status_ref().err();
        let body = response.text().await?;

        let envelope: Envelope = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(e) => {
                // A non-2xx status without a readable envelope is a transport failure.
                if let Some(status_error) = status_error {
                    return Err(status_error.into());
                }

                tracing::warn!(path, error = %e, "malformed Bleutrade response");
                return Err(BleutradeError::Protocol(format!(
                    "Failed to parse response: {e}. Body: {body}"
                )));
            }
        };

        let result = envelope.into_result().inspect_err(|err| {
            tracing::warn!(path, error = %err, "Bleutrade request failed");
        })?;

        // A success envelope cannot override a non-2xx status.
        if let Some(status_error) = status_error {
            tracing::warn!(path, error = %status_error, "HTTP error status with success envelope");
            return Err(status_error.into());
        }

        Ok(result)
    }
}

impl Default for BleutradeRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BleutradeRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BleutradeRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`BleutradeRestClient`].
pub struct BleutradeRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    max_retries: u32,
}

impl BleutradeRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BLEUTRADE_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            timeout: None,
            max_retries: 0,
        }
    }

    /// Set the API root (useful for testing with a mock server).
    ///
    /// A trailing `/` is added when missing.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    /// Set the credentials provider for authenticated requests.
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

    /// Set a total timeout applied to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries for transient failures.
    ///
    /// Defaults to 0. A retried private request carries the same nonce,
    /// which Bleutrade may reject.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    pub fn build(self) -> BleutradeRestClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("bleutrade-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("bleutrade-api-client"));
        headers.insert(USER_AGENT, header_value);

        let mut reqwest_builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = reqwest_builder
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let mut client_builder =
            ClientBuilder::new(reqwest_client).with(TracingMiddleware::default());
        if self.max_retries > 0 {
            let retry_policy =
                ExponentialBackoff::builder().build_with_max_retries(self.max_retries);
            client_builder =
                client_builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(UnixTimeNonce::new()));

        BleutradeRestClient {
            http_client: client_builder.build(),
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
        }
    }
}

impl Default for BleutradeRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Response wrapper shared by every Bleutrade endpoint.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(deserialize_with = "bool_or_string::deserialize")]
    success: bool,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    message: Option<String>,
    #[serde(default)]
    result: Value,
}

impl Envelope {
    fn into_result(self) -> Result<Value, BleutradeError> {
        if self.success {
            Ok(self.result)
        } else {
            Err(BleutradeError::Api(ApiError::new(
                self.message.unwrap_or_default(),
            )))
        }
    }
}
