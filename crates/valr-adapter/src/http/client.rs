/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client stamping signed VALR headers
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing header handling
*/

use chrono::Utc;
use reqwest::header::{ACCEPT, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::auth::{Credentials, RequestSigner};
use crate::http::{Result, ValrError};

/// Base URL for the VALR REST API
const DEFAULT_BASE_URL: &str = "https://api.valr.com";

pub(crate) const API_KEY_HEADER: &str = "X-VALR-API-KEY";
pub(crate) const SIGNATURE_HEADER: &str = "X-VALR-SIGNATURE";
pub(crate) const TIMESTAMP_HEADER: &str = "X-VALR-TIMESTAMP";
pub(crate) const SUBACCOUNT_HEADER: &str = "X-VALR-SUB-ACCOUNT-ID";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Error body returned by the VALR API, e.g. `{"code":-21,"message":"..."}`
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: i32,
    message: String,
}

/// Main HTTP client for the VALR v1 API
#[derive(Debug)]
pub struct ValrClient {
    http_client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl ValrClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client against an explicit base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            credentials: None,
        })
    }

    /// Set credentials for authenticated requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Build full URL for an endpoint path (query string included)
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build an unauthenticated request builder
    pub(crate) fn public_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        Ok(self
            .http_client
            .request(method, url)
            .header(ACCEPT, "application/json"))
    }

    /// Build a request builder carrying the signed VALR headers.
    ///
    /// The signature covers the exact body string attached here, so callers
    /// must pass the serialized body rather than re-serializing later.
    pub(crate) fn signed_request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<RequestBuilder> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ValrError::MissingCredentials)?;

        let url = self.endpoint_url(endpoint)?;
        let timestamp = Utc::now().timestamp_millis();
        let body = body.unwrap_or_default();
        let signature =
            RequestSigner::new(credentials).sign_request(timestamp, method.as_str(), endpoint, &body);

        let mut builder = self
            .http_client
            .request(method, url)
            .header(API_KEY_HEADER, credentials.api_key())
            .header(SIGNATURE_HEADER, signature)
            .header(TIMESTAMP_HEADER, timestamp.to_string())
            .header(ACCEPT, "application/json");

        if let Some(subaccount_id) = credentials.subaccount_id() {
            builder = builder.header(SUBACCOUNT_HEADER, subaccount_id);
        }
        if !body.is_empty() {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        Ok(builder)
    }

    /// GET builder that signs when credentials are present.
    ///
    /// Public endpoints accept both forms; signed calls count against the
    /// authenticated rate limits.
    pub(crate) fn get_request(&self, endpoint: &str) -> Result<RequestBuilder> {
        if self.credentials.is_some() {
            self.signed_request(Method::GET, endpoint, None)
        } else {
            self.public_request(Method::GET, endpoint)
        }
    }

    /// Send a request and deserialize the JSON response
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::response_error(status, response).await);
        }
        Ok(response.json().await?)
    }

    /// Send a request where success carries no meaningful body (e.g. 202)
    pub(crate) async fn send_no_content(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::response_error(status, response).await);
        }
        Ok(())
    }

    async fn response_error(status: StatusCode, response: Response) -> ValrError {
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse().ok())
                .unwrap_or(1);
            return ValrError::RateLimit { retry_after };
        }

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(api) => ValrError::Api {
                code: api.code,
                message: api.message,
            },
            Err(_) => ValrError::api_error(status, body),
        }
    }
}
