/*
[INPUT]:  API key, API secret and optional subaccount id
[OUTPUT]: Credential container with a redacted Debug representation
[POS]:    Auth layer - credential storage and environment loading
[UPDATE]: When credential sources or environment variables change
*/

use crate::http::{Result, ValrError};

const API_KEY_ENV: &str = "VALR_API_KEY";
const API_SECRET_ENV: &str = "VALR_API_SECRET";
const SUBACCOUNT_ENV: &str = "VALR_SUBACCOUNT_ID";

/// Credentials for authenticated REST and WebSocket requests.
///
/// The secret never appears in Debug output; it is only read by the
/// [`RequestSigner`](crate::auth::RequestSigner).
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
    subaccount_id: Option<String>,
}

impl Credentials {
    /// Create credentials from explicit values
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            subaccount_id: None,
        }
    }

    /// Scope all signed requests to a subaccount.
    ///
    /// The subaccount id is appended to the signature payload and sent in the
    /// `X-VALR-SUB-ACCOUNT-ID` header.
    pub fn with_subaccount(mut self, subaccount_id: impl Into<String>) -> Self {
        self.subaccount_id = Some(subaccount_id.into());
        self
    }

    /// Load credentials from `VALR_API_KEY` / `VALR_API_SECRET`
    /// (and `VALR_SUBACCOUNT_ID` when set).
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ValrError::Config(format!("{API_KEY_ENV} is not set")))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| ValrError::Config(format!("{API_SECRET_ENV} is not set")))?;

        let mut credentials = Self::new(api_key, api_secret);
        if let Ok(subaccount_id) = std::env::var(SUBACCOUNT_ENV) {
            credentials = credentials.with_subaccount(subaccount_id);
        }
        Ok(credentials)
    }

    /// The API key (safe to log)
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The API secret. Only for signing; never log the return value.
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// The subaccount id, if configured
    pub fn subaccount_id(&self) -> Option<&str> {
        self.subaccount_id.as_deref()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("subaccount_id", &self.subaccount_id)
            .finish()
    }
}
