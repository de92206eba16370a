//! High-level client — `PlanyoClient` with named-method sub-client accessors.
//!
//! The sub-clients (`client.site()`, `client.reservations()`, …) are generated
//! from the method catalog in `catalog/mod.rs`. This module keeps the
//! builder, per-client defaults and the [`MethodCall`] request builder.

use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::Credentials;
use crate::catalog::Method;
use crate::error::SdkError;
use crate::http::transport::{ReqwestTransport, Transport, DEFAULT_TIMEOUT};
use crate::http::{PlanyoHttp, RetryConfig};
use crate::shared::{ApiResponse, Params};

// Re-export sub-client types for convenience.
pub use crate::catalog::{
    NotificationMethods, PaymentMethods, ReservationMethods, ResourceMethods, SiteMethods,
    UserMethods, VoucherMethods,
};

/// Environment variable read by [`PlanyoClientBuilder::from_env`] for the API key.
pub const API_KEY_ENV: &str = "PLANYO_API_KEY";
/// Environment variable read by [`PlanyoClientBuilder::from_env`] for the hash secret.
pub const HASH_KEY_ENV: &str = "PLANYO_HASH_KEY";

/// The primary entry point for the Planyo SDK.
#[derive(Debug, Clone)]
pub struct PlanyoClient {
    pub(crate) http: PlanyoHttp,
    /// Whether calls sign with the shared secret unless told otherwise.
    pub(crate) hash_auth_by_default: bool,
    pub(crate) retry: RetryConfig,
}

impl PlanyoClient {
    pub fn builder() -> PlanyoClientBuilder {
        PlanyoClientBuilder::default()
    }

    /// Client for the default endpoint with default settings.
    pub fn new(api_key: &str, shared_secret: Option<&str>) -> Result<Self, SdkError> {
        let mut builder = Self::builder().api_key(api_key);
        if let Some(secret) = shared_secret {
            builder = builder.shared_secret(secret);
        }
        builder.build()
    }

    /// The underlying dispatcher.
    pub fn http(&self) -> &PlanyoHttp {
        &self.http
    }

    /// Call any method by name, catalog or not.
    pub async fn invoke(
        &self,
        method: &str,
        params: Option<Params>,
        use_hash_auth: bool,
        max_retries: u32,
    ) -> Result<ApiResponse, SdkError> {
        let retry = self.retry.clone().with_max_retries(max_retries);
        self.http
            .invoke(method, params, use_hash_auth, &retry)
            .await
    }

    /// Prepare a call to a catalog method.
    pub fn method(&self, method: Method) -> MethodCall<'_> {
        MethodCall::new(self, method.as_str().to_string())
    }

    /// Prepare a call by wire name, rejecting names outside the catalog.
    pub fn method_named(&self, name: &str) -> Result<MethodCall<'_>, SdkError> {
        let method: Method = name.parse()?;
        Ok(self.method(method))
    }

    /// Prepare a call by wire name without consulting the catalog.
    pub fn raw(&self, name: &str) -> MethodCall<'_> {
        MethodCall::new(self, name.to_string())
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// MethodCall
// ═════════════════════════════════════════════════════════════════════════════

/// A single prepared call. Nothing is sent until [`send`](Self::send).
#[must_use = "a MethodCall does nothing until `send` is awaited"]
pub struct MethodCall<'a> {
    client: &'a PlanyoClient,
    method: String,
    params: Params,
    use_hash_auth: bool,
    retry: RetryConfig,
}

impl<'a> MethodCall<'a> {
    fn new(client: &'a PlanyoClient, method: String) -> Self {
        Self {
            client,
            method,
            params: Params::new(),
            use_hash_auth: client.hash_auth_by_default,
            retry: client.retry.clone(),
        }
    }

    pub fn method_name(&self) -> &str {
        &self.method
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.params.insert(key, value);
        self
    }

    pub fn params(mut self, params: Params) -> Self {
        self.params.merge(params);
        self
    }

    pub fn hash_auth(mut self, enabled: bool) -> Self {
        self.use_hash_auth = enabled;
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.retry.max_retries = max_retries;
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub async fn send(self) -> Result<ApiResponse, SdkError> {
        let params = (!self.params.is_empty()).then_some(self.params);
        self.client
            .http
            .invoke(&self.method, params, self.use_hash_auth, &self.retry)
            .await
    }

    pub async fn send_as<T: DeserializeOwned>(self) -> Result<T, SdkError> {
        let value = self.send().await?;
        Ok(serde_json::from_value(value)?)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PlanyoClientBuilder {
    api_key: Option<String>,
    shared_secret: Option<String>,
    endpoint: String,
    timeout: Duration,
    hash_auth_by_default: bool,
    retry: RetryConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for PlanyoClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            shared_secret: None,
            endpoint: crate::network::DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            hash_auth_by_default: false,
            retry: RetryConfig::default(),
            transport: None,
        }
    }
}

impl PlanyoClientBuilder {
    /// Builder pre-filled from `PLANYO_API_KEY` and `PLANYO_HASH_KEY`.
    ///
    /// Missing variables are left unset; `build` reports a missing key.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        builder.api_key = std::env::var(API_KEY_ENV).ok();
        builder.shared_secret = std::env::var(HASH_KEY_ENV).ok();
        builder
    }

    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn shared_secret(mut self, secret: &str) -> Self {
        self.shared_secret = Some(secret.to_string());
        self
    }

    pub fn endpoint(mut self, url: &str) -> Self {
        self.endpoint = url.to_string();
        self
    }

    /// Request timeout for the default transport. Ignored with a custom transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sign every call with the shared secret unless the call opts out.
    pub fn hash_auth_by_default(mut self, enabled: bool) -> Self {
        self.hash_auth_by_default = enabled;
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<PlanyoClient, SdkError> {
        let api_key = self
            .api_key
            .ok_or_else(|| SdkError::Config("API key is required".to_string()))?;
        let credentials = Credentials::new(&api_key, self.shared_secret.as_deref())?;

        if self.hash_auth_by_default && !credentials.has_shared_secret() {
            return Err(SdkError::AuthConfig);
        }

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::with_timeout(self.timeout)?),
        };

        Ok(PlanyoClient {
            http: PlanyoHttp::with_transport(credentials, &self.endpoint, transport)?,
            hash_auth_by_default: self.hash_auth_by_default,
            retry: self.retry,
        })
    }
}
