//! Request dispatcher — `PlanyoHttp`.
//!
//! Every Planyo method goes through [`PlanyoHttp::invoke`]: build the field
//! set, attach credentials, POST it, retry on connection-level failure and
//! decode the JSON body. The dispatcher does not know the method catalog;
//! any non-empty method name is forwarded as-is.

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::auth::{Credentials, HashAuth};
use crate::error::{HttpError, SdkError};
use crate::http::retry::RetryConfig;
use crate::http::transport::{RawResponse, ReqwestTransport, Transport};
use crate::shared::{reserved, ApiResponse, Params};

/// Low-level dispatcher for the Planyo REST API.
///
/// Holds no mutable state; clones share the transport and can be used
/// concurrently.
#[derive(Clone)]
pub struct PlanyoHttp {
    endpoint: String,
    credentials: Credentials,
    transport: Arc<dyn Transport>,
}

impl PlanyoHttp {
    /// Dispatcher for the default endpoint over a reqwest transport.
    pub fn new(api_key: &str, shared_secret: Option<&str>) -> Result<Self, SdkError> {
        let credentials = Credentials::new(api_key, shared_secret)?;
        Self::with_transport(
            credentials,
            crate::network::DEFAULT_API_URL,
            Arc::new(ReqwestTransport::new()?),
        )
    }

    pub fn with_transport(
        credentials: Credentials,
        endpoint: &str,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, SdkError> {
        if endpoint.trim().is_empty() {
            return Err(SdkError::Config("Endpoint must not be empty".to_string()));
        }

        Ok(Self {
            endpoint: endpoint.to_string(),
            credentials,
            transport,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    // ── Invoke ───────────────────────────────────────────────────────────

    /// Call `method` and return the decoded body unchanged.
    ///
    /// `response_code` is not inspected: a provider-side error is still an
    /// `Ok` value here.
    pub async fn invoke(
        &self,
        method: &str,
        params: Option<Params>,
        use_hash_auth: bool,
        retry: &RetryConfig,
    ) -> Result<ApiResponse, SdkError> {
        let fields = self.build_fields(method, params, use_hash_auth)?;
        self.send_with_retry(&fields, retry).await
    }

    /// [`invoke`](Self::invoke) and deserialize the body into `T`.
    pub async fn invoke_as<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Option<Params>,
        use_hash_auth: bool,
        retry: &RetryConfig,
    ) -> Result<T, SdkError> {
        let value = self.invoke(method, params, use_hash_auth, retry).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Final field set for one call: caller params, then the reserved keys.
    ///
    /// The hash, if requested, is computed here once; retries reuse it.
    pub fn build_fields(
        &self,
        method: &str,
        params: Option<Params>,
        use_hash_auth: bool,
    ) -> Result<Params, SdkError> {
        if method.is_empty() {
            return Err(SdkError::Validation(
                "Method name must not be empty".to_string(),
            ));
        }

        let hash = if use_hash_auth {
            Some(self.credentials.sign(method)?)
        } else {
            None
        };

        let mut fields = params.unwrap_or_default();
        fields.insert(reserved::METHOD, method);
        fields.insert(reserved::API_KEY, self.credentials.api_key());
        if let Some(HashAuth { timestamp, key }) = hash {
            fields.insert(reserved::HASH_TIMESTAMP, timestamp);
            fields.insert(reserved::HASH_KEY, key);
        }

        Ok(fields)
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn send_with_retry(
        &self,
        fields: &Params,
        retry: &RetryConfig,
    ) -> Result<ApiResponse, SdkError> {
        let method = fields.get(reserved::METHOD).unwrap_or_default();
        let mut last_error = None;

        for attempt in 0..=retry.max_retries {
            match self.transport.post_form(&self.endpoint, fields).await {
                Ok(raw) => return decode(raw),
                Err(e) if e.is_connection_level() => {
                    if attempt < retry.max_retries {
                        let delay = retry.delay_for_attempt(attempt);
                        tracing::debug!(
                            method,
                            attempt = attempt + 1,
                            max = retry.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "Retrying request to {}",
                            self.endpoint
                        );
                        if !delay.is_zero() {
                            futures_timer::Delay::new(delay).await;
                        }
                    }
                    last_error = Some(e);
                }
                Err(e) => return Err(e.into()),
            }
        }

        let attempts = retry.max_attempts();
        tracing::warn!(method, attempts, "Transport unavailable, giving up");

        Err(HttpError::TransportUnavailable {
            attempts,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        }
        .into())
    }
}

impl std::fmt::Debug for PlanyoHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanyoHttp")
            .field("endpoint", &self.endpoint)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

/// Parse the body as JSON whatever the status code.
fn decode(raw: RawResponse) -> Result<ApiResponse, SdkError> {
    match serde_json::from_slice::<ApiResponse>(&raw.body) {
        Ok(value) => Ok(value),
        Err(_) => Err(HttpError::MalformedResponse {
            status: raw.status,
            body: raw.body,
        }
        .into()),
    }
}
