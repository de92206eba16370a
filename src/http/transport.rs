//! Transport — the single network primitive the dispatcher needs: POST a
//! form-encoded field set to a URL and hand back the status and raw body.
//!
//! Errors returned before a response arrives must satisfy
//! [`HttpError::is_connection_level`] so the dispatcher can retry them.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

use crate::error::{HttpError, SdkError};
use crate::shared::Params;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// An HTTP response as received, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Body bytes exactly as received.
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Form POST transport. Implementations must be safe for concurrent use.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_form(&self, url: &str, fields: &Params) -> Result<RawResponse, HttpError>;
}

/// Default transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, SdkError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, SdkError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| SdkError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wrap an existing client, e.g. one with custom proxy or TLS settings.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_form(&self, url: &str, fields: &Params) -> Result<RawResponse, HttpError> {
        let body = fields.to_form()?;

        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.bytes().await?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
