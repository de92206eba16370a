//! # Planyo SDK
//!
//! A low-level Rust client for the Planyo booking REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Credentials and request hashing, parameters, the method
//!    catalog, errors (always available)
//! 2. **HTTP** — `PlanyoHttp`: one generic `invoke` that signs, POSTs,
//!    retries connection failures and decodes JSON
//! 3. **High-Level Client** — `PlanyoClient` with a builder and named-method
//!    sub-clients generated from the catalog
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use planyo_sdk::prelude::*;
//!
//! let client = PlanyoClient::builder()
//!     .api_key("ABC")
//!     .shared_secret("DEF")
//!     .build()?;
//!
//! let resp = client.site().api_test().send().await?;
//! let resp = client
//!     .site()
//!     .list_translations()
//!     .param("language", "IT")
//!     .hash_auth(true)
//!     .send()
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared request/response types.
pub mod shared;

/// Known method names and the façade generator.
pub mod catalog;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Credentials and request hashing.
pub mod auth;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Request dispatcher, transport and retry configuration.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `PlanyoClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::shared::{ApiResponse, Params, ResponseEnvelope};

    pub use crate::catalog::{Category, Method};

    pub use crate::auth::{Credentials, HashAuth};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    #[cfg(feature = "http")]
    pub use crate::client::{MethodCall, PlanyoClient, PlanyoClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::http::{PlanyoHttp, RawResponse, RetryConfig, Transport};
}
