//! Authentication — API key credentials and the optional request hash.
//!
//! ## Hash auth
//!
//! When a site enables hash verification, every request must carry
//! `hash_timestamp` and `hash_key`, where
//!
//! ```text
//! hash_key = hex(md5(shared_secret + hash_timestamp + method))
//! ```
//!
//! The three parts are concatenated as raw text with no separators and the
//! timestamp is whole seconds since the Unix epoch (UTC). The hash is bound
//! to a single method call: it is computed once per call and reused unchanged
//! by every retry of that call.

use chrono::Utc;

use crate::error::SdkError;

// ============================================================================
// Credentials
// ============================================================================

/// API credentials. Immutable once constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    shared_secret: Option<String>,
}

impl Credentials {
    /// Create credentials. Fails with [`SdkError::Config`] when the API key is
    /// empty. An empty shared secret is treated as no secret.
    pub fn new(api_key: &str, shared_secret: Option<&str>) -> Result<Self, SdkError> {
        if api_key.is_empty() {
            return Err(SdkError::Config("API key must not be empty".to_string()));
        }

        Ok(Self {
            api_key: api_key.to_string(),
            shared_secret: shared_secret
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn has_shared_secret(&self) -> bool {
        self.shared_secret.is_some()
    }

    /// Sign `method` at the current second.
    ///
    /// Fails with [`SdkError::AuthConfig`] when no shared secret is configured.
    pub fn sign(&self, method: &str) -> Result<HashAuth, SdkError> {
        self.sign_at(current_timestamp(), method)
    }

    /// Sign `method` at an explicit timestamp.
    pub fn sign_at(&self, timestamp: i64, method: &str) -> Result<HashAuth, SdkError> {
        let secret = self.shared_secret.as_deref().ok_or(SdkError::AuthConfig)?;
        Ok(HashAuth {
            timestamp,
            key: compute_hash_key(secret, timestamp, method),
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field(
                "shared_secret",
                &self.shared_secret.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

// ============================================================================
// Hash
// ============================================================================

/// A computed request signature: the timestamp it was taken at and the digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashAuth {
    pub timestamp: i64,
    pub key: String,
}

/// Lowercase hex MD5 of `secret + timestamp + method`.
pub fn compute_hash_key(secret: &str, timestamp: i64, method: &str) -> String {
    let input = format!("{}{}{}", secret, timestamp, method);
    hex::encode(md5::compute(input.as_bytes()).0)
}

/// Whole seconds since the Unix epoch, UTC.
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}
