//! Response body types.
//!
//! The dispatcher returns the decoded body verbatim as [`ApiResponse`]. The
//! provider conventionally wraps every result in `response_code` /
//! `response_message` / `data`; [`ResponseEnvelope`] is an optional view of
//! that shape for callers that want it.

use serde::{Deserialize, Serialize};

use crate::error::SdkError;
use crate::shared::serde_util::lenient_i64;

/// Decoded JSON body of any method call.
pub type ApiResponse = serde_json::Value;

/// Conventional response wrapper. `response_code == 0` means success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(deserialize_with = "lenient_i64::deserialize")]
    pub response_code: i64,
    #[serde(default)]
    pub response_message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl ResponseEnvelope {
    pub fn from_value(value: &ApiResponse) -> Result<Self, SdkError> {
        Ok(Self::deserialize(value)?)
    }

    pub fn is_success(&self) -> bool {
        self.response_code == 0
    }
}
