//! Shared types used by the dispatcher and the façade: request parameters
//! and response bodies.

pub mod params;
pub mod response;
pub mod serde_util;

pub use params::{reserved, Params};
pub use response::{ApiResponse, ResponseEnvelope};
