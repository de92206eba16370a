//! HTTP layer — `PlanyoHttp` dispatcher, pluggable transport and retry config.

pub mod client;
pub mod retry;
pub mod transport;

pub use client::PlanyoHttp;
pub use retry::RetryConfig;
pub use transport::{RawResponse, ReqwestTransport, Transport};
