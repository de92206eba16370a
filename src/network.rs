//! Network URL constants for the Planyo SDK.

/// Default REST API endpoint. Every method is POSTed here.
pub const DEFAULT_API_URL: &str = "https://api.planyo.com/rest/";
