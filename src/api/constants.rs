//! Analysis service constants

/// Default analysis endpoint
pub const DEFAULT_API_URL: &str = "https://backend-smart.vercel.app/analyze";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("uxhf-questionnaire/", env!("CARGO_PKG_VERSION"));

/// Shown when the response carries no recommendation
pub const NO_RECOMMENDATION: &str = "No recommendation found.";

/// Shown when the response carries no R code
pub const NO_CODE: &str = "No R code available.";

/// Shown when the response carries no explanation
pub const NO_EXPLANATION: &str = "No explanation available.";

/// Replaces the recommendation when a submission fails for any reason
pub const FAILURE_MESSAGE: &str = "Error fetching response. Please try again.";

/// Standard headers
pub mod headers {
    pub const CONTENT_TYPE_JSON: &str = "application/json";
    pub const ACCEPT_JSON: &str = "application/json";
}
