//! Logical API paths exposed by the prediction backend, and their resolution
//! into concrete URLs.

/// Image detection endpoint (multipart upload).
pub const DETECTION_PATH: &str = "/api/pestwatch_yolo";

/// Feature-based outbreak prediction endpoint (JSON).
pub const OUTBREAK_PATH: &str = "/api/pestpred";

/// Week-of-year prediction endpoint (JSON).
pub const WEEK_PATH: &str = "/api/predict_week";

/// Map a logical API path to the URL to call.
///
/// A configured base URL carrying a network scheme is prepended; anything
/// else (typically the empty string of an unconfigured environment) leaves
/// the path unchanged, to be routed by a same-origin proxy layer.
pub fn resolve_endpoint(base_url: &str, path: &str) -> String {
    if base_url.starts_with("http") {
        format!("{base_url}{path}")
    } else {
        path.to_string()
    }
}
