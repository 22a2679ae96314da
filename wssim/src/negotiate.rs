use axum::http::{HeaderMap, header};

/// Content type used when the client states no usable preference.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Derive the response `Content-Type` from the request `Accept` header.
///
/// The first comma-separated token wins and is used verbatim; no quality
/// values, no multi-type negotiation. A missing or empty header and the
/// `*/*` wildcard fall back to [`DEFAULT_CONTENT_TYPE`].
pub fn response_content_type(headers: &HeaderMap) -> String {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let first = accept.split(',').next().unwrap_or("");
    if first.is_empty() || first == "*/*" {
        DEFAULT_CONTENT_TYPE.to_owned()
    } else {
        first.to_owned()
    }
}
