//! Target origin selection and outbound URL construction.
//!
//! # Responsibilities
//! - Pick the origin: `target-api-url` header first, configured default second
//! - Recognize the status request (root path, no origin)
//! - Join origin and inbound path with exactly one `/`
//! - Carry the inbound path and query string over byte for byte
//!
//! `Url` only validates the origin. The outbound target is the raw joined
//! text, so no percent-encoding or dot-segment removal happens on the way.

use axum::http::{HeaderMap, Uri};
use url::Url;

use crate::proxy::error::ProxyError;

/// Per-request origin override header.
pub const TARGET_HEADER: &str = "target-api-url";

/// What to do with an inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Root path with no origin: answer with the status payload.
    Status,
    /// Forward to this absolute URI.
    Forward(Uri),
}

/// Decide how to handle a request.
///
/// The status check runs before the missing-origin check; only the path
/// distinguishes the two.
pub fn route(uri: &Uri, headers: &HeaderMap, default_origin: Option<&str>) -> Result<Route, ProxyError> {
    let origin = select_origin(headers, default_origin);
    let path = uri.path();

    match origin {
        None if path == "/" => Ok(Route::Status),
        None => Err(ProxyError::MissingTarget),
        Some(origin) => Ok(Route::Forward(build_target_uri(origin, path, uri.query())?)),
    }
}

/// Header value if present and non-empty, else the default.
pub fn select_origin<'a>(headers: &'a HeaderMap, default_origin: Option<&'a str>) -> Option<&'a str> {
    headers
        .get(TARGET_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .or_else(|| default_origin.filter(|v| !v.is_empty()))
}

/// `origin` without trailing `/` + `/` + `path` without leading `/`, then
/// `?query` when the query is non-empty. Any query or fragment carried by
/// the origin itself is dropped in favour of the inbound one.
pub fn join_target(origin: &str, path: &str, query: Option<&str>) -> String {
    let joined = format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    let base = match joined.find(['?', '#']) {
        Some(end) => &joined[..end],
        None => joined.as_str(),
    };

    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{base}?{query}"),
        None => base.to_string(),
    }
}

/// Validate the origin and build the outbound URI from the raw joined text.
pub fn build_target_uri(origin: &str, path: &str, query: Option<&str>) -> Result<Uri, ProxyError> {
    let target = join_target(origin, path, query);
    Url::parse(&target)?;
    Ok(target.parse::<Uri>()?)
}
