//! Header filtering for forwarded requests.

use axum::http::{header, HeaderMap, HeaderName};

use crate::proxy::target::TARGET_HEADER;

/// Headers never copied onto the outbound request.
fn is_excluded(name: &HeaderName) -> bool {
    // HeaderName is always lowercase, so these comparisons are case-insensitive
    *name == header::HOST || name.as_str() == TARGET_HEADER
}

/// Copy every inbound header except `host` and `target-api-url`,
/// keeping repeated headers and their order.
pub fn forwarded_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut outbound = HeaderMap::with_capacity(inbound.len());
    for (name, value) in inbound {
        if !is_excluded(name) {
            outbound.append(name.clone(), value.clone());
        }
    }
    outbound
}
