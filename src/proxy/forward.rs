//! Request dispatch and response relay.
//!
//! # Responsibilities
//! - Build a fresh, non-pooling transport per request
//! - Stream the inbound body to the upstream without buffering
//! - Relay upstream status, headers and body verbatim
//!
//! # Design Decisions
//! - Upstream certificates are not verified; the proxy is meant to run
//!   inside a trusted network boundary
//! - Connections always go straight to the upstream; proxy environment
//!   variables are not consulted
//! - The target URI is sent as built, without re-encoding
//! - No retries: a dispatch failure is final for that request

use axum::{
    body::Body,
    http::{Request, Uri},
    response::Response,
};
use hyper::body::Incoming;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::proxy::error::ProxyError;
use crate::proxy::headers::forwarded_headers;
use crate::proxy::tls::insecure_tls_config;

/// Outbound client type: HTTP or HTTPS over a direct TCP connection.
pub type ForwardClient = Client<HttpsConnector<HttpConnector>, Body>;

/// Transport for a single forwarded request.
///
/// Accepts any upstream certificate and keeps no idle connections, so
/// nothing is shared between requests.
pub fn insecure_client() -> Result<ForwardClient, rustls::Error> {
    let connector = HttpsConnectorBuilder::new()
        .with_tls_config(insecure_tls_config()?)
        .https_or_http()
        .enable_http1()
        .build();

    Ok(Client::builder(TokioExecutor::new())
        .pool_max_idle_per_host(0)
        .build(connector))
}

/// Forward `request` to `target` and relay the upstream response.
pub async fn forward(target: Uri, request: Request<Body>) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let client = insecure_client()?;

    tracing::debug!(
        method = %parts.method,
        upstream = target.host().unwrap_or_default(),
        "Forwarding request"
    );

    let mut outbound = Request::builder()
        .method(parts.method)
        .uri(target)
        .body(body)?;
    *outbound.headers_mut() = forwarded_headers(&parts.headers);

    let upstream = client.request(outbound).await.map_err(|e| {
        tracing::warn!(error = %e, "Upstream request failed");
        ProxyError::Upstream(e)
    })?;

    tracing::debug!(status = %upstream.status(), "Upstream responded");
    Ok(relay(upstream))
}

/// Turn an upstream response into a client response, streaming the body.
fn relay(upstream: Response<Incoming>) -> Response {
    let (parts, body) = upstream.into_parts();
    Response::from_parts(parts, Body::new(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_upstream_is_server_error() {
        let request = Request::builder()
            .uri("/v1/items")
            .body(Body::empty())
            .unwrap();
        let target = Uri::from_static("http://127.0.0.1:9/v1/items");

        let err = forward(target, request).await.unwrap_err();
        assert!(matches!(err, ProxyError::Upstream(_)));
        assert!(err.to_string().starts_with("Error sending request: "));
    }

    #[tokio::test]
    async fn test_unsupported_scheme_is_server_error() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let target = Uri::from_static("ftp://127.0.0.1:9/file");

        let err = forward(target, request).await.unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
