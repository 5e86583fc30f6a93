//! Forwarding errors and their JSON rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errors that end a forwarding call. Never retried.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Neither the override header nor the default origin is set.
    #[error("Missing target-api-url header or TARGET_API_URL environment variable")]
    MissingTarget,

    /// The joined origin and path do not parse as a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The joined target is a URL but not a valid request target.
    #[error("Invalid URL: {0}")]
    InvalidUri(#[from] axum::http::uri::InvalidUri),

    /// The outbound TLS transport could not be configured.
    #[error("Error creating request: {0}")]
    ClientBuild(#[from] rustls::Error),

    /// The outbound request could not be assembled.
    #[error("Error creating request: {0}")]
    RequestBuild(#[from] axum::http::Error),

    /// The upstream call itself failed.
    #[error("Error sending request: {0}")]
    Upstream(hyper_util::client::legacy::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingTarget | ProxyError::InvalidUrl(_) | ProxyError::InvalidUri(_) => {
                StatusCode::BAD_REQUEST
            }
            ProxyError::ClientBuild(_) | ProxyError::RequestBuild(_) | ProxyError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
