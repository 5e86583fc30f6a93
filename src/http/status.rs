//! Liveness payload served on `/` when no origin is configured.

use axum::{response::IntoResponse, Json};
use serde::Serialize;

use crate::region::RegionState;

pub const STATUS_MESSAGE: &str = "Reliable Proxy server is running";

#[derive(Debug, Serialize)]
pub struct StatusPayload {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl StatusPayload {
    pub fn current(region: &RegionState) -> Self {
        Self {
            status: STATUS_MESSAGE,
            region: region.get().map(|label| label.as_str().to_owned()),
        }
    }
}

pub fn status_response(region: &RegionState) -> impl IntoResponse {
    Json(StatusPayload::current(region))
}
