//! Geolocation service probes.

use serde::Deserialize;
use std::time::Duration;

/// Separator between label parts.
const LABEL_SEPARATOR: &str = ", ";

/// Fields read from a geolocation service response. Every field may be
/// missing or null; anything else in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GeoResult {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl GeoResult {
    /// Reduce to "City, Region, Country". The country code stands in when
    /// the country name is empty. `None` when nothing is known.
    pub fn label(&self) -> Option<String> {
        let country = non_empty(&self.country_name).or_else(|| non_empty(&self.country_code));
        let parts: Vec<&str> = [non_empty(&self.city), non_empty(&self.region), country]
            .into_iter()
            .flatten()
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(LABEL_SEPARATOR))
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Query one geolocation service.
///
/// Any failure (transport error, timeout, non-success status, undecodable
/// body, nothing usable in the payload) yields `None`.
pub async fn probe(client: &reqwest::Client, url: &str, timeout: Duration) -> Option<String> {
    let response = match client.get(url).timeout(timeout).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(service = %url, error = %e, "Geolocation probe failed");
            return None;
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::debug!(service = %url, status = %status, "Geolocation probe rejected");
        return None;
    }

    match response.json::<GeoResult>().await {
        Ok(result) => result.label(),
        Err(e) => {
            tracing::debug!(service = %url, error = %e, "Geolocation payload undecodable");
            None
        }
    }
}
