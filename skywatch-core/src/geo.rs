use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::GeoError;

/// Position resolution deadline. A slower resolver fails with
/// [`GeoError::Timeout`]; there is no cancellation and no cached position.
pub const LOCATE_TIMEOUT: Duration = Duration::from_secs(10);

/// Keyless position service, queried over plain HTTP.
const IP_LOOKUP_URL: &str = "http://ip-api.com/json";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Source of the device's current position.
#[async_trait]
pub trait LocationSource: Send + Sync + Debug {
    async fn current_position(&self) -> Result<Coordinates, GeoError>;
}

/// IP-based position lookup against a free keyless service.
#[derive(Debug, Clone)]
pub struct IpLocator {
    http: Client,
    url: String,
}

impl IpLocator {
    pub fn new() -> Self {
        Self::with_url(IP_LOOKUP_URL.to_string())
    }

    /// Point the locator at a different endpoint. Used by tests.
    pub fn with_url(url: String) -> Self {
        Self {
            http: Client::new(),
            url,
        }
    }
}

impl Default for IpLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationSource for IpLocator {
    async fn current_position(&self) -> Result<Coordinates, GeoError> {
        let res = self
            .http
            .get(&self.url)
            .timeout(LOCATE_TIMEOUT)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    GeoError::Timeout
                } else {
                    tracing::warn!(error = %err, "position lookup failed");
                    GeoError::Unavailable
                }
            })?;

        let parsed: IpLookupResponse = res.json().await.map_err(|err| {
            tracing::warn!(error = %err, "failed to parse position lookup response");
            GeoError::Unavailable
        })?;

        if parsed.status != "success" {
            // The service answered but refused to locate us.
            tracing::warn!(status = %parsed.status, "position lookup refused");
            return Err(GeoError::PermissionDenied);
        }

        match (parsed.lat, parsed.lon) {
            (Some(lat), Some(lon)) => Ok(Coordinates { lat, lon }),
            _ => Err(GeoError::Unavailable),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}
