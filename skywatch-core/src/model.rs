use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weather fields for one successfully resolved location at one point in
/// time.
///
/// A snapshot is always fully populated; a response that cannot fill every
/// field is discarded whole. It carries no identity beyond "most recent
/// successful response" and is replaced wholesale on the next success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub country: String,
    pub condition: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    /// Vendor icon code, e.g. "10d".
    pub icon: String,
    pub observed_at: DateTime<Utc>,
}
