use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    error::WeatherError,
    model::WeatherSnapshot,
    query::{BASE_URL, LocationQuery},
};

use super::WeatherProvider;

/// Fallback when a non-success response carries no usable body message.
const UNKNOWN_API_ERROR: &str = "An unknown error occurred.";

/// Fallback when a 2xx body reports failure through its own `cod` field.
const BODY_REJECTED: &str = "Could not retrieve weather data.";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    /// Point the provider at a different endpoint. Used by tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn fetch(&self, query: &LocationQuery) -> Result<WeatherSnapshot, WeatherError> {
        let mut params = query.params();
        params.push(("appid", self.api_key.clone()));
        params.push(("units", "metric".to_string()));

        tracing::debug!(?query, "requesting current weather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "failed to send weather request");
                WeatherError::Transport
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|err| {
            tracing::warn!(error = %err, "failed to read weather response body");
            WeatherError::Transport
        })?;

        if !status.is_success() {
            return Err(classify_status(status, &body));
        }

        // The vendor can report failure inside a 2xx body; probe its status
        // fields before demanding the full field set.
        let probe: OwStatusProbe = serde_json::from_str(&body).map_err(|err| {
            tracing::warn!(error = %err, "failed to parse weather response JSON");
            WeatherError::Transport
        })?;
        if let Some(cod) = &probe.cod {
            if body_reports_failure(cod) {
                tracing::warn!(%cod, "weather body reported failure despite success status");
                let message = probe.message.unwrap_or_else(|| BODY_REJECTED.to_string());
                return Err(WeatherError::Api(message));
            }
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|err| {
            tracing::warn!(error = %err, "weather response was missing required fields");
            WeatherError::Transport
        })?;

        snapshot_from_response(parsed)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(
        &self,
        query: &LocationQuery,
    ) -> Result<WeatherSnapshot, WeatherError> {
        self.fetch(query).await
    }
}

/// 401 and 404 map to fixed messages regardless of the body; anything else
/// surfaces the vendor's `message` field verbatim when present.
fn classify_status(status: StatusCode, body: &str) -> WeatherError {
    match status {
        StatusCode::UNAUTHORIZED => WeatherError::InvalidApiKey,
        StatusCode::NOT_FOUND => WeatherError::LocationNotFound,
        _ => {
            tracing::warn!(%status, "weather request rejected");
            let message = serde_json::from_str::<OwStatusProbe>(body)
                .ok()
                .and_then(|probe| probe.message)
                .unwrap_or_else(|| UNKNOWN_API_ERROR.to_string());
            WeatherError::Api(message)
        }
    }
}

/// The vendor encodes `cod` as either a number or a string depending on the
/// outcome; both spellings of 200 mean success.
fn body_reports_failure(cod: &serde_json::Value) -> bool {
    match cod {
        serde_json::Value::Number(n) => n.as_i64() != Some(200),
        serde_json::Value::String(s) => s != "200",
        _ => true,
    }
}

fn snapshot_from_response(parsed: OwCurrentResponse) -> Result<WeatherSnapshot, WeatherError> {
    let condition = parsed.weather.into_iter().next().ok_or_else(|| {
        tracing::warn!("weather response contained no condition entry");
        WeatherError::Transport
    })?;

    let observed_at = DateTime::from_timestamp(parsed.dt, 0).unwrap_or_else(Utc::now);

    Ok(WeatherSnapshot {
        location_name: parsed.name,
        country: parsed.sys.country,
        condition: condition.description,
        icon: condition.icon,
        temperature_c: parsed.main.temp,
        feels_like_c: parsed.main.feels_like,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
        observed_at,
    })
}

#[derive(Debug, Deserialize)]
struct OwStatusProbe {
    #[serde(default)]
    cod: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_401_is_invalid_key_regardless_of_body() {
        let err = classify_status(
            StatusCode::UNAUTHORIZED,
            r#"{"cod":401,"message":"something else entirely"}"#,
        );
        assert_eq!(
            err.to_string(),
            "Invalid API key. Please ensure your key is correct and active."
        );
    }

    #[test]
    fn status_404_is_not_found_regardless_of_body() {
        let err = classify_status(StatusCode::NOT_FOUND, r#"{"message":"city not found"}"#);
        assert_eq!(
            err.to_string(),
            "City or ZIP code not found. Please check the spelling or number."
        );
    }

    #[test]
    fn other_statuses_surface_vendor_message_verbatim() {
        let err = classify_status(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"cod":429,"message":"rate limited"}"#,
        );
        assert!(matches!(err, WeatherError::Api(ref m) if m == "rate limited"));
    }

    #[test]
    fn other_statuses_fall_back_when_message_is_missing() {
        let err = classify_status(StatusCode::INTERNAL_SERVER_ERROR, "not json at all");
        assert!(matches!(err, WeatherError::Api(ref m) if m == UNKNOWN_API_ERROR));
    }

    #[test]
    fn cod_200_in_either_encoding_is_success() {
        assert!(!body_reports_failure(&json!(200)));
        assert!(!body_reports_failure(&json!("200")));
    }

    #[test]
    fn cod_other_than_200_is_failure() {
        assert!(body_reports_failure(&json!(401)));
        assert!(body_reports_failure(&json!("404")));
        assert!(body_reports_failure(&json!(true)));
    }

    #[test]
    fn snapshot_requires_a_condition_entry() {
        let parsed: OwCurrentResponse = serde_json::from_value(json!({
            "name": "London",
            "dt": 1_700_000_000,
            "sys": { "country": "GB" },
            "main": { "temp": 15.4, "feels_like": 14.9, "humidity": 82 },
            "weather": [],
            "wind": { "speed": 3.5 }
        }))
        .expect("fixture must deserialize");

        let err = snapshot_from_response(parsed).unwrap_err();
        assert!(matches!(err, WeatherError::Transport));
    }

    #[test]
    fn snapshot_is_fully_populated_from_fixture() {
        let parsed: OwCurrentResponse = serde_json::from_value(json!({
            "name": "London",
            "dt": 1_700_000_000,
            "sys": { "country": "GB" },
            "main": { "temp": 15.4, "feels_like": 14.9, "humidity": 82 },
            "weather": [{ "description": "light rain", "icon": "10d" }],
            "wind": { "speed": 3.5 }
        }))
        .expect("fixture must deserialize");

        let snapshot = snapshot_from_response(parsed).expect("fixture must map");
        assert_eq!(snapshot.location_name, "London");
        assert_eq!(snapshot.country, "GB");
        assert_eq!(snapshot.condition, "light rain");
        assert_eq!(snapshot.icon, "10d");
        assert_eq!(snapshot.humidity_pct, 82);
        assert_eq!(snapshot.observed_at.timestamp(), 1_700_000_000);
    }
}
