//! Pure snapshot-to-text mapping, kept free of I/O so it can be checked
//! without any rendering surface.

use crate::model::WeatherSnapshot;

const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn";

/// Ready-to-render text for one snapshot. Metric only, no localization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFields {
    /// "London, GB"
    pub place: String,
    pub condition: String,
    /// Nearest integer Celsius, e.g. "15°C".
    pub temperature: String,
    pub feels_like: String,
    /// Integer percentage, e.g. "82%".
    pub humidity: String,
    /// Raw decimal, e.g. "3.5 m/s".
    pub wind: String,
    pub icon_url: String,
}

impl DisplayFields {
    pub fn from_snapshot(snapshot: &WeatherSnapshot) -> Self {
        Self {
            place: format!("{}, {}", snapshot.location_name, snapshot.country),
            condition: snapshot.condition.clone(),
            temperature: format_celsius(snapshot.temperature_c),
            feels_like: format_celsius(snapshot.feels_like_c),
            humidity: format!("{}%", snapshot.humidity_pct),
            wind: format!("{} m/s", snapshot.wind_speed_mps),
            icon_url: format!("{ICON_URL_BASE}/{}@4x.png", snapshot.icon),
        }
    }
}

fn format_celsius(value: f64) -> String {
    format!("{}°C", value.round() as i64)
}

/// Banner text is shown with its first letter capitalized, vendor messages
/// included.
pub fn banner_text(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
