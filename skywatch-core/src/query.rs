use crate::error::EmptyQuery;

/// Fixed OpenWeather current-weather endpoint.
pub const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// One of the three mutually exclusive query forms accepted by the endpoint.
///
/// Free-text input becomes [`City`](Self::City) unless it is one or more
/// decimal digits and nothing else, which becomes [`Zip`](Self::Zip).
/// Geolocation results always use [`Coords`](Self::Coords).
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    City(String),
    Zip(String),
    Coords { lat: f64, lon: f64 },
}

impl LocationQuery {
    /// Classify raw user input. Whitespace is trimmed; empty input is
    /// rejected here and never sent to the network. No other normalization.
    pub fn parse(raw: &str) -> Result<Self, EmptyQuery> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EmptyQuery);
        }

        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self::Zip(trimmed.to_string()))
        } else {
            Ok(Self::City(trimmed.to_string()))
        }
    }

    /// Query-parameter pairs for this form, without credentials or units.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::City(name) => vec![("q", name.clone())],
            Self::Zip(code) => vec![("zip", code.clone())],
            Self::Coords { lat, lon } => {
                vec![("lat", lat.to_string()), ("lon", lon.to_string())]
            }
        }
    }
}
