use thiserror::Error;

/// Failures surfaced to the user after a lookup attempt.
///
/// The `Display` text of each variant is the exact banner message; callers
/// never compose their own wording. None of these are retried.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP 401, regardless of what the body says.
    #[error("Invalid API key. Please ensure your key is correct and active.")]
    InvalidApiKey,

    /// HTTP 404.
    #[error("City or ZIP code not found. Please check the spelling or number.")]
    LocationNotFound,

    /// Any other vendor-reported failure; the message is surfaced verbatim.
    #[error("{0}")]
    Api(String),

    /// Network failure, unreadable body, or malformed JSON. The underlying
    /// cause goes to the log only.
    #[error("Failed to fetch weather data. Please try again.")]
    Transport,
}

/// Failures from the geolocation source.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Location access denied. Please enable location services.")]
    PermissionDenied,

    #[error("Location information is unavailable. Try again later.")]
    Unavailable,

    #[error("The request to get your location timed out.")]
    Timeout,
}

/// Empty or whitespace-only input, rejected before any network activity.
#[derive(Debug, Error)]
#[error("Please enter a city or ZIP code.")]
pub struct EmptyQuery;
