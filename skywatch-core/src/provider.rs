use crate::{
    Config, error::WeatherError, model::WeatherSnapshot, provider::openweather::OpenWeatherProvider,
    query::LocationQuery,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current-weather snapshots.
///
/// The system talks to exactly one vendor, but the seam stays a trait so the
/// session can be exercised against test doubles.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Perform exactly one outbound request for the given query. No retries.
    async fn current_weather(
        &self,
        query: &LocationQuery,
    ) -> Result<WeatherSnapshot, WeatherError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.api_key.as_deref().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `skywatch configure` and enter your OpenWeather API key."
        )
    })?;

    Ok(OpenWeatherProvider::new(api_key.to_owned()))
}
