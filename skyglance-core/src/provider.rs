use crate::{
    Config, CurrentConditions, FetchError, RawForecastEntry,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of the two readings the widget needs for a city.
///
/// Implementations report a non-success status of the current-conditions
/// call as [`FetchError::CityNotFound`] and of the forecast call as
/// [`FetchError::ForecastUnavailable`].
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_current(&self, city: &str) -> Result<CurrentConditions, FetchError>;

    async fn fetch_forecast(&self, city: &str) -> Result<Vec<RawForecastEntry>, FetchError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.api_key()?;
    OpenWeatherProvider::new(config.base_url(), api_key.to_owned())
}
