//! Two-step fetch of current conditions and forecast for one city.

use crate::{
    error::FetchError,
    forecast::reduce_forecast,
    model::WeatherReport,
    provider::WeatherProvider,
};

/// Fetch current conditions, then the forecast, for `city`.
///
/// The requests run one after the other so a current-conditions failure is
/// always the one reported, and the forecast is not requested at all for a
/// city the provider does not know. Any failure fails the whole operation.
#[tracing::instrument(skip(provider))]
pub async fn fetch_weather<P>(provider: &P, city: &str) -> Result<WeatherReport, FetchError>
where
    P: WeatherProvider + ?Sized,
{
    let current = provider.fetch_current(city).await?;
    let raw = provider.fetch_forecast(city).await?;

    Ok(WeatherReport {
        current,
        forecast: reduce_forecast(raw),
    })
}
