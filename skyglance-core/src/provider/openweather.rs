use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::{error::FetchError, model::{Condition, CurrentConditions, RawForecastEntry}};

use super::WeatherProvider;

const CURRENT_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(base_url: &str, api_key: String) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` for `city`; `None` when the provider answers with a non-success status.
    async fn get(&self, path: &str, city: &str) -> Result<Option<String>, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .inspect_err(|err| tracing::warn!(%url, error = %err, "OpenWeather request failed"))?;

        let status = res.status();
        let body = res.text().await.inspect_err(|err| {
            tracing::warn!(%url, error = %err, "failed to read OpenWeather response body");
        })?;

        tracing::debug!(%url, city, status = status.as_u16(), "OpenWeather responded");

        if !status.is_success() {
            log_rejection(path, status, &body);
            return Ok(None);
        }

        Ok(Some(body))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_current(&self, city: &str) -> Result<CurrentConditions, FetchError> {
        let body = self
            .get(CURRENT_PATH, city)
            .await?
            .ok_or(FetchError::CityNotFound)?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        Ok(parsed.into())
    }

    async fn fetch_forecast(&self, city: &str) -> Result<Vec<RawForecastEntry>, FetchError> {
        let body = self
            .get(FORECAST_PATH, city)
            .await?
            .ok_or(FetchError::ForecastUnavailable)?;

        let parsed: OwForecastResponse = serde_json::from_str(&body)?;
        Ok(parsed.list.into_iter().map(RawForecastEntry::from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    #[serde(default)]
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    dt_txt: String,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

fn first_condition(weather: Vec<OwWeather>) -> Condition {
    weather
        .into_iter()
        .next()
        .map(|w| Condition {
            main: w.main,
            description: w.description,
            icon_id: w.icon,
        })
        .unwrap_or_else(Condition::unknown)
}

impl From<OwCurrentResponse> for CurrentConditions {
    fn from(res: OwCurrentResponse) -> Self {
        Self {
            location_name: res.name,
            temperature_c: res.main.temp,
            condition: first_condition(res.weather),
            humidity_pct: res.main.humidity,
            wind_speed_mps: res.wind.speed,
        }
    }
}

impl From<OwForecastEntry> for RawForecastEntry {
    fn from(entry: OwForecastEntry) -> Self {
        Self {
            dt: entry.dt,
            timestamp: entry.dt_txt,
            temperature_c: entry.main.temp,
            condition: first_condition(entry.weather),
        }
    }
}

fn log_rejection(path: &str, status: StatusCode, body: &str) {
    tracing::info!(path, %status, body = %truncate_body(body), "OpenWeather rejected request");
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
