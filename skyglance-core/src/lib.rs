//! Core library for the `skyglance` weather widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider behind a [`WeatherProvider`] trait
//! - Forecast reduction and the recommendation rule table
//! - Widget state with request sequencing, and a pure [`render`] to a view model
//!
//! It is used by `skyglance-cli`, but any front end can drive [`Widget`] and
//! draw the [`ViewModel`] it produces.

pub mod config;
pub mod error;
pub mod fetch;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod recommend;
pub mod state;
pub mod view;

pub use config::Config;
pub use error::FetchError;
pub use fetch::fetch_weather;
pub use forecast::{NOON_MARKER, reduce_forecast};
pub use model::{
    Condition, CurrentConditions, DisplayMode, ForecastEntry, RawForecastEntry, Recommendation,
    WeatherReport,
};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use recommend::recommend;
pub use state::{RequestTicket, Widget, WidgetState};
pub use view::{ViewModel, render};
