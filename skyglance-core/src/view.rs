//! Toolkit-independent view of the widget state.

use chrono::NaiveDateTime;

use crate::{
    model::{CurrentConditions, DisplayMode, ForecastEntry, Recommendation},
    recommend::recommend,
    state::WidgetState,
};

pub const TITLE: &str = "Weather App";
pub const SEARCH_PLACEHOLDER: &str = "Enter city";
pub const SEARCH_LABEL: &str = "City name";
pub const FORECAST_HEADING: &str = "5-Day Forecast";
pub const LOADING_TEXT: &str = "Loading...";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DAY_FORMAT: &str = "%a %b %d %Y";

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub title: &'static str,
    pub display_mode: DisplayMode,
    pub theme_toggle: ThemeToggle,
    pub search: SearchBox,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeToggle {
    pub label: String,
    pub pressed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBox {
    pub value: String,
    pub placeholder: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Loading,
    Error(String),
    Weather {
        current: Option<CurrentCard>,
        forecast_heading: &'static str,
        forecast: Vec<DayCard>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentCard {
    pub heading: String,
    /// `None` when the provider sent no icon id.
    pub icon: Option<Image>,
    pub temperature: String,
    pub condition: String,
    pub humidity: String,
    pub wind: String,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCard {
    pub date: String,
    pub icon: Option<Image>,
    pub temperature: String,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub url: String,
    pub alt: String,
}

impl Image {
    fn weather_icon(icon_id: &str, description: &str) -> Option<Self> {
        let icon_id = icon_id.trim();
        (!icon_id.is_empty()).then(|| Self {
            url: icon_url(icon_id),
            alt: description.to_string(),
        })
    }
}

pub fn icon_url(icon_id: &str) -> String {
    format!("https://openweathermap.org/img/wn/{icon_id}@2x.png")
}

/// Format a provider timestamp like "Wed Jan 15 2025"; unparseable text is shown as-is.
pub fn format_day(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .map(|dt| dt.format(DAY_FORMAT).to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Map the widget state to what should be on screen.
pub fn render(state: &WidgetState) -> ViewModel {
    let body = if state.loading {
        Body::Loading
    } else if let Some(error) = &state.error {
        Body::Error(error.clone())
    } else {
        Body::Weather {
            current: state.current.as_ref().map(current_card),
            forecast_heading: FORECAST_HEADING,
            forecast: state.forecast.iter().map(day_card).collect(),
        }
    };

    ViewModel {
        title: TITLE,
        display_mode: state.display_mode,
        theme_toggle: theme_toggle(state.display_mode),
        search: SearchBox {
            value: state.query.clone(),
            placeholder: SEARCH_PLACEHOLDER,
            label: SEARCH_LABEL,
        },
        body,
    }
}

fn theme_toggle(mode: DisplayMode) -> ThemeToggle {
    let target = match mode {
        DisplayMode::Light => "Dark",
        DisplayMode::Dark => "Light",
    };
    ThemeToggle {
        label: format!("Switch to {target} Mode"),
        pressed: mode.is_light(),
    }
}

fn current_card(current: &CurrentConditions) -> CurrentCard {
    CurrentCard {
        heading: format!("Today in {}", current.location_name),
        icon: Image::weather_icon(&current.condition.icon_id, &current.condition.description),
        temperature: format!("Temp: {}°C", current.temperature_c),
        condition: format!("Condition: {}", current.condition.description),
        humidity: format!("Humidity: {}%", current.humidity_pct),
        wind: format!("Wind: {} m/s", current.wind_speed_mps),
        recommendation: recommend(Some(current)),
    }
}

fn day_card(entry: &ForecastEntry) -> DayCard {
    DayCard {
        date: format_day(&entry.timestamp),
        icon: Image::weather_icon(&entry.icon_id, &entry.description),
        temperature: format!("Temp: {}°C", entry.temperature_c),
        condition: entry.condition_main.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::FetchError, fetch::fake, model::{Condition, WeatherReport}, recommend::HOT};

    fn loaded_state() -> WidgetState {
        let mut state = WidgetState::new("Paris");
        let ticket = state.begin_fetch("Paris");
        state.complete(
            &ticket,
            Ok(WeatherReport {
                current: fake::current("Paris", "Clear", 35.0),
                forecast: vec![ForecastEntry::from(fake::raw("2025-01-15 12:00:00"))],
            }),
        );
        state
    }

    #[test]
    fn loading_takes_precedence() {
        let mut state = WidgetState::new("Paris");
        state.begin_fetch("Paris");

        assert_eq!(render(&state).body, Body::Loading);
    }

    #[test]
    fn error_replaces_weather_content() {
        let mut state = WidgetState::new("Atlantis");
        let ticket = state.begin_fetch("Atlantis");
        state.complete(&ticket, Err(FetchError::CityNotFound));

        assert_eq!(render(&state).body, Body::Error("City not found".to_string()));
    }

    #[test]
    fn weather_body_has_cards_and_recommendation() {
        let view = render(&loaded_state());

        let Body::Weather {
            current,
            forecast,
            forecast_heading,
        } = view.body
        else {
            panic!("expected weather body");
        };
        let current = current.expect("current card");

        assert_eq!(current.heading, "Today in Paris");
        assert_eq!(current.temperature, "Temp: 35°C");
        assert_eq!(current.humidity, "Humidity: 55%");
        assert_eq!(current.wind, "Wind: 2.5 m/s");
        assert_eq!(
            current.icon.map(|i| i.url).as_deref(),
            Some("https://openweathermap.org/img/wn/01d@2x.png")
        );
        assert_eq!(current.recommendation, HOT);

        assert_eq!(forecast_heading, "5-Day Forecast");
        assert_eq!(forecast.len(), 1);
        assert_eq!(forecast[0].date, "Wed Jan 15 2025");
        assert_eq!(forecast[0].condition, "Clouds");
        assert_eq!(
            forecast[0].icon.as_ref().map(|i| i.alt.as_str()),
            Some("broken clouds")
        );
    }

    #[test]
    fn theme_toggle_names_the_other_mode() {
        let mut state = WidgetState::new("");
        let dark = render(&state);
        assert_eq!(dark.theme_toggle.label, "Switch to Light Mode");
        assert!(!dark.theme_toggle.pressed);

        state.toggle_display_mode();
        let light = render(&state);
        assert_eq!(light.theme_toggle.label, "Switch to Dark Mode");
        assert!(light.theme_toggle.pressed);
        assert_eq!(light.display_mode, DisplayMode::Light);
    }

    #[test]
    fn missing_icon_id_renders_no_image() {
        let mut current = fake::current("Nowhere", "Clear", 20.0);
        current.condition = Condition::unknown();
        let mut day = ForecastEntry::from(fake::raw("2025-01-15 12:00:00"));
        day.icon_id = String::new();

        let mut state = WidgetState::new("Nowhere");
        let ticket = state.begin_fetch("Nowhere");
        state.complete(
            &ticket,
            Ok(WeatherReport {
                current,
                forecast: vec![day],
            }),
        );

        let Body::Weather {
            current,
            forecast,
            ..
        } = render(&state).body
        else {
            panic!("expected weather body");
        };
        assert_eq!(current.expect("current card").icon, None);
        assert_eq!(forecast[0].icon, None);
    }

    #[test]
    fn unparseable_timestamp_is_shown_verbatim() {
        assert_eq!(format_day("tomorrow-ish"), "tomorrow-ish");
    }

    #[test]
    fn search_box_mirrors_query() {
        let mut state = WidgetState::new("");
        state.set_query("Lis");

        let view = render(&state);
        assert_eq!(view.search.value, "Lis");
        assert_eq!(view.search.placeholder, "Enter city");
    }
}
