use serde::{Deserialize, Serialize};

/// Primary weather condition as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Short label such as "Rain" or "Clouds".
    pub main: String,
    pub description: String,
    pub icon_id: String,
}

impl Condition {
    pub fn unknown() -> Self {
        Self {
            main: "Unknown".to_string(),
            description: "Unknown".to_string(),
            icon_id: String::new(),
        }
    }
}

/// Snapshot of the weather for a location at request time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub location_name: String,
    pub temperature_c: f64,
    pub condition: Condition,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
}

/// One reading of the 3-hour forecast series, before reduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawForecastEntry {
    /// Provider epoch seconds; stable key for a forecast slot.
    pub dt: i64,
    /// Provider local date-time text, e.g. "2025-01-15 12:00:00".
    pub timestamp: String,
    pub temperature_c: f64,
    pub condition: Condition,
}

/// One represented calendar day of the displayed forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp: String,
    pub temperature_c: f64,
    pub condition_main: String,
    pub icon_id: String,
    pub description: String,
}

impl From<RawForecastEntry> for ForecastEntry {
    fn from(raw: RawForecastEntry) -> Self {
        Self {
            timestamp: raw.timestamp,
            temperature_c: raw.temperature_c,
            condition_main: raw.condition.main,
            icon_id: raw.condition.icon_id,
            description: raw.condition.description,
        }
    }
}

/// Result of one successful fetch: both halves belong to the same city.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastEntry>,
}

/// Advisory text and icon derived from current conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Recommendation {
    pub text: &'static str,
    pub icon: &'static str,
}

impl Recommendation {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.icon.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Dark,
    Light,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Dark => DisplayMode::Light,
            DisplayMode::Light => DisplayMode::Dark,
        }
    }

    pub fn is_light(self) -> bool {
        self == DisplayMode::Light
    }
}
