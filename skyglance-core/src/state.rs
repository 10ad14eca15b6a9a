//! Widget state and the request-sequencing rules that keep it consistent.

use crate::{
    error::FetchError,
    fetch::fetch_weather,
    model::{CurrentConditions, DisplayMode, ForecastEntry, WeatherReport},
    provider::WeatherProvider,
};

/// Handle for one issued fetch. Only the most recently issued ticket may
/// write its result into the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub seq: u64,
    pub city: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetState {
    /// Text currently in the search box.
    pub query: String,
    /// City of the last successful fetch.
    pub city: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub current: Option<CurrentConditions>,
    pub forecast: Vec<ForecastEntry>,
    pub display_mode: DisplayMode,
    latest_request: u64,
}

impl WidgetState {
    pub fn new(initial_query: &str) -> Self {
        Self {
            query: initial_query.to_string(),
            ..Self::default()
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The trimmed query, or `None` when it is blank and no search should run.
    pub fn submit_search(&self) -> Option<String> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn toggle_display_mode(&mut self) {
        self.display_mode = self.display_mode.toggled();
    }

    /// Mark a fetch for `city` as in flight.
    pub fn begin_fetch(&mut self, city: &str) -> RequestTicket {
        self.latest_request += 1;
        self.loading = true;
        self.error = None;

        RequestTicket {
            seq: self.latest_request,
            city: city.to_string(),
        }
    }

    pub fn is_latest(&self, ticket: &RequestTicket) -> bool {
        ticket.seq == self.latest_request
    }

    /// Apply a finished fetch. Returns `false` when a newer fetch was issued
    /// since `ticket`, in which case the state is left untouched.
    pub fn complete(
        &mut self,
        ticket: &RequestTicket,
        result: Result<WeatherReport, FetchError>,
    ) -> bool {
        if !self.is_latest(ticket) {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.latest_request,
                city = %ticket.city,
                "discarding stale fetch result"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(report) => {
                self.current = Some(report.current);
                self.forecast = report.forecast;
                self.city = Some(ticket.city.clone());
                self.error = None;
            }
            Err(err) => {
                tracing::info!(city = %ticket.city, error = %err, "weather fetch failed");
                self.current = None;
                self.forecast.clear();
                self.error = Some(err.to_string());
            }
        }
        true
    }
}

/// A provider paired with the state it feeds.
#[derive(Debug)]
pub struct Widget<P> {
    provider: P,
    state: WidgetState,
}

impl<P: WeatherProvider> Widget<P> {
    pub fn new(provider: P, initial_city: &str) -> Self {
        Self {
            provider,
            state: WidgetState::new(initial_city),
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    /// Initial fetch for whatever the search box starts with.
    pub async fn mount(&mut self) -> bool {
        match self.state.submit_search() {
            Some(city) => self.refresh(&city).await,
            None => false,
        }
    }

    /// Store `query` as the search text and fetch it if non-blank.
    pub async fn search(&mut self, query: &str) -> bool {
        self.state.set_query(query);
        match self.state.submit_search() {
            Some(city) => self.refresh(&city).await,
            None => false,
        }
    }

    pub fn toggle_display_mode(&mut self) {
        self.state.toggle_display_mode();
    }

    async fn refresh(&mut self, city: &str) -> bool {
        let ticket = self.state.begin_fetch(city);
        let result = fetch_weather(&self.provider, city).await;
        self.state.complete(&ticket, result)
    }
}
