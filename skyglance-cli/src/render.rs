//! Terminal drawing of the core view model.

use std::fmt::{self, Write};
use std::io::IsTerminal;

use crossterm::style::{Color, Stylize, style};
use skyglance_core::{
    DisplayMode,
    view::{Body, CurrentCard, DayCard, LOADING_TEXT, ViewModel},
};

/// Colours used for one display mode; `None` draws plain text.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    accent: Option<Color>,
    text: Option<Color>,
    muted: Option<Color>,
    error: Option<Color>,
}

impl Palette {
    pub fn plain() -> Self {
        Self {
            accent: None,
            text: None,
            muted: None,
            error: None,
        }
    }

    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Dark => Self {
                accent: Some(Color::Cyan),
                text: Some(Color::White),
                muted: Some(Color::Grey),
                error: Some(Color::Red),
            },
            DisplayMode::Light => Self {
                accent: Some(Color::DarkBlue),
                text: Some(Color::Black),
                muted: Some(Color::DarkGrey),
                error: Some(Color::DarkRed),
            },
        }
    }

    /// Coloured output only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect(mode: DisplayMode) -> Self {
        if std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none() {
            Self::for_mode(mode)
        } else {
            Self::plain()
        }
    }

    fn paint(color: Option<Color>, text: &str, bold: bool) -> String {
        match color {
            Some(c) if bold => style(text).with(c).bold().to_string(),
            Some(c) => style(text).with(c).to_string(),
            None => text.to_string(),
        }
    }

    fn heading(&self, text: &str) -> String {
        Self::paint(self.accent, text, true)
    }

    fn body(&self, text: &str) -> String {
        Self::paint(self.text, text, false)
    }

    fn muted(&self, text: &str) -> String {
        Self::paint(self.muted, text, false)
    }

    fn error(&self, text: &str) -> String {
        Self::paint(self.error, text, true)
    }
}

pub fn draw(view: &ViewModel, palette: Palette) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_view(&mut out, view, &palette);
    out
}

fn write_view(out: &mut String, view: &ViewModel, p: &Palette) -> fmt::Result {
    writeln!(out, "{}", p.heading(view.title))?;
    writeln!(out, "{}", p.muted(&format!("[{}]", view.theme_toggle.label)))?;
    let query = if view.search.value.is_empty() {
        view.search.placeholder
    } else {
        view.search.value.as_str()
    };
    writeln!(out, "{}", p.muted(&format!("{}: {query}", view.search.label)))?;
    writeln!(out)?;

    match &view.body {
        Body::Loading => writeln!(out, "{}", p.muted(LOADING_TEXT))?,
        Body::Error(message) => writeln!(out, "{}", p.error(message))?,
        Body::Weather {
            current,
            forecast_heading,
            forecast,
        } => {
            if let Some(card) = current {
                write_current(out, card, p)?;
                writeln!(out)?;
            }
            writeln!(out, "{}", p.heading(forecast_heading))?;
            for day in forecast {
                write_day(out, day, p)?;
            }
        }
    }
    Ok(())
}

fn write_current(out: &mut String, card: &CurrentCard, p: &Palette) -> fmt::Result {
    writeln!(out, "{}", p.heading(&card.heading))?;
    for line in [&card.temperature, &card.condition, &card.humidity, &card.wind] {
        writeln!(out, "  {}", p.body(line))?;
    }
    if let Some(icon) = &card.icon {
        writeln!(out, "  {}", p.muted(&icon.url))?;
    }

    if !card.recommendation.is_empty() {
        writeln!(out)?;
        let rec = card.recommendation;
        writeln!(out, "  {}  {}", rec.icon, p.body(rec.text))?;
    }
    Ok(())
}

/// Columns are padded before painting so escape codes do not count toward the width.
fn write_day(out: &mut String, day: &DayCard, p: &Palette) -> fmt::Result {
    writeln!(
        out,
        "  {} {} {}",
        p.body(&format!("{:<16}", day.date)),
        p.body(&format!("{:<14}", day.temperature)),
        p.muted(&day.condition)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyglance_core::{
        Condition, CurrentConditions, FetchError, ForecastEntry, WeatherReport, WidgetState,
        render,
    };

    fn loaded() -> WidgetState {
        let mut state = WidgetState::new("Oslo");
        let ticket = state.begin_fetch("Oslo");
        state.complete(
            &ticket,
            Ok(WeatherReport {
                current: CurrentConditions {
                    location_name: "Oslo".to_string(),
                    temperature_c: -2.5,
                    condition: Condition {
                        main: "Snow".to_string(),
                        description: "light snow".to_string(),
                        icon_id: "13d".to_string(),
                    },
                    humidity_pct: 90,
                    wind_speed_mps: 4.0,
                },
                forecast: vec![ForecastEntry {
                    timestamp: "2025-01-16 12:00:00".to_string(),
                    temperature_c: -1.0,
                    condition_main: "Snow".to_string(),
                    icon_id: "13d".to_string(),
                    description: "snow".to_string(),
                }],
            }),
        );
        state
    }

    #[test]
    fn draws_current_recommendation_and_forecast() {
        let text = draw(&render(&loaded()), Palette::plain());

        assert!(text.starts_with("Weather App\n"));
        assert!(text.contains("[Switch to Light Mode]"));
        assert!(text.contains("Today in Oslo"));
        assert!(text.contains("Temp: -2.5°C"));
        assert!(text.contains("Bundle up! Snow is falling"));
        assert!(text.contains("5-Day Forecast"));
        assert!(text.contains("Thu Jan 16 2025"));
    }

    #[test]
    fn draws_error_instead_of_weather() {
        let mut state = WidgetState::new("Atlantis");
        let ticket = state.begin_fetch("Atlantis");
        state.complete(&ticket, Err(FetchError::CityNotFound));

        let text = draw(&render(&state), Palette::plain());

        assert!(text.contains("City not found"));
        assert!(!text.contains("5-Day Forecast"));
    }

    #[test]
    fn empty_query_shows_placeholder() {
        let text = draw(&render(&WidgetState::new("")), Palette::plain());
        assert!(text.contains("City name: Enter city"));
    }

    #[test]
    fn forecast_columns_align_in_colour() {
        let text = draw(&render(&loaded()), Palette::for_mode(DisplayMode::Dark));

        assert!(text.contains("Thu Jan 16 2025 \u{1b}"));
        assert!(text.contains("Temp: -1°C    \u{1b}"));
    }

    #[test]
    fn missing_icon_skips_icon_line() {
        let mut state = loaded();
        if let Some(current) = state.current.as_mut() {
            current.condition = Condition::unknown();
        }

        let text = draw(&render(&state), Palette::plain());

        assert!(!text.contains("openweathermap.org/img"));
        assert!(text.contains("Today in Oslo"));
    }

    #[test]
    fn coloured_palette_emits_escape_codes() {
        let text = draw(&render(&loaded()), Palette::for_mode(DisplayMode::Light));
        assert!(text.contains('\u{1b}'));
    }
}
