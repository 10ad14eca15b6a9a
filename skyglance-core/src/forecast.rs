//! Reduction of the 3-hour forecast series to one reading per day.

use crate::model::{ForecastEntry, RawForecastEntry};

/// Time-of-day text that marks the representative (local noon) reading.
pub const NOON_MARKER: &str = "12:00:00";

/// Keep only entries whose timestamp carries [`NOON_MARKER`], in original order.
///
/// Never fails: no matching entries yields an empty list. Duplicate noon
/// entries for one date are all retained.
pub fn reduce_forecast(raw_entries: Vec<RawForecastEntry>) -> Vec<ForecastEntry> {
    let total = raw_entries.len();

    let kept: Vec<ForecastEntry> = raw_entries
        .into_iter()
        .filter(|entry| entry.timestamp.contains(NOON_MARKER))
        .map(ForecastEntry::from)
        .collect();

    tracing::debug!(total, kept = kept.len(), "reduced forecast series");
    kept
}
