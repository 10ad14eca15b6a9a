use thiserror::Error;

/// Failure of one fetch attempt.
///
/// The `Display` text is exactly what the widget shows in place of the
/// weather content; no other detail reaches the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Current-conditions request answered with a non-success status.
    #[error("City not found")]
    CityNotFound,

    /// Forecast request answered with a non-success status.
    #[error("Forecast not found")]
    ForecastUnavailable,

    /// DNS, connect, timeout or any other transport problem.
    #[error("Failed to fetch weather data")]
    NetworkFailure,

    /// Success status but a body that does not decode.
    #[error("Unexpected response from weather provider")]
    InvalidResponse,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::InvalidResponse
        } else {
            FetchError::NetworkFailure
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(_: serde_json::Error) -> Self {
        FetchError::InvalidResponse
    }
}
