use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherApiError {
    #[error("Weather query must not be empty")]
    EmptyQuery,

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse forecast response from {url}")]
    JsonParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Forecast has no day at index {index} ({available} days available)")]
    DayOutOfRange { index: usize, available: usize },
}
