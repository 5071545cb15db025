use thiserror::Error;

/// Why an image provider could not produce an image.
///
/// These never reach callers of [`crate::ImageGenerator`]: every failure is
/// logged and replaced by a fallback image. They are exposed for the
/// lower-level `try_*` methods.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("No image API key configured")]
    MissingApiKey,

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse image response from {url}")]
    JsonParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Model {model} returned no image")]
    NoImage { model: String },
}
