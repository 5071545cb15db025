use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse {table} rows returned by {url}")]
    JsonParse {
        table: &'static str,
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Insert into {table} returned no row")]
    EmptyInsert { table: &'static str },

    #[error("Invalid store URL '{0}'")]
    InvalidUrl(String),
}
