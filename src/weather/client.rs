use crate::weather::error::WeatherApiError;
use crate::weather::forecast::ForecastResponse;
use bon::bon;
use log::{info, warn};
use reqwest::Client;

pub const DEFAULT_WEATHER_API_URL: &str = "https://api.weatherapi.com/v1";
pub const DEFAULT_FORECAST_DAYS: u8 = 7;

/// Client for the weatherapi.com forecast endpoint.
///
/// # Examples
///
/// ```no_run
/// # use weather_wardrobe::{WeatherApiError, WeatherClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), WeatherApiError> {
/// let client = WeatherClient::new("my-api-key");
///
/// // Current conditions plus three days ahead for a city, an IP or "lat,lon".
/// let forecast = client.forecast().query("Amsterdam").days(3).call().await?;
/// println!(
///     "{}: {}",
///     forecast.location.city(),
///     forecast.current.condition.text
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
}

#[bon]
impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_WEATHER_API_URL)
    }

    /// Creates a client against a different API root, e.g. a proxy or a local mock.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetches current conditions and a multi-day forecast.
    ///
    /// * `.query(&str)`: **Required.** City name, IP address or `"lat,lon"`.
    /// * `.days(u8)`: Optional. Number of forecast days, defaults to `7`.
    ///
    /// # Errors
    ///
    /// * [`WeatherApiError::EmptyQuery`] for a blank query.
    /// * [`WeatherApiError::NetworkRequest`] / [`WeatherApiError::HttpStatus`] when the
    ///   request fails or the API answers with a non-success status.
    /// * [`WeatherApiError::JsonParse`] when the body is not a forecast.
    #[builder]
    pub async fn forecast(
        &self,
        query: &str,
        days: Option<u8>,
    ) -> Result<ForecastResponse, WeatherApiError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(WeatherApiError::EmptyQuery);
        }
        let days = days.unwrap_or(DEFAULT_FORECAST_DAYS);
        // Logged and reported without the API key.
        let endpoint = self.endpoint(query, days);
        info!("Fetching forecast from {}", endpoint);

        let response = self
            .http
            .get(format!("{}/forecast.json", self.base_url))
            .query(&[("key", self.api_key.as_str()), ("q", query)])
            .query(&[("days", days)])
            .send()
            .await
            .map_err(|e| WeatherApiError::NetworkRequest(endpoint.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", endpoint, e.status());
                return Err(if let Some(status) = e.status() {
                    WeatherApiError::HttpStatus {
                        url: endpoint,
                        status,
                        source: e,
                    }
                } else {
                    WeatherApiError::NetworkRequest(endpoint, e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| WeatherApiError::NetworkRequest(endpoint.clone(), e))?;
        let forecast: ForecastResponse =
            serde_json::from_slice(&body).map_err(|source| WeatherApiError::JsonParse {
                url: endpoint.clone(),
                source,
            })?;
        info!(
            "Received forecast for {} with {} days",
            forecast.location.city(),
            forecast.days().len()
        );
        Ok(forecast)
    }

    fn endpoint(&self, query: &str, days: u8) -> String {
        format!("{}/forecast.json?q={}&days={}", self.base_url, query, days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_omits_api_key() {
        let client = WeatherClient::with_base_url("secret", "http://localhost:9000/v1/");
        let endpoint = client.endpoint("Amsterdam", 3);
        assert_eq!(endpoint, "http://localhost:9000/v1/forecast.json?q=Amsterdam&days=3");
        assert!(!endpoint.contains("secret"));
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected_before_any_request() {
        let client = WeatherClient::with_base_url("key", "http://127.0.0.1:9");
        let result = client.forecast().query("   ").call().await;
        assert!(matches!(result, Err(WeatherApiError::EmptyQuery)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_network_error() {
        // Port 9 (discard) is closed on loopback, so the connection is refused.
        let client = WeatherClient::with_base_url("key", "http://127.0.0.1:9");
        let result = client.forecast().query("Amsterdam").days(1).call().await;
        match result {
            Err(WeatherApiError::NetworkRequest(url, _)) => {
                assert_eq!(url, "http://127.0.0.1:9/forecast.json?q=Amsterdam&days=1");
            }
            other => panic!("expected a network error, got {other:?}"),
        }
    }
}
