//! Credentials and endpoints for the hosted collaborators.

use crate::imaging::image_generator::DEFAULT_REQUEST_DELAY;
use crate::selector::outfit_selector::DEFAULT_OUTFIT_COUNT;
use crate::weather::client::DEFAULT_WEATHER_API_URL;
use bon::Builder;
use log::debug;
use std::time::Duration;
use thiserror::Error;

pub const WEATHER_API_KEY_VAR: &str = "WEATHER_API_KEY";
pub const WEATHER_API_URL_VAR: &str = "WEATHER_API_URL";
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const SUPABASE_URL_VAR: &str = "SUPABASE_URL";
pub const SUPABASE_ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Settings for [`crate::WeatherWardrobe::from_config`].
///
/// # Examples
///
/// ```
/// use weather_wardrobe::WardrobeConfig;
///
/// let config = WardrobeConfig::builder()
///     .weather_api_key("weather-key")
///     .supabase_url("https://demo.supabase.co")
///     .supabase_anon_key("anon")
///     .outfit_count(5)
///     .build();
///
/// assert_eq!(config.weather_api_url, "https://api.weatherapi.com/v1");
/// assert!(config.gemini_api_key.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct WardrobeConfig {
    #[builder(into)]
    pub weather_api_key: String,
    #[builder(into, default = DEFAULT_WEATHER_API_URL.to_string())]
    pub weather_api_url: String,
    /// Without a key, outfit previews are placeholders.
    #[builder(into)]
    pub gemini_api_key: Option<String>,
    #[builder(into)]
    pub supabase_url: String,
    #[builder(into)]
    pub supabase_anon_key: String,
    #[builder(default = DEFAULT_OUTFIT_COUNT)]
    pub outfit_count: usize,
    #[builder(default = DEFAULT_REQUEST_DELAY)]
    pub image_request_delay: Duration,
}

impl WardrobeConfig {
    /// Reads the configuration from the process environment.
    ///
    /// `WEATHER_API_KEY`, `SUPABASE_URL` and `SUPABASE_ANON_KEY` are required.
    /// `GEMINI_API_KEY` and `WEATHER_API_URL` are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`WardrobeConfig::from_env`], reading variables through `lookup`.
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let require = |name: &'static str| get(name).ok_or(ConfigError::MissingVar(name));

        let config = Self::builder()
            .weather_api_key(require(WEATHER_API_KEY_VAR)?)
            .maybe_weather_api_url(get(WEATHER_API_URL_VAR))
            .maybe_gemini_api_key(get(GEMINI_API_KEY_VAR))
            .supabase_url(require(SUPABASE_URL_VAR)?)
            .supabase_anon_key(require(SUPABASE_ANON_KEY_VAR)?)
            .build();
        debug!(
            "Loaded configuration for {} (image generation {})",
            config.supabase_url,
            if config.gemini_api_key.is_some() { "enabled" } else { "disabled" }
        );
        Ok(config)
    }
}
