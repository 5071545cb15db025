//! The main entry point tying the weather provider, the wardrobe store, the
//! outfit selector and the image generator together.

use crate::config::WardrobeConfig;
use crate::error::WardrobeError;
use crate::imaging::image_generator::{GeneratedImage, ImageGenerator};
use crate::selector::error::{MalformedWeather, SelectionError};
use crate::selector::outfit_selector::OutfitSelector;
use crate::store::{SupabaseStore, WardrobeStore};
use crate::types::category::WeatherSuitability;
use crate::types::outfit::{Outfit, OutfitCandidate};
use crate::types::weather_observation::WeatherObservation;
use crate::weather::client::WeatherClient;
use crate::weather::error::WeatherApiError;
use crate::weather::forecast::{ForecastResponse, Location};
use bon::bon;
use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};

/// Most days the forecast endpoint returns.
pub const MAX_FORECAST_DAYS: u8 = 14;

/// Outfits suggested for one location and moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub location: Location,
    /// The forecast day the outfits were picked for, `None` for current conditions.
    pub date: Option<NaiveDate>,
    pub weather: WeatherObservation,
    /// Candidate 0 is the default pick.
    pub outfits: Vec<OutfitCandidate>,
}

/// Suggests outfits from a user's wardrobe for the weather at a location.
///
/// Create one with [`WeatherWardrobe::from_config`] for the hosted backend, or
/// with [`WeatherWardrobe::builder`] to plug in any [`WardrobeStore`].
///
/// # Examples
///
/// ```no_run
/// # use weather_wardrobe::{WardrobeConfig, WardrobeError, WeatherWardrobe};
/// # #[tokio::main]
/// # async fn main() -> Result<(), WardrobeError> {
/// let wardrobe = WeatherWardrobe::from_config(&WardrobeConfig::from_env()?);
///
/// // Three outfits for tomorrow in Amsterdam.
/// let suggestion = wardrobe
///     .suggest_outfits()
///     .user_id("user-1")
///     .location("Amsterdam")
///     .forecast_day(1)
///     .call()
///     .await?;
///
/// for outfit in &suggestion.outfits {
///     println!("{}: {}", outfit.outfit_name, outfit.description);
/// }
/// let previews = wardrobe.render_previews(&suggestion.outfits).await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WeatherWardrobe<S> {
    weather: WeatherClient,
    store: S,
    images: ImageGenerator,
    selector: OutfitSelector,
}

impl WeatherWardrobe<SupabaseStore> {
    /// Connects to weatherapi.com, the Supabase project and, when a key is
    /// configured, the image models.
    pub fn from_config(config: &WardrobeConfig) -> Self {
        let weather =
            WeatherClient::with_base_url(config.weather_api_key.clone(), &config.weather_api_url);
        let store = SupabaseStore::new(&config.supabase_url, config.supabase_anon_key.clone());
        let images = ImageGenerator::builder()
            .maybe_api_key(config.gemini_api_key.clone())
            .request_delay(config.image_request_delay)
            .build();
        let selector = OutfitSelector::builder()
            .default_count(config.outfit_count)
            .build();

        WeatherWardrobe::builder()
            .weather(weather)
            .store(store)
            .images(images)
            .selector(selector)
            .build()
    }
}

#[bon]
impl<S: WardrobeStore> WeatherWardrobe<S> {
    /// * `.weather(WeatherClient)`: **Required.**
    /// * `.store(S)`: **Required.** Where items and outfits live.
    /// * `.images(ImageGenerator)`: Optional. Defaults to a generator without API key (placeholders only).
    /// * `.selector(OutfitSelector)`: Optional. Defaults to 60°F / 80°F thresholds and 3 outfits.
    #[builder]
    pub fn new(
        weather: WeatherClient,
        store: S,
        images: Option<ImageGenerator>,
        selector: Option<OutfitSelector>,
    ) -> Self {
        Self {
            weather,
            store,
            images: images.unwrap_or_else(|| ImageGenerator::builder().build()),
            selector: selector.unwrap_or_default(),
        }
    }

    /// The underlying store, for managing items and saved outfits.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetches the weather at `location` and suggests outfits for it.
    ///
    /// * `.user_id(&str)`: **Required.** Whose wardrobe to use.
    /// * `.location(&str)`: **Required.** City name, IP address or `"lat,lon"`.
    /// * `.count(usize)`: Optional. Number of outfits, defaults to the selector's count.
    /// * `.forecast_day(usize)`: Optional. `0` is today's forecast, `1` tomorrow and so on.
    ///   Unset means current conditions.
    /// * `.weather_filtered(bool)`: Optional. Only consider items whose stored
    ///   temperature range and weather tag suit the weather. Defaults to `false`.
    ///
    /// # Errors
    ///
    /// * [`WardrobeError::Weather`] when the forecast cannot be fetched, or
    ///   [`WeatherApiError::DayOutOfRange`] when the requested day is not in it.
    /// * [`WardrobeError::Store`] when the items cannot be loaded.
    /// * [`WardrobeError::Selection`] when the usable items lack a top, bottom or shoes.
    #[builder]
    pub async fn suggest_outfits(
        &self,
        user_id: &str,
        location: &str,
        count: Option<usize>,
        forecast_day: Option<usize>,
        #[builder(default)] weather_filtered: bool,
    ) -> Result<Suggestion, WardrobeError> {
        let forecast = self
            .weather
            .forecast()
            .query(location)
            .days(forecast_days(forecast_day))
            .call()
            .await?;
        let (date, weather) = observation_for(&forecast, forecast_day)?;
        info!(
            "Weather in {}: {:?}°F, {}",
            forecast.location.city(),
            weather.fahrenheit(),
            weather.condition
        );

        let outfits = self
            .outfits_for_weather()
            .user_id(user_id)
            .weather(&weather)
            .maybe_count(count)
            .weather_filtered(weather_filtered)
            .call()
            .await?;

        Ok(Suggestion {
            location: forecast.location,
            date,
            weather,
            outfits,
        })
    }

    /// Suggests outfits for an observation the caller already has.
    ///
    /// Same options as [`WeatherWardrobe::suggest_outfits`] minus the location.
    /// Stored item temperature ranges are compared against the Fahrenheit temperature.
    #[builder]
    pub async fn outfits_for_weather(
        &self,
        user_id: &str,
        weather: &WeatherObservation,
        count: Option<usize>,
        #[builder(default)] weather_filtered: bool,
    ) -> Result<Vec<OutfitCandidate>, WardrobeError> {
        let items = if weather_filtered {
            let temperature = weather
                .fahrenheit()
                .ok_or(SelectionError::MalformedWeather(MalformedWeather::MissingTemperature))?;
            let condition = WeatherSuitability::from_condition_text(&weather.condition);
            self.store
                .get_items_for_weather(user_id, temperature, condition)
                .await?
        } else {
            self.store.get_items(user_id).await?
        };
        info!(
            "Selecting outfits from {} wardrobe items for user {}",
            items.len(),
            user_id
        );

        let outfits = self
            .selector
            .select()
            .items(&items)
            .weather(weather)
            .maybe_count(count)
            .call()?;
        Ok(outfits)
    }

    /// Renders a preview image for each outfit, in order.
    pub async fn render_previews(&self, outfits: &[OutfitCandidate]) -> Vec<GeneratedImage> {
        self.images.generate_many(outfits).await
    }

    /// Saves a suggested outfit for the user, referencing its items by id.
    pub async fn save_outfit(
        &self,
        user_id: &str,
        outfit: &OutfitCandidate,
    ) -> Result<Outfit, WardrobeError> {
        Ok(self.store.add_outfit(outfit.to_new_outfit(user_id)).await?)
    }
}

fn forecast_days(forecast_day: Option<usize>) -> u8 {
    forecast_day.map_or(1, |day| {
        u8::try_from(day.saturating_add(1))
            .unwrap_or(MAX_FORECAST_DAYS)
            .min(MAX_FORECAST_DAYS)
    })
}

fn observation_for(
    forecast: &ForecastResponse,
    forecast_day: Option<usize>,
) -> Result<(Option<NaiveDate>, WeatherObservation), WeatherApiError> {
    match forecast_day {
        None => Ok((None, forecast.current.observation())),
        Some(index) => forecast
            .days()
            .get(index)
            .map(|day| (Some(day.date), day.observation()))
            .ok_or(WeatherApiError::DayOutOfRange {
                index,
                available: forecast.days().len(),
            }),
    }
}
