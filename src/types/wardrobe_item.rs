//! Wardrobe item records as stored in the `wardrobe_items` table.

use crate::types::category::{suits_weather, Category, Season, WeatherSuitability};
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single digitized clothing article belonging to a user.
///
/// Only `id`, `name`, `category`, `color` and `material` take part in outfit
/// selection. The remaining fields are stored metadata used by weather-filtered
/// store queries.
///
/// Items are built with a builder; unset optional fields stay `None`.
///
/// # Examples
///
/// ```
/// use weather_wardrobe::{Category, WardrobeItem};
///
/// let shirt = WardrobeItem::builder()
///     .id("item-1")
///     .name("Blue Shirt")
///     .category(Category::Top)
///     .color("blue")
///     .build();
///
/// assert_eq!(shirt.category, Category::Top);
/// assert_eq!(shirt.material, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct WardrobeItem {
    /// Opaque identifier assigned by the store.
    #[builder(into)]
    pub id: String,
    /// Owner of the item.
    #[builder(into, default)]
    #[serde(default)]
    pub user_id: String,
    #[builder(into)]
    pub name: String,
    pub category: Category,
    #[builder(into)]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub color: Option<String>,
    #[builder(into)]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub material: Option<String>,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub weather_condition: Option<WeatherSuitability>,
    /// Lowest temperature the item is comfortable in.
    #[serde(default)]
    pub min_temp: Option<f64>,
    /// Highest temperature the item is comfortable in.
    #[serde(default)]
    pub max_temp: Option<f64>,
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[builder(default = Utc::now())]
    pub created_at: DateTime<Utc>,
    #[builder(default = Utc::now())]
    pub updated_at: DateTime<Utc>,
}

impl WardrobeItem {
    /// Whether the item is comfortable at `temperature` in `condition`.
    ///
    /// An item missing its temperature range or weather tag never matches,
    /// the same way a SQL comparison against `NULL` filters the row out.
    pub fn suits(&self, temperature: f64, condition: WeatherSuitability) -> bool {
        suits_weather(
            (self.min_temp, self.max_temp),
            self.weather_condition,
            temperature,
            condition,
        )
    }
}

/// Insert payload for a wardrobe item. The store assigns `id` and timestamps.
///
/// Weather metadata is always sent. Unset, an item is wearable in every season
/// and weather between 0°F and 100°F.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct NewWardrobeItem {
    #[builder(into)]
    pub user_id: String,
    #[builder(into)]
    pub name: String,
    pub category: Category,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Defaults to [`Season::All`].
    #[builder(default = Season::All)]
    #[serde(default = "all_seasons")]
    pub season: Season,
    /// Defaults to [`WeatherSuitability::All`].
    #[builder(default = WeatherSuitability::All)]
    #[serde(default = "all_weather")]
    pub weather_condition: WeatherSuitability,
    /// Defaults to 0°F.
    #[builder(default = DEFAULT_MIN_TEMP)]
    #[serde(default = "default_min_temp")]
    pub min_temp: f64,
    /// Defaults to 100°F.
    #[builder(default = DEFAULT_MAX_TEMP)]
    #[serde(default = "default_max_temp")]
    pub max_temp: f64,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

pub const DEFAULT_MIN_TEMP: f64 = 0.0;
pub const DEFAULT_MAX_TEMP: f64 = 100.0;

fn all_seasons() -> Season {
    Season::All
}

fn all_weather() -> WeatherSuitability {
    WeatherSuitability::All
}

fn default_min_temp() -> f64 {
    DEFAULT_MIN_TEMP
}

fn default_max_temp() -> f64 {
    DEFAULT_MAX_TEMP
}

impl NewWardrobeItem {
    /// Turns the payload into a stored item with the given identity and timestamp.
    pub(crate) fn into_item(self, id: String, now: DateTime<Utc>) -> WardrobeItem {
        WardrobeItem {
            id,
            user_id: self.user_id,
            name: self.name,
            category: self.category,
            color: self.color.filter(|c| !c.trim().is_empty()),
            material: self.material.filter(|m| !m.trim().is_empty()),
            season: Some(self.season),
            weather_condition: Some(self.weather_condition),
            min_temp: Some(self.min_temp),
            max_temp: Some(self.max_temp),
            image_url: self.image_url,
            created_at: now,
            updated_at: now,
        }
    }
}

// The hosted table stores blank strings for unset color/material.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
