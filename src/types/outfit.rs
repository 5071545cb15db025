//! Outfit types: the ephemeral [`OutfitCandidate`] produced by the selector and the
//! persisted [`Outfit`] record stored in the `outfits` table.

use crate::types::category::{suits_weather, Category, Season, WeatherSuitability};
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One item slot of an [`OutfitCandidate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitItem {
    /// Identifier of the source [`crate::WardrobeItem`].
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Why this item is part of the outfit.
    pub reason: String,
}

/// A proposed combination of wardrobe items for a given weather context.
///
/// Candidates are created fresh by every call to the selector and have no
/// identity of their own. `description` is the text handed to the image
/// generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitCandidate {
    pub outfit_name: String,
    pub reasoning: String,
    /// Ordered: top, bottom, shoes, then outerwear and accessory when present.
    pub items: Vec<OutfitItem>,
    pub weather_notes: String,
    pub styling_tips: String,
    pub description: String,
}

impl OutfitCandidate {
    /// Identifiers of the items in this candidate, in outfit order.
    pub fn item_ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    /// Converts the candidate into an insert payload, storing item ids only.
    pub fn to_new_outfit(&self, user_id: impl Into<String>) -> NewOutfit {
        NewOutfit::builder()
            .user_id(user_id)
            .name(self.outfit_name.clone())
            .items(self.item_ids())
            .build()
    }
}

/// An outfit saved by a user. References wardrobe items by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub items: Vec<String>,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub weather_condition: Option<WeatherSuitability>,
    #[serde(default)]
    pub min_temp: Option<f64>,
    #[serde(default)]
    pub max_temp: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Outfit {
    /// Same matching rule as [`crate::WardrobeItem::suits`].
    pub fn suits(&self, temperature: f64, condition: WeatherSuitability) -> bool {
        suits_weather(
            (self.min_temp, self.max_temp),
            self.weather_condition,
            temperature,
            condition,
        )
    }
}

/// Insert payload for an outfit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct NewOutfit {
    #[builder(into)]
    pub user_id: String,
    #[builder(into)]
    pub name: String,
    pub items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_condition: Option<WeatherSuitability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_temp: Option<f64>,
}

impl NewOutfit {
    pub(crate) fn into_outfit(self, id: String, now: DateTime<Utc>) -> Outfit {
        Outfit {
            id,
            user_id: self.user_id,
            name: self.name,
            items: self.items,
            season: self.season,
            weather_condition: self.weather_condition,
            min_temp: self.min_temp,
            max_temp: self.max_temp,
            created_at: now,
            updated_at: now,
        }
    }
}
