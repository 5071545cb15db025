//! Defines the vocabulary used to classify wardrobe items: the clothing [`Category`],
//! the [`Season`] an item is meant for and the kind of weather it suits ([`WeatherSuitability`]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// The functional class of a clothing item.
///
/// The known categories serialize to their lowercase singular name (`"top"`,
/// `"bottom"`, `"shoes"`, ...). Any other label is kept verbatim as
/// [`Category::Other`], so legacy or free-form data survives a round trip.
///
/// Matching is exact: `"tops"` is *not* [`Category::Top`].
///
/// # Examples
///
/// ```
/// use weather_wardrobe::Category;
///
/// assert_eq!(Category::from("shoes"), Category::Shoes);
/// assert_eq!(Category::from("tops"), Category::Other("tops".to_string()));
/// assert_eq!(Category::Outerwear.as_str(), "outerwear");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Shirts, blouses, sweaters and the like.
    Top,
    /// Trousers, skirts, shorts.
    Bottom,
    /// One-piece garments.
    Dress,
    /// Jackets and coats.
    Outerwear,
    /// Any footwear.
    Shoes,
    /// Scarves, hats, bags, jewellery.
    Accessory,
    /// A label outside the known vocabulary, stored as-is.
    Other(String),
}

impl Category {
    /// Categories that must each hold at least one item before an outfit can be built,
    /// in the order they are reported when missing.
    pub const REQUIRED: [Category; 3] = [Category::Top, Category::Bottom, Category::Shoes];

    /// Categories that enrich an outfit when present, in the order they are appended.
    pub const OPTIONAL: [Category; 2] = [Category::Outerwear, Category::Accessory];

    /// Returns the stored label for this category.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Dress => "dress",
            Category::Outerwear => "outerwear",
            Category::Shoes => "shoes",
            Category::Accessory => "accessory",
            Category::Other(label) => label,
        }
    }

    /// Whether this is one of the [`Category::REQUIRED`] categories.
    pub fn is_required(&self) -> bool {
        Category::REQUIRED.contains(self)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "top" => Category::Top,
            "bottom" => Category::Bottom,
            "dress" => Category::Dress,
            "outerwear" => Category::Outerwear,
            "shoes" => Category::Shoes,
            "accessory" => Category::Accessory,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match Category::from(value.as_str()) {
            Category::Other(_) => Category::Other(value),
            known => known,
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The season a wardrobe item or outfit is intended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    /// Suitable year-round.
    All,
}

/// The kind of weather a wardrobe item or outfit is suitable for.
///
/// Stored alongside items so the store can answer "what can I wear today?"
/// queries. [`WeatherSuitability::All`] matches every condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherSuitability {
    Sunny,
    Rainy,
    Snowy,
    Cloudy,
    All,
}

impl WeatherSuitability {
    /// Maps a free-text condition label from a weather provider (e.g. `"Patchy light drizzle"`)
    /// onto the closest suitability value.
    ///
    /// Precipitation wins over cloud cover; unrecognised labels map to [`WeatherSuitability::All`].
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_wardrobe::WeatherSuitability;
    ///
    /// assert_eq!(WeatherSuitability::from_condition_text("Light rain shower"), WeatherSuitability::Rainy);
    /// assert_eq!(WeatherSuitability::from_condition_text("Blizzard"), WeatherSuitability::Snowy);
    /// assert_eq!(WeatherSuitability::from_condition_text("Partly cloudy"), WeatherSuitability::Cloudy);
    /// assert_eq!(WeatherSuitability::from_condition_text("Clear"), WeatherSuitability::Sunny);
    /// ```
    pub fn from_condition_text(condition: &str) -> Self {
        let condition = condition.to_lowercase();
        let contains_any = |needles: &[&str]| needles.iter().any(|n| condition.contains(n));

        if contains_any(&["snow", "sleet", "blizzard", "ice pellets"]) {
            WeatherSuitability::Snowy
        } else if contains_any(&["rain", "drizzle", "shower", "thunder"]) {
            WeatherSuitability::Rainy
        } else if contains_any(&["cloud", "overcast", "fog", "mist"]) {
            WeatherSuitability::Cloudy
        } else if contains_any(&["sun", "clear"]) {
            WeatherSuitability::Sunny
        } else {
            WeatherSuitability::All
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            WeatherSuitability::Sunny => "sunny",
            WeatherSuitability::Rainy => "rainy",
            WeatherSuitability::Snowy => "snowy",
            WeatherSuitability::Cloudy => "cloudy",
            WeatherSuitability::All => "all",
        }
    }

    /// Whether an item tagged with `self` may be worn in `condition`.
    pub fn matches(&self, condition: WeatherSuitability) -> bool {
        *self == condition || *self == WeatherSuitability::All
    }
}

/// Stored-row weather filter shared by items and outfits: the inclusive
/// `[min, max]` range must contain `temperature` and the tag must match.
/// A missing bound or tag never matches, like a SQL comparison against `NULL`.
pub(crate) fn suits_weather(
    (min_temp, max_temp): (Option<f64>, Option<f64>),
    tag: Option<WeatherSuitability>,
    temperature: f64,
    condition: WeatherSuitability,
) -> bool {
    let in_range = match (min_temp, max_temp) {
        (Some(min), Some(max)) => min <= temperature && temperature <= max,
        _ => false,
    };
    in_range && tag.is_some_and(|tag| tag.matches(condition))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_exact_string_matching() {
        assert_eq!(Category::from("top"), Category::Top);
        assert_eq!(Category::from("tops"), Category::Other("tops".into()));
        assert_eq!(Category::from("Top"), Category::Other("Top".into()));
        assert_eq!(Category::from("accessories"), Category::Other("accessories".into()));
    }

    #[test]
    fn test_category_serde_uses_plain_strings() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&vec![Category::Shoes, Category::Other("scarf".into())])?;
        assert_eq!(json, r#"["shoes","scarf"]"#);

        let parsed: Vec<Category> = serde_json::from_str(r#"["outerwear","bottoms"]"#)?;
        assert_eq!(parsed, vec![Category::Outerwear, Category::Other("bottoms".into())]);
        Ok(())
    }

    #[test]
    fn test_required_categories() {
        assert!(Category::Top.is_required());
        assert!(Category::Shoes.is_required());
        assert!(!Category::Outerwear.is_required());
        assert!(!Category::Other("top ".into()).is_required());
    }

    #[test]
    fn test_suitability_matches_all() {
        assert!(WeatherSuitability::All.matches(WeatherSuitability::Rainy));
        assert!(WeatherSuitability::Rainy.matches(WeatherSuitability::Rainy));
        assert!(!WeatherSuitability::Sunny.matches(WeatherSuitability::Rainy));
    }

    #[test]
    fn test_suits_weather_range_and_tag() {
        let rainy = Some(WeatherSuitability::Rainy);
        assert!(suits_weather((Some(40.0), Some(65.0)), rainy, 40.0, WeatherSuitability::Rainy));
        assert!(suits_weather((Some(40.0), Some(65.0)), rainy, 65.0, WeatherSuitability::Rainy));
        assert!(!suits_weather((Some(40.0), Some(65.0)), rainy, 65.5, WeatherSuitability::Rainy));
        assert!(!suits_weather((Some(40.0), None), rainy, 50.0, WeatherSuitability::Rainy));
        assert!(!suits_weather((Some(40.0), Some(65.0)), None, 50.0, WeatherSuitability::Rainy));
        assert!(suits_weather(
            (Some(0.0), Some(100.0)),
            Some(WeatherSuitability::All),
            50.0,
            WeatherSuitability::Snowy
        ));
    }

    #[test]
    fn test_suitability_from_unknown_condition() {
        assert_eq!(
            WeatherSuitability::from_condition_text("Volcanic ash"),
            WeatherSuitability::All
        );
    }

    #[test]
    fn test_season_serde() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Season::Fall)?, r#""fall""#);
        assert_eq!(serde_json::from_str::<Season>(r#""all""#)?, Season::All);
        Ok(())
    }
}
