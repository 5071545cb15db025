//! Category-balanced outfit selection.
//!
//! Items are grouped by category and combined round-robin: outfit `i` takes
//! the `i mod n`-th item of each category, so successive outfits vary when a
//! category has several items and repeat with period `n` when it has fewer
//! than requested. The result is a pure function of its inputs.

use crate::selector::error::{MalformedWeather, SelectionError};
use crate::types::category::Category;
use crate::types::outfit::{OutfitCandidate, OutfitItem};
use crate::types::styling_bucket::{StylingBucket, StylingThresholds};
use crate::types::wardrobe_item::WardrobeItem;
use crate::types::weather_observation::WeatherObservation;
use bon::{bon, Builder};
use std::collections::HashMap;

/// Number of candidates produced when the caller does not ask for a specific count.
pub const DEFAULT_OUTFIT_COUNT: usize = 3;

/// Produces weather-appropriate outfit candidates from a wardrobe.
///
/// The selector holds only configuration and may be shared freely between
/// threads; each call works on its own inputs.
///
/// # Examples
///
/// ```
/// use weather_wardrobe::{Category, OutfitSelector, WardrobeItem, WeatherObservation};
///
/// let items = vec![
///     WardrobeItem::builder().id("1").name("Blue Shirt").category(Category::Top).build(),
///     WardrobeItem::builder().id("2").name("Black Jeans").category(Category::Bottom).build(),
///     WardrobeItem::builder().id("3").name("White Sneakers").category(Category::Shoes).build(),
/// ];
/// let weather = WeatherObservation::builder().temp_f(72.0).condition("Sunny").build();
///
/// let selector = OutfitSelector::default();
/// let outfits = selector.select().items(&items).weather(&weather).call()?;
///
/// assert_eq!(outfits.len(), 3);
/// assert_eq!(outfits[0].outfit_name, "Complete Outfit");
/// # Ok::<(), weather_wardrobe::SelectionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct OutfitSelector {
    #[builder(default)]
    thresholds: StylingThresholds,
    #[builder(default = DEFAULT_OUTFIT_COUNT)]
    default_count: usize,
}

impl Default for OutfitSelector {
    fn default() -> Self {
        Self {
            thresholds: StylingThresholds::default(),
            default_count: DEFAULT_OUTFIT_COUNT,
        }
    }
}

#[bon]
impl OutfitSelector {
    /// Builds `count` outfit candidates (default 3) from `items` for `weather`.
    ///
    /// Candidate 0 is the default pick.
    ///
    /// # Errors
    ///
    /// * [`SelectionError::MalformedWeather`] if the observation has no usable
    ///   temperature or an empty condition label.
    /// * [`SelectionError::InsufficientWardrobe`] if any of top, bottom or shoes
    ///   has no items. The error lists every empty required category and no
    ///   outfits are returned.
    #[builder]
    pub fn select(
        &self,
        items: &[WardrobeItem],
        weather: &WeatherObservation,
        count: Option<usize>,
    ) -> Result<Vec<OutfitCandidate>, SelectionError> {
        let count = count.unwrap_or(self.default_count);
        let (temperature_f, condition) = validate_weather(weather)?;

        let by_category = group_by_category(items);
        let missing: Vec<Category> = Category::REQUIRED
            .iter()
            .filter(|category| !by_category.contains_key(category))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(SelectionError::InsufficientWardrobe { missing });
        }

        let bucket = StylingBucket::classify(temperature_f, condition, &self.thresholds);
        let reasoning = format!("Perfect for {temperature_f}°F weather with {condition}");
        let weather_notes = format!("Temperature: {temperature_f}°F, Conditions: {condition}");

        let outfits = (0..count)
            .map(|i| {
                let mut outfit_items = Vec::with_capacity(5);
                for category in &Category::REQUIRED {
                    if let Some(item) = pick(&by_category, category, i) {
                        outfit_items.push(outfit_item(
                            item,
                            format!("Essential {category} for complete outfit"),
                        ));
                    }
                }
                for category in &Category::OPTIONAL {
                    if let Some(item) = pick(&by_category, category, i) {
                        outfit_items.push(outfit_item(
                            item,
                            format!("Stylish {category} to complete the look"),
                        ));
                    }
                }

                let description = describe(&outfit_items, &reasoning, bucket.styling_tip());
                OutfitCandidate {
                    outfit_name: bucket.outfit_name().to_string(),
                    reasoning: reasoning.clone(),
                    items: outfit_items,
                    weather_notes: weather_notes.clone(),
                    styling_tips: bucket.styling_tip().to_string(),
                    description,
                }
            })
            .collect();

        Ok(outfits)
    }

    pub fn thresholds(&self) -> &StylingThresholds {
        &self.thresholds
    }
}

/// Runs [`OutfitSelector::select`] with default thresholds.
pub fn select_outfits(
    items: &[WardrobeItem],
    weather: &WeatherObservation,
    count: usize,
) -> Result<Vec<OutfitCandidate>, SelectionError> {
    OutfitSelector::default()
        .select()
        .items(items)
        .weather(weather)
        .count(count)
        .call()
}

fn validate_weather(weather: &WeatherObservation) -> Result<(f64, &str), SelectionError> {
    let temperature_f = weather
        .fahrenheit()
        .ok_or(SelectionError::MalformedWeather(MalformedWeather::MissingTemperature))?;
    let condition = weather.condition.trim();
    if condition.is_empty() {
        return Err(SelectionError::MalformedWeather(MalformedWeather::MissingCondition));
    }
    Ok((temperature_f, condition))
}

// Keys are only inserted with at least one item, so every present list is non-empty.
fn group_by_category(items: &[WardrobeItem]) -> HashMap<&Category, Vec<&WardrobeItem>> {
    let mut groups: HashMap<&Category, Vec<&WardrobeItem>> = HashMap::new();
    for item in items {
        groups.entry(&item.category).or_default().push(item);
    }
    groups
}

fn pick<'a>(
    groups: &HashMap<&Category, Vec<&'a WardrobeItem>>,
    category: &Category,
    index: usize,
) -> Option<&'a WardrobeItem> {
    groups
        .get(category)
        .filter(|items| !items.is_empty())
        .map(|items| items[index % items.len()])
}

fn outfit_item(item: &WardrobeItem, reason: String) -> OutfitItem {
    OutfitItem {
        id: item.id.clone(),
        name: item.name.clone(),
        category: item.category.clone(),
        color: non_blank(&item.color),
        material: non_blank(&item.material),
        reason,
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// `Blue Shirt (top, blue, cotton), Black Jeans (bottom). Perfect for ... . Add a scarf ...`
fn describe(items: &[OutfitItem], reasoning: &str, tip: &str) -> String {
    let clause = items
        .iter()
        .map(|item| {
            let mut details = vec![item.category.as_str()];
            details.extend(item.color.as_deref());
            details.extend(item.material.as_deref());
            format!("{} ({})", item.name, details.join(", "))
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("{clause}. {reasoning}. {tip}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, category: Category) -> WardrobeItem {
        WardrobeItem::builder()
            .id(id)
            .name(name)
            .category(category)
            .build()
    }

    fn basic_wardrobe() -> Vec<WardrobeItem> {
        vec![
            item("t1", "Blue Shirt", Category::Top),
            item("b1", "Black Jeans", Category::Bottom),
            item("s1", "White Sneakers", Category::Shoes),
            item("s2", "Black Boots", Category::Shoes),
        ]
    }

    fn weather(temp_f: f64, condition: &str) -> WeatherObservation {
        WeatherObservation::builder()
            .temp_f(temp_f)
            .condition(condition)
            .build()
    }

    fn names_in(outfits: &[OutfitCandidate], category: Category) -> Vec<String> {
        outfits
            .iter()
            .map(|o| {
                o.items
                    .iter()
                    .find(|i| i.category == category)
                    .map(|i| i.name.clone())
                    .unwrap_or_default()
            })
            .collect()
    }

    #[test]
    fn test_cold_scenario_repeats_shoes_with_period_two() -> Result<(), SelectionError> {
        let outfits = select_outfits(&basic_wardrobe(), &weather(45.0, "Clear"), 3)?;

        assert_eq!(outfits.len(), 3);
        assert_eq!(
            names_in(&outfits, Category::Shoes),
            ["White Sneakers", "Black Boots", "White Sneakers"]
        );
        assert!(outfits.iter().all(|o| o.outfit_name == "Cozy Layers"));
        assert!(outfits.iter().all(|o| o.styling_tips == "Add a scarf or thermal layers"));
        Ok(())
    }

    #[test]
    fn test_hot_scenario() -> Result<(), SelectionError> {
        let outfits = select_outfits(&basic_wardrobe(), &weather(90.0, "Sunny"), 3)?;
        assert!(outfits.iter().all(|o| o.outfit_name == "Cool Comfort"));
        Ok(())
    }

    #[test]
    fn test_missing_shoes_fails_naming_shoes() {
        let items = vec![
            item("t1", "Blue Shirt", Category::Top),
            item("b1", "Black Jeans", Category::Bottom),
        ];
        let err = select_outfits(&items, &weather(70.0, "Clear"), 3).unwrap_err();
        assert_eq!(
            err,
            SelectionError::InsufficientWardrobe {
                missing: vec![Category::Shoes]
            }
        );
        assert_eq!(err.to_string(), "Wardrobe is missing required categories: shoes");
    }

    #[test]
    fn test_missing_categories_listed_in_required_order() {
        let items = vec![item("a1", "Scarf", Category::Accessory)];
        let err = select_outfits(&items, &weather(70.0, "Clear"), 3).unwrap_err();
        assert_eq!(
            err.missing_categories(),
            [Category::Top, Category::Bottom, Category::Shoes]
        );

        let empty = select_outfits(&[], &weather(70.0, "Clear"), 3).unwrap_err();
        assert_eq!(empty.missing_categories().len(), 3);
    }

    #[test]
    fn test_plural_labels_do_not_satisfy_required_categories() {
        let items = vec![
            item("t1", "Blue Shirt", Category::from("tops")),
            item("b1", "Black Jeans", Category::from("bottoms")),
            item("s1", "White Sneakers", Category::Shoes),
        ];
        let err = select_outfits(&items, &weather(70.0, "Clear"), 3).unwrap_err();
        assert_eq!(err.missing_categories(), [Category::Top, Category::Bottom]);
    }

    #[test]
    fn test_deterministic_output() -> Result<(), SelectionError> {
        let items = basic_wardrobe();
        let obs = weather(64.0, "Overcast");
        let first = select_outfits(&items, &obs, 5)?;
        let second = select_outfits(&items, &obs, 5)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_round_robin_uses_distinct_items_in_input_order() -> Result<(), SelectionError> {
        let mut items = basic_wardrobe();
        items.extend([
            item("t2", "Grey Hoodie", Category::Top),
            item("t3", "Linen Shirt", Category::Top),
            item("t4", "Polo", Category::Top),
        ]);
        let outfits = select_outfits(&items, &weather(70.0, "Clear"), 3)?;
        assert_eq!(
            names_in(&outfits, Category::Top),
            ["Blue Shirt", "Grey Hoodie", "Linen Shirt"]
        );
        Ok(())
    }

    #[test]
    fn test_scarce_category_repeats_with_period_k() -> Result<(), SelectionError> {
        let mut items = basic_wardrobe();
        items.extend([
            item("b2", "Chinos", Category::Bottom),
            item("b3", "Shorts", Category::Bottom),
        ]);
        let outfits = select_outfits(&items, &weather(70.0, "Clear"), 7)?;
        assert_eq!(
            names_in(&outfits, Category::Bottom),
            ["Black Jeans", "Chinos", "Shorts", "Black Jeans", "Chinos", "Shorts", "Black Jeans"]
        );
        Ok(())
    }

    #[test]
    fn test_optional_categories_included_only_when_present() -> Result<(), SelectionError> {
        let without = select_outfits(&basic_wardrobe(), &weather(70.0, "Clear"), 2)?;
        assert!(without.iter().all(|o| o.items.len() == 3));

        let mut items = basic_wardrobe();
        items.push(item("o1", "Trench Coat", Category::Outerwear));
        let with_outerwear = select_outfits(&items, &weather(70.0, "Clear"), 2)?;
        for outfit in &with_outerwear {
            let categories: Vec<&Category> = outfit.items.iter().map(|i| &i.category).collect();
            assert_eq!(
                categories,
                [&Category::Top, &Category::Bottom, &Category::Shoes, &Category::Outerwear]
            );
            assert_eq!(outfit.items[3].reason, "Stylish outerwear to complete the look");
        }

        items.push(item("a1", "Wool Scarf", Category::Accessory));
        let full = select_outfits(&items, &weather(70.0, "Clear"), 1)?;
        assert_eq!(full[0].items.len(), 5);
        assert_eq!(full[0].items[4].name, "Wool Scarf");
        Ok(())
    }

    #[test]
    fn test_optional_categories_do_not_shift_required_selection() -> Result<(), SelectionError> {
        let plain = select_outfits(&basic_wardrobe(), &weather(70.0, "Clear"), 3)?;

        let mut enriched_items = basic_wardrobe();
        enriched_items.insert(0, item("a1", "Cap", Category::Accessory));
        enriched_items.push(item("o1", "Parka", Category::Outerwear));
        let enriched = select_outfits(&enriched_items, &weather(70.0, "Clear"), 3)?;

        for (a, b) in plain.iter().zip(&enriched) {
            assert_eq!(a.items[..3], b.items[..3]);
        }
        Ok(())
    }

    #[test]
    fn test_rain_precedence() -> Result<(), SelectionError> {
        let cold_rain = select_outfits(&basic_wardrobe(), &weather(50.0, "light rain"), 1)?;
        assert_eq!(cold_rain[0].outfit_name, "Cozy Layers");

        let mild_rain = select_outfits(&basic_wardrobe(), &weather(65.0, "Moderate Rain"), 1)?;
        assert_eq!(mild_rain[0].outfit_name, "Rain Ready");
        assert_eq!(mild_rain[0].styling_tips, "Bring a waterproof jacket or umbrella");
        Ok(())
    }

    #[test]
    fn test_description_and_reasoning() -> Result<(), SelectionError> {
        let items = vec![
            WardrobeItem::builder()
                .id("t1")
                .name("Blue Shirt")
                .category(Category::Top)
                .color("blue")
                .material("cotton")
                .build(),
            item("b1", "Black Jeans", Category::Bottom),
            WardrobeItem::builder()
                .id("s1")
                .name("Loafers")
                .category(Category::Shoes)
                .material("leather")
                .build(),
        ];
        let outfits = select_outfits(&items, &weather(72.5, "Partly cloudy"), 1)?;
        let outfit = &outfits[0];

        assert_eq!(outfit.reasoning, "Perfect for 72.5°F weather with Partly cloudy");
        assert_eq!(outfit.weather_notes, "Temperature: 72.5°F, Conditions: Partly cloudy");
        assert_eq!(
            outfit.description,
            "Blue Shirt (top, blue, cotton), Black Jeans (bottom), Loafers (shoes, leather). \
             Perfect for 72.5°F weather with Partly cloudy. Dress appropriately for the weather."
        );
        assert_eq!(outfit.items[0].reason, "Essential top for complete outfit");
        Ok(())
    }

    #[test]
    fn test_celsius_only_observation() -> Result<(), SelectionError> {
        let obs = WeatherObservation::builder()
            .temp_c(30.0)
            .condition("Sunny")
            .build();
        let outfits = select_outfits(&basic_wardrobe(), &obs, 1)?;
        assert_eq!(outfits[0].outfit_name, "Cool Comfort");
        assert!(outfits[0].reasoning.starts_with("Perfect for 86°F"));
        Ok(())
    }

    #[test]
    fn test_malformed_weather_fails_fast() {
        let no_temp = WeatherObservation::builder().condition("Clear").build();
        assert_eq!(
            select_outfits(&basic_wardrobe(), &no_temp, 3),
            Err(SelectionError::MalformedWeather(MalformedWeather::MissingTemperature))
        );

        let blank_condition = weather(70.0, "   ");
        assert_eq!(
            select_outfits(&basic_wardrobe(), &blank_condition, 3),
            Err(SelectionError::MalformedWeather(MalformedWeather::MissingCondition))
        );
    }

    #[test]
    fn test_blank_color_and_material_are_left_out() -> Result<(), SelectionError> {
        let mut items = basic_wardrobe();
        items[0] = WardrobeItem::builder()
            .id("t1")
            .name("Shirt")
            .category(Category::Top)
            .color("")
            .material("  ")
            .build();
        let outfits = select_outfits(&items, &weather(60.08, "Clear"), 1)?;
        let outfit = &outfits[0];

        assert!(outfit.description.starts_with("Shirt (top), Black Jeans (bottom), "));
        assert_eq!(outfit.items[0].color, None);
        assert_eq!(outfit.items[0].material, None);
        Ok(())
    }

    #[test]
    fn test_padded_color_is_trimmed() -> Result<(), SelectionError> {
        let mut items = basic_wardrobe();
        items[0] = WardrobeItem::builder()
            .id("t1")
            .name("Shirt")
            .category(Category::Top)
            .color(" navy ")
            .build();
        let outfits = select_outfits(&items, &weather(70.0, "Clear"), 1)?;
        assert!(outfits[0].description.starts_with("Shirt (top, navy), "));
        Ok(())
    }

    #[test]
    fn test_malformed_weather_reported_before_missing_categories() {
        let items = vec![item("a1", "Scarf", Category::Accessory)];
        let no_temp = WeatherObservation::builder().condition("Clear").build();
        assert_eq!(
            select_outfits(&items, &no_temp, 3),
            Err(SelectionError::MalformedWeather(MalformedWeather::MissingTemperature))
        );

        // With usable weather the same wardrobe reports every missing category.
        let err = select_outfits(&items, &weather(70.0, "Clear"), 3).unwrap_err();
        assert_eq!(
            err.missing_categories(),
            [Category::Top, Category::Bottom, Category::Shoes]
        );
    }

    #[test]
    fn test_zero_count_still_checks_wardrobe() -> Result<(), SelectionError> {
        assert!(select_outfits(&basic_wardrobe(), &weather(70.0, "Clear"), 0)?.is_empty());
        assert!(select_outfits(&[], &weather(70.0, "Clear"), 0).is_err());
        Ok(())
    }

    #[test]
    fn test_selector_builder_options() -> Result<(), SelectionError> {
        let selector = OutfitSelector::builder()
            .thresholds(StylingThresholds {
                cold_below_f: 70.0,
                hot_above_f: 90.0,
            })
            .default_count(2)
            .build();
        let items = basic_wardrobe();
        let obs = weather(65.0, "Clear");

        let outfits = selector.select().items(&items).weather(&obs).call()?;
        assert_eq!(outfits.len(), 2);
        assert_eq!(outfits[0].outfit_name, "Cozy Layers");

        let more = selector.select().items(&items).weather(&obs).count(4).call()?;
        assert_eq!(more.len(), 4);
        Ok(())
    }
}
