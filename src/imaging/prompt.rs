//! Text prompts and placeholder images for outfit previews.

use crate::types::outfit::{OutfitCandidate, OutfitItem};

const PLACEHOLDER_BASE: &str = "https://source.unsplash.com/400x300/";

/// Builds the fashion-photography prompt for an outfit.
///
/// With `detailed_items` each item also lists its color and material, which
/// helps models that otherwise invent generic garments.
pub fn outfit_prompt(outfit: &OutfitCandidate, detailed_items: bool) -> String {
    let items = if outfit.items.is_empty() {
        "the specified outfit".to_string()
    } else if detailed_items {
        outfit
            .items
            .iter()
            .map(detailed_item)
            .collect::<Vec<_>>()
            .join("; ")
    } else {
        outfit
            .items
            .iter()
            .map(|item| format!("{} ({})", item.name, item.category))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let weather = if outfit.weather_notes.trim().is_empty() {
        "general weather"
    } else {
        outfit.weather_notes.as_str()
    };

    format!(
        "Generate a high-quality fashion photography image of a person wearing: {description}.\n\
         \n\
         Requirements:\n\
         - Show a person wearing the exact clothing items mentioned, including their color and material if specified: {items}\n\
         - Professional fashion photography style with clean studio lighting\n\
         - White or neutral background\n\
         - High resolution, photorealistic quality\n\
         - No text overlays, watermarks, or logos\n\
         - Full body shot showing the complete outfit\n\
         - Weather-appropriate styling for: {weather}\n\
         - Modern, stylish presentation suitable for a fashion catalog\n\
         \n\
         The image should accurately represent the specific clothing items from the user's wardrobe, not generic fashion items.",
        description = outfit.description,
    )
}

fn detailed_item(item: &OutfitItem) -> String {
    let mut text = format!("{} ({})", item.name, item.category);
    if let Some(color) = &item.color {
        text.push_str(&format!(", color: {color}"));
    }
    if let Some(material) = &item.material {
        text.push_str(&format!(", material: {material}"));
    }
    text
}

/// A stock photo URL matching the general style of the outfit description.
pub fn placeholder_url(description: &str) -> String {
    let description = description.to_lowercase();
    let keywords = if description.contains("casual") {
        "casual+fashion"
    } else if description.contains("formal") {
        "formal+fashion"
    } else if description.contains("sport") {
        "sportswear"
    } else {
        "fashion+outfit"
    };
    format!("{PLACEHOLDER_BASE}?{keywords},clothing,fashion")
}
