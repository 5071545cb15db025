//! Suggests outfits from a small sample wardrobe for the current weather.
//!
//! Run with `WEATHER_API_KEY=... cargo run --example suggest_outfits --features demos -- Amsterdam`.
//! Set `GEMINI_API_KEY` as well to render previews with the image models.

use weather_wardrobe::{
    Category, ImageGenerator, MemoryStore, WardrobeError, WardrobeItem, WeatherClient,
    WeatherWardrobe,
};

const USER: &str = "demo-user";

fn sample_wardrobe() -> Vec<WardrobeItem> {
    let item = |id: &str, name: &str, category: Category, color: &str| {
        WardrobeItem::builder()
            .id(id)
            .user_id(USER)
            .name(name)
            .category(category)
            .color(color)
            .build()
    };
    vec![
        item("t1", "Oxford Shirt", Category::Top, "white"),
        item("t2", "Merino Sweater", Category::Top, "navy"),
        item("b1", "Chinos", Category::Bottom, "beige"),
        item("b2", "Dark Jeans", Category::Bottom, "indigo"),
        item("s1", "Leather Boots", Category::Shoes, "brown"),
        item("o1", "Trench Coat", Category::Outerwear, "camel"),
        item("a1", "Wool Scarf", Category::Accessory, "grey"),
    ]
}

#[tokio::main]
async fn main() -> Result<(), WardrobeError> {
    env_logger::init();

    let location = std::env::args().nth(1).unwrap_or_else(|| "London".to_string());
    let weather_key = std::env::var("WEATHER_API_KEY").unwrap_or_default();

    let wardrobe = WeatherWardrobe::builder()
        .weather(WeatherClient::new(weather_key))
        .store(MemoryStore::with_items(sample_wardrobe()))
        .images(
            ImageGenerator::builder()
                .maybe_api_key(std::env::var("GEMINI_API_KEY").ok())
                .build(),
        )
        .build();

    let suggestion = wardrobe
        .suggest_outfits()
        .user_id(USER)
        .location(&location)
        .call()
        .await?;

    println!(
        "{}, {}: {:?}°F, {}",
        suggestion.location.city(),
        suggestion.location.country(),
        suggestion.weather.fahrenheit(),
        suggestion.weather.condition
    );

    let previews = wardrobe.render_previews(&suggestion.outfits).await;
    for (outfit, preview) in suggestion.outfits.iter().zip(&previews) {
        println!("\n{}", outfit.outfit_name);
        for item in &outfit.items {
            println!("  - {} ({}): {}", item.name, item.category, item.reason);
        }
        println!("  {}", outfit.styling_tips);
        let shown = if preview.url.len() > 80 {
            &preview.url[..80]
        } else {
            preview.url.as_str()
        };
        println!("  preview [{:?}]: {}", preview.source, shown);
    }

    Ok(())
}
