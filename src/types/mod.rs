pub mod category;
pub mod outfit;
pub mod styling_bucket;
pub mod wardrobe_item;
pub mod weather_observation;
