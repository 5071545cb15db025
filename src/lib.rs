mod config;
mod error;
mod imaging;
mod selector;
mod store;
mod types;
mod wardrobe;
mod weather;

pub use error::WardrobeError;
pub use wardrobe::*;

pub use config::*;

pub use selector::error::{MalformedWeather, SelectionError};
pub use selector::outfit_selector::*;

pub use types::category::*;
pub use types::outfit::*;
pub use types::styling_bucket::*;
pub use types::wardrobe_item::*;
pub use types::weather_observation::WeatherObservation;

pub use weather::client::*;
pub use weather::error::WeatherApiError;
pub use weather::forecast::*;

pub use store::error::StoreError;
pub use store::{MemoryStore, SupabaseStore, WardrobeStore};

pub use imaging::error::ImageError;
pub use imaging::image_generator::*;
pub use imaging::prompt::{outfit_prompt, placeholder_url};
