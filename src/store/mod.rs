//! Persistence of wardrobe items and saved outfits.
//!
//! [`WardrobeStore`] is the seam between outfit logic and the hosted backend.
//! [`MemoryStore`] keeps everything in process; [`SupabaseStore`] talks to a
//! Supabase project over its PostgREST API.

pub mod error;
pub mod memory_store;
pub mod supabase_store;

use crate::store::error::StoreError;
use crate::types::category::{Category, WeatherSuitability};
use crate::types::outfit::{NewOutfit, Outfit};
use crate::types::wardrobe_item::{NewWardrobeItem, WardrobeItem};
use async_trait::async_trait;

pub use memory_store::MemoryStore;
pub use supabase_store::SupabaseStore;

/// CRUD over a user's wardrobe items and outfits.
///
/// All listing methods return rows newest first (`created_at` descending).
/// Weather queries keep rows whose `[min_temp, max_temp]` range contains the
/// temperature and whose weather tag equals the requested one or is `all`.
#[async_trait]
pub trait WardrobeStore: Send + Sync {
    async fn add_item(&self, item: NewWardrobeItem) -> Result<WardrobeItem, StoreError>;

    async fn get_items(&self, user_id: &str) -> Result<Vec<WardrobeItem>, StoreError>;

    async fn get_items_by_category(
        &self,
        user_id: &str,
        category: &Category,
    ) -> Result<Vec<WardrobeItem>, StoreError>;

    async fn get_items_for_weather(
        &self,
        user_id: &str,
        temperature: f64,
        condition: WeatherSuitability,
    ) -> Result<Vec<WardrobeItem>, StoreError>;

    /// Deleting an id that does not exist is not an error.
    async fn delete_item(&self, item_id: &str) -> Result<(), StoreError>;

    async fn add_outfit(&self, outfit: NewOutfit) -> Result<Outfit, StoreError>;

    async fn get_outfits(&self, user_id: &str) -> Result<Vec<Outfit>, StoreError>;

    async fn get_outfits_for_weather(
        &self,
        user_id: &str,
        temperature: f64,
        condition: WeatherSuitability,
    ) -> Result<Vec<Outfit>, StoreError>;

    async fn delete_outfit(&self, outfit_id: &str) -> Result<(), StoreError>;
}
