use crate::store::error::StoreError;
use crate::store::WardrobeStore;
use crate::types::category::{Category, WeatherSuitability};
use crate::types::outfit::{NewOutfit, Outfit};
use crate::types::wardrobe_item::{NewWardrobeItem, WardrobeItem};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A [`WardrobeStore`] kept entirely in memory.
///
/// Useful for tests, demos and offline use. Rows are kept in insertion order;
/// listings sort them newest first, with later inserts first on equal timestamps.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<Vec<WardrobeItem>>,
    outfits: RwLock<Vec<Outfit>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with existing items, e.g. loaded from an export.
    pub fn with_items(items: Vec<WardrobeItem>) -> Self {
        Self {
            items: RwLock::new(items),
            outfits: RwLock::default(),
        }
    }
}

fn newest_first<T: Clone>(
    rows: &[T],
    keep: impl Fn(&T) -> bool,
    created_at: impl Fn(&T) -> DateTime<Utc>,
) -> Vec<T> {
    let mut selected: Vec<T> = rows.iter().rev().filter(|&row| keep(row)).cloned().collect();
    selected.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    selected
}

#[async_trait]
impl WardrobeStore for MemoryStore {
    async fn add_item(&self, item: NewWardrobeItem) -> Result<WardrobeItem, StoreError> {
        let stored = item.into_item(Uuid::new_v4().to_string(), Utc::now());
        debug!("Adding wardrobe item {} ({})", stored.id, stored.name);
        self.items.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn get_items(&self, user_id: &str) -> Result<Vec<WardrobeItem>, StoreError> {
        let items = self.items.read().await;
        Ok(newest_first(items.as_slice(), |i| i.user_id == user_id, |i| i.created_at))
    }

    async fn get_items_by_category(
        &self,
        user_id: &str,
        category: &Category,
    ) -> Result<Vec<WardrobeItem>, StoreError> {
        let items = self.items.read().await;
        Ok(newest_first(
            items.as_slice(),
            |i| i.user_id == user_id && &i.category == category,
            |i| i.created_at,
        ))
    }

    async fn get_items_for_weather(
        &self,
        user_id: &str,
        temperature: f64,
        condition: WeatherSuitability,
    ) -> Result<Vec<WardrobeItem>, StoreError> {
        let items = self.items.read().await;
        Ok(newest_first(
            items.as_slice(),
            |i| i.user_id == user_id && i.suits(temperature, condition),
            |i| i.created_at,
        ))
    }

    async fn delete_item(&self, item_id: &str) -> Result<(), StoreError> {
        self.items.write().await.retain(|i| i.id != item_id);
        Ok(())
    }

    async fn add_outfit(&self, outfit: NewOutfit) -> Result<Outfit, StoreError> {
        let stored = outfit.into_outfit(Uuid::new_v4().to_string(), Utc::now());
        debug!("Adding outfit {} ({})", stored.id, stored.name);
        self.outfits.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn get_outfits(&self, user_id: &str) -> Result<Vec<Outfit>, StoreError> {
        let outfits = self.outfits.read().await;
        Ok(newest_first(outfits.as_slice(), |o| o.user_id == user_id, |o| o.created_at))
    }

    async fn get_outfits_for_weather(
        &self,
        user_id: &str,
        temperature: f64,
        condition: WeatherSuitability,
    ) -> Result<Vec<Outfit>, StoreError> {
        let outfits = self.outfits.read().await;
        Ok(newest_first(
            outfits.as_slice(),
            |o| o.user_id == user_id && o.suits(temperature, condition),
            |o| o.created_at,
        ))
    }

    async fn delete_outfit(&self, outfit_id: &str) -> Result<(), StoreError> {
        self.outfits.write().await.retain(|o| o.id != outfit_id);
        Ok(())
    }
}
