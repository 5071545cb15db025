use crate::store::error::StoreError;
use crate::store::WardrobeStore;
use crate::types::category::{Category, WeatherSuitability};
use crate::types::outfit::{NewOutfit, Outfit};
use crate::types::wardrobe_item::{NewWardrobeItem, WardrobeItem};
use async_trait::async_trait;
use log::{info, warn};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

const ITEMS_TABLE: &str = "wardrobe_items";
const OUTFITS_TABLE: &str = "outfits";

type QueryParams = Vec<(&'static str, String)>;

/// A [`WardrobeStore`] backed by a Supabase project, using its PostgREST API.
///
/// Requests carry the project's anon key. Row-level security policies usually
/// require the signed-in user's JWT as well; set it with
/// [`SupabaseStore::with_access_token`].
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    http: Client,
    rest_url: String,
    api_key: String,
    access_token: Option<String>,
}

impl SupabaseStore {
    /// `project_url` is the project root, e.g. `https://xyzcompany.supabase.co`.
    pub fn new(project_url: impl AsRef<str>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            rest_url: format!("{}/rest/v1", project_url.as_ref().trim_end_matches('/')),
            api_key: api_key.into(),
            access_token: None,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    fn table_url(&self, table: &str, params: &QueryParams) -> Result<Url, StoreError> {
        let base = format!("{}/{}", self.rest_url, table);
        Url::parse_with_params(&base, params).map_err(|_| StoreError::InvalidUrl(base))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.api_key);
        request
            .header("apikey", &self.api_key)
            .bearer_auth(bearer)
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &'static str,
        params: QueryParams,
    ) -> Result<Vec<T>, StoreError> {
        let url = self.table_url(table, &params)?;
        let endpoint = url.to_string();
        let response = self
            .authorize(self.http.get(url))
            .send()
            .await
            .map_err(|e| StoreError::NetworkRequest(endpoint.clone(), e))?;
        let rows: Vec<T> = Self::parse_rows(table, &endpoint, response).await?;
        info!("Fetched {} rows from {}", rows.len(), table);
        Ok(rows)
    }

    async fn insert<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        table: &'static str,
        body: &B,
    ) -> Result<T, StoreError> {
        let url = self.table_url(table, &Vec::new())?;
        let endpoint = url.to_string();
        let response = self
            .authorize(self.http.post(url))
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await
            .map_err(|e| StoreError::NetworkRequest(endpoint.clone(), e))?;
        let rows: Vec<T> = Self::parse_rows(table, &endpoint, response).await?;
        rows.into_iter()
            .next()
            .ok_or(StoreError::EmptyInsert { table })
    }

    async fn delete(&self, table: &'static str, id: &str) -> Result<(), StoreError> {
        let url = self.table_url(table, &vec![("id", format!("eq.{id}"))])?;
        let endpoint = url.to_string();
        let response = self
            .authorize(self.http.delete(url))
            .send()
            .await
            .map_err(|e| StoreError::NetworkRequest(endpoint.clone(), e))?;
        Self::check_status(&endpoint, response)?;
        info!("Deleted {} from {}", id, table);
        Ok(())
    }

    fn check_status(endpoint: &str, response: Response) -> Result<Response, StoreError> {
        response.error_for_status().map_err(|e| {
            warn!("HTTP error for {}: {:?}", endpoint, e.status());
            match e.status() {
                Some(status) => StoreError::HttpStatus {
                    url: endpoint.to_string(),
                    status,
                    source: e,
                },
                None => StoreError::NetworkRequest(endpoint.to_string(), e),
            }
        })
    }

    async fn parse_rows<T: DeserializeOwned>(
        table: &'static str,
        endpoint: &str,
        response: Response,
    ) -> Result<Vec<T>, StoreError> {
        let response = Self::check_status(endpoint, response)?;
        let body = response
            .bytes()
            .await
            .map_err(|e| StoreError::NetworkRequest(endpoint.to_string(), e))?;
        serde_json::from_slice(&body).map_err(|source| StoreError::JsonParse {
            table,
            url: endpoint.to_string(),
            source,
        })
    }
}

fn user_rows(user_id: &str) -> QueryParams {
    vec![("select", "*".to_string()), ("user_id", format!("eq.{user_id}"))]
}

fn newest_first(mut params: QueryParams) -> QueryParams {
    params.push(("order", "created_at.desc".to_string()));
    params
}

fn weather_filter(user_id: &str, temperature: f64, condition: WeatherSuitability) -> QueryParams {
    let mut params = user_rows(user_id);
    params.push(("min_temp", format!("lte.{temperature}")));
    params.push(("max_temp", format!("gte.{temperature}")));
    params.push((
        "or",
        format!(
            "(weather_condition.eq.{},weather_condition.eq.all)",
            condition.as_str()
        ),
    ));
    newest_first(params)
}

#[async_trait]
impl WardrobeStore for SupabaseStore {
    async fn add_item(&self, item: NewWardrobeItem) -> Result<WardrobeItem, StoreError> {
        info!("Adding wardrobe item '{}' for user {}", item.name, item.user_id);
        self.insert(ITEMS_TABLE, &item).await
    }

    async fn get_items(&self, user_id: &str) -> Result<Vec<WardrobeItem>, StoreError> {
        self.select(ITEMS_TABLE, newest_first(user_rows(user_id))).await
    }

    async fn get_items_by_category(
        &self,
        user_id: &str,
        category: &Category,
    ) -> Result<Vec<WardrobeItem>, StoreError> {
        let mut params = user_rows(user_id);
        params.push(("category", format!("eq.{category}")));
        self.select(ITEMS_TABLE, newest_first(params)).await
    }

    async fn get_items_for_weather(
        &self,
        user_id: &str,
        temperature: f64,
        condition: WeatherSuitability,
    ) -> Result<Vec<WardrobeItem>, StoreError> {
        self.select(ITEMS_TABLE, weather_filter(user_id, temperature, condition))
            .await
    }

    async fn delete_item(&self, item_id: &str) -> Result<(), StoreError> {
        self.delete(ITEMS_TABLE, item_id).await
    }

    async fn add_outfit(&self, outfit: NewOutfit) -> Result<Outfit, StoreError> {
        info!("Adding outfit '{}' for user {}", outfit.name, outfit.user_id);
        self.insert(OUTFITS_TABLE, &outfit).await
    }

    async fn get_outfits(&self, user_id: &str) -> Result<Vec<Outfit>, StoreError> {
        self.select(OUTFITS_TABLE, newest_first(user_rows(user_id))).await
    }

    async fn get_outfits_for_weather(
        &self,
        user_id: &str,
        temperature: f64,
        condition: WeatherSuitability,
    ) -> Result<Vec<Outfit>, StoreError> {
        self.select(OUTFITS_TABLE, weather_filter(user_id, temperature, condition))
            .await
    }

    async fn delete_outfit(&self, outfit_id: &str) -> Result<(), StoreError> {
        self.delete(OUTFITS_TABLE, outfit_id).await
    }
}
