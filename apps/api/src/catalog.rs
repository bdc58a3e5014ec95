//! Food catalog access — pluggable, trait-based source of food records.
//!
//! Default: `HttpFoodCatalog`, which fetches the full record list from the
//! external store per request (the catalog is owned elsewhere; this service
//! only reads it). `AppState` holds an `Arc<dyn FoodCatalog>` so tests can
//! swap in a fixed in-memory catalog.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::food::FoodRecord;

#[async_trait]
pub trait FoodCatalog: Send + Sync {
    /// Fetches every food record currently in the store. An empty store is
    /// a valid empty list; transport failures are `AppError::Catalog`.
    async fn fetch_all(&self) -> Result<Vec<FoodRecord>, AppError>;
}

/// HTTP-backed catalog reading JSON food records from the external store.
pub struct HttpFoodCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFoodCatalog {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl FoodCatalog for HttpFoodCatalog {
    async fn fetch_all(&self) -> Result<Vec<FoodRecord>, AppError> {
        let url = format!("{}/foods", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Catalog(format!("Request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Catalog(format!(
                "Catalog returned HTTP {}",
                response.status()
            )));
        }

        response
            .json::<Vec<FoodRecord>>()
            .await
            .map_err(|e| AppError::Catalog(format!("Malformed catalog payload: {e}")))
    }
}
