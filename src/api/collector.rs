//! Collector Point Backend
//!
//! Item categories and collector point registration.

use gloo_net::http::Request;

use collector_form::{ApiError, CollectorPointPayload, ItemCategory};

use super::{endpoint, ensure_ok, network_error, read_json, request_error};
use crate::config::CONFIG;

#[derive(Clone, Debug)]
pub struct CollectorApi {
    base_url: String,
}

impl CollectorApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn from_config() -> Self {
        Self::new(CONFIG.backend_url.clone())
    }

    pub fn item_types_url(&self) -> String {
        endpoint(&self.base_url, "itemTypes")
    }

    pub fn collector_points_url(&self) -> String {
        endpoint(&self.base_url, "collectorPoints")
    }

    /// `GET /itemTypes`
    pub async fn list_item_types(&self) -> Result<Vec<ItemCategory>, ApiError> {
        let url = self.item_types_url();
        log::debug!("[API] GET {}", url);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        read_json(response).await
    }

    /// `POST /collectorPoints`
    pub async fn create_collector_point(&self, payload: &CollectorPointPayload) -> Result<(), ApiError> {
        let url = self.collector_points_url();
        log::info!("[API] POST {} ({} items)", url, payload.items.len());
        let response = Request::post(&url)
            .json(payload)
            .map_err(request_error)?
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(response).await.map(|_| ())
    }
}
