//! HTTP client for the inventory backend.
//!
//! Every page view fetches fresh; nothing is cached here. Callers treat any
//! error as "no data" and degrade, so the error type only distinguishes what
//! the logs need: transport trouble vs. an unexpected status.

use reqwest::StatusCode;
use thiserror::Error;

use crate::inventory::model::{InventoryPayload, Listing};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {0}")]
    Status(StatusCode),
}

#[derive(Debug, Clone)]
pub struct InventoryClient {
    http: reqwest::Client,
    base: String,
}

impl InventoryClient {
    pub fn new(base: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base)
    }

    pub fn with_client(http: reqwest::Client, base: &str) -> Self {
        Self {
            http,
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch up to `limit` listings from the backend.
    pub async fn inventory(&self, limit: u32) -> Result<Vec<Listing>, FetchError> {
        let resp = self
            .http
            .get(format!("{}/scan/cars-db", self.base))
            .query(&[("limit", limit)])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status()));
        }
        let payload: InventoryPayload = resp.json().await?;
        Ok(payload.into_items())
    }

    /// Fetch one listing by its source URL. A backend 404 is an ordinary
    /// absence, not an error.
    pub async fn detail(&self, listing_url: &str) -> Result<Option<Listing>, FetchError> {
        let resp = self
            .http
            .get(format!("{}/scan/detail", self.base))
            .query(&[("url", listing_url)])
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status()));
        }
        Ok(Some(resp.json().await?))
    }

    /// Whether the backend currently answers at all.
    pub async fn probe(&self) -> bool {
        self.inventory(1).await.is_ok()
    }

    /// Link to the sticker generator for a listing. Only constructed here;
    /// the response is whatever the service returns.
    pub fn sticker_url(&self, listing_url: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(listing_url.as_bytes()).collect();
        format!("{}/stickers/generate?url={}", self.base, encoded)
    }
}
