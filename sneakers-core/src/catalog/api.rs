use super::{client::CatalogClient, models::*, source::ListingSource};
use crate::error::FetchError;
use async_trait::async_trait;
use log::{debug, info};

impl CatalogClient {
    /// Download the whole catalog. The endpoint has no server-side paging.
    pub async fn get_catalog(&self) -> Result<Vec<ProductRecord>, FetchError> {
        let response = self.call().await?;
        let body = response.bytes().await?;

        let records = parse_catalog(&body).map_err(|e| {
            info!("Error deserializing catalog: {}", e);
            e
        })?;

        debug!("catalog fetched: {} records", records.len());
        Ok(records)
    }
}

/// A body of `null` or one without a `sneakers` key is an empty catalog.
pub fn parse_catalog(body: &[u8]) -> Result<Vec<ProductRecord>, FetchError> {
    let response: Option<CatalogResponse> = serde_json::from_slice(body)?;
    Ok(response.map(CatalogResponse::into_records).unwrap_or_default())
}

#[async_trait]
impl ListingSource for CatalogClient {
    async fn fetch_catalog(&self) -> Result<Vec<ProductRecord>, FetchError> {
        self.get_catalog().await
    }
}
