use super::models::{ProductId, ProductRecord};
use crate::error::{FetchError, StoreError};
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only provider of the full catalog.
#[async_trait]
pub trait ListingSource: Send + Sync + 'static {
    /// Fetch every record in one call.
    async fn fetch_catalog(&self) -> Result<Vec<ProductRecord>, FetchError>;
}

#[async_trait]
impl<S: ListingSource + ?Sized> ListingSource for Arc<S> {
    async fn fetch_catalog(&self) -> Result<Vec<ProductRecord>, FetchError> {
        (**self).fetch_catalog().await
    }
}

/// Fixed in-memory catalog, for tests and offline demos.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    records: Vec<ProductRecord>,
}

impl StaticCatalog {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        Self { records }
    }

    /// `count` records with ids `1..=count`.
    pub fn numbered(count: usize) -> Self {
        let records = (1..=count)
            .map(|i| ProductRecord {
                id: Some(ProductId::from(i as u64)),
                name: Some(format!("Sneaker {}", i)),
                ..Default::default()
            })
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ListingSource for StaticCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<ProductRecord>, FetchError> {
        Ok(self.records.clone())
    }
}

/// Look a product up by id in a freshly fetched catalog.
pub async fn find_product<S>(source: &S, id: &ProductId) -> Result<ProductRecord, StoreError>
where
    S: ListingSource + ?Sized,
{
    source
        .fetch_catalog()
        .await?
        .into_iter()
        .find(|record| record.id.as_ref() == Some(id))
        .ok_or_else(|| StoreError::NotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_product() {
        let catalog = StaticCatalog::numbered(5);
        let record = find_product(&catalog, &ProductId::new("3")).await.unwrap();
        assert_eq!(record.display_name(), "Sneaker 3");

        let missing = find_product(&catalog, &ProductId::new("42")).await;
        assert!(matches!(missing, Err(StoreError::NotFound(id)) if id == "42"));
    }

    #[tokio::test]
    async fn test_shared_source_delegates() {
        let shared: Arc<dyn ListingSource> = Arc::new(StaticCatalog::numbered(2));
        assert_eq!(shared.fetch_catalog().await.unwrap().len(), 2);
    }
}
