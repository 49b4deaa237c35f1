pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod delay;
pub mod error;
pub mod favorites;
pub mod listing;
pub mod pagination;
pub mod size_guide;
pub mod store_info;

pub use auth::{Authenticator, Credentials, Session, StubAuthenticator};
pub use catalog::{CatalogClient, ListingSource, ProductId, ProductRecord, StaticCatalog};
pub use checkout::{CheckoutSession, OrderSummary, PaymentInstruction, PaymentMethod};
pub use config::StoreConfig;
pub use delay::{DelayOutcome, ScheduledTransition};
pub use error::{AuthError, CheckoutError, FetchError, StoreError};
pub use favorites::Favorites;
pub use listing::{
    ApplyOutcome, ListingController, ListingStatus, ListingViewState, LoadTicket, fetch_page,
};
pub use pagination::{PageRequest, PageResult, Paginator, paginate};
pub use size_guide::{Fit, SizeSystem};

use std::sync::Arc;

/// Main entry point for frontends: one listing source, one fixed page size.
#[derive(Debug, Clone)]
pub struct Storefront {
    config: StoreConfig,
    paginator: Paginator,
}

impl Storefront {
    /// Storefront backed by the configured HTTP endpoint.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let client = CatalogClient::new(&config)?;
        Self::with_source(config, Arc::new(client))
    }

    pub fn with_source(
        config: StoreConfig,
        source: Arc<dyn ListingSource>,
    ) -> Result<Self, StoreError> {
        let paginator = Paginator::new(source, config.page_size)?;
        Ok(Storefront { config, paginator })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// A fresh listing controller for one listing view.
    pub fn listing(&self) -> ListingController {
        ListingController::new(self.paginator.clone())
    }

    /// Fetch page `page_number` (1-based).
    pub async fn get_page(
        &self,
        page_number: usize,
    ) -> Result<PageResult<ProductRecord>, StoreError> {
        let request = PageRequest::new(page_number)?;
        Ok(self.paginator.get_page(request).await?)
    }

    pub async fn find_product(&self, id: &ProductId) -> Result<ProductRecord, StoreError> {
        catalog::find_product(self.paginator.source(), id).await
    }

    pub fn authenticator(&self) -> StubAuthenticator {
        StubAuthenticator::demo()
    }

    pub fn splash_transition(&self) -> ScheduledTransition {
        ScheduledTransition::new(self.config.splash_delay)
    }

    pub fn login_transition(&self) -> ScheduledTransition {
        ScheduledTransition::new(self.config.login_delay)
    }
}
