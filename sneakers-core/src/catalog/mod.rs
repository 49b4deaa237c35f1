pub mod api;
pub mod client;
pub mod models;
pub mod source;

pub use client::CatalogClient;
pub use models::{CatalogResponse, ProductId, ProductRecord};
pub use source::{ListingSource, StaticCatalog, find_product};
