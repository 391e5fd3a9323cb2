//! # Catalog Collaborator
//!
//! Product and stock lookups the cart validates against. The cart only sees the
//! [`Catalog`] trait; the concrete source is chosen when the system is wired.
//!
//! ## Implementations
//!
//! - [`HttpCatalog`] - The remote catalog API (`/products/{id}`, `/stock/{id}`)
//! - [`CatalogClient`](crate::clients::CatalogClient) - The in-process catalog actor
//! - [`MockCatalog`](crate::framework::mock::MockCatalog) - Expectation-driven double for tests

pub mod http;

pub use http::HttpCatalog;

use async_trait::async_trait;
use thiserror::Error;

use crate::framework::FrameworkError;
use crate::model::{Product, ProductId, StockRecord};

/// Errors that can occur while looking up products or stock.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog has no record for this product.
    #[error("Product not found in catalog: {0}")]
    NotFound(ProductId),

    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("Catalog API error: {status}")]
    Status { status: u16 },

    /// The catalog answered with a body we could not read.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The catalog base URL is not usable.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The in-process catalog actor is gone.
    #[error(transparent)]
    Framework(#[from] FrameworkError),
}

/// Source of product records and stock levels.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetches the full product record.
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Fetches the current stock level. Never cached by the caller.
    async fn stock(&self, id: ProductId) -> Result<StockRecord, CatalogError>;
}
