//! # Catalog Client
//!
//! Handle to the in-process catalog actor. Implements [`Catalog`] so the cart can
//! use it exactly like the remote catalog.
use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::catalog::{Catalog, CatalogError};
use crate::catalog_actor::CatalogRequest;
use crate::framework::request;
use crate::model::{Product, ProductId, StockRecord};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    /// Adds a product, or replaces its record and stock level.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn upsert(&self, product: Product, stock: u32) -> Result<(), CatalogError> {
        debug!("Sending request");
        request(&self.sender, |respond_to| CatalogRequest::Upsert {
            product,
            stock,
            respond_to,
        })
        .await
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    #[instrument(skip(self))]
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        debug!("Sending request");
        request(&self.sender, |respond_to| CatalogRequest::Product { id, respond_to }).await
    }

    #[instrument(skip(self))]
    async fn stock(&self, id: ProductId) -> Result<StockRecord, CatalogError> {
        debug!("Sending request");
        request(&self.sender, |respond_to| CatalogRequest::Stock { id, respond_to }).await
    }
}
