//! Error types for the Cart actor.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::framework::FrameworkError;
use crate::model::ProductId;
use crate::storage::{CodecError, StorageError};

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The requested amount exceeds the available stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    StockExceeded {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// The product is not in the cart.
    #[error("Product not in cart: {0}")]
    ItemNotFound(ProductId),

    /// Product or stock lookup failed.
    #[error("Catalog lookup failed: {0}")]
    Catalog(#[from] CatalogError),

    /// The cart could not be written to (or read from) the durable store.
    #[error("Cart persistence failed: {0}")]
    Storage(#[from] StorageError),

    /// The stored cart could not be encoded or decoded.
    #[error("Cart encoding failed: {0}")]
    Codec(#[from] CodecError),

    /// An error occurred while communicating with the cart actor.
    #[error(transparent)]
    Framework(#[from] FrameworkError),
}

impl CartError {
    pub fn is_stock_exceeded(&self) -> bool {
        matches!(self, CartError::StockExceeded { .. })
    }
}
