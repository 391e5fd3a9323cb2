//! # Cart Actor
//!
//! This module implements the cart store: an ordered, product-unique list of line
//! items, validated against stock and persisted after every successful change.
//!
//! ## Overview
//!
//! The cart actor owns the only mutable copy of the cart. Clients send it
//! [`CartRequest`]s; it validates each one against the [`Catalog`](crate::catalog::Catalog),
//! writes the new cart through the [`KeyValueStore`], publishes it to subscribers,
//! and answers. Failures are returned to the caller and reported once through the
//! [`Notifier`](crate::notify::Notifier).
//!
//! ## Structure
//!
//! - [`actor`] - [`CartActor`] and its injected [`CartContext`]
//! - [`error`] - [`CartError`] type for type-safe error handling
//! - [`messages`] - [`CartRequest`] handled by the actor loop
//! - [`new()`] - Factory function that creates the actor and client
//! - [`load_cart()`] - Rehydration from the durable store
//!
//! ## Operations
//!
//! | Operation | Absent item | Over stock | Non-positive amount |
//! |-----------|-------------|------------|---------------------|
//! | `add_product` | fetched and appended with amount 1 | `StockExceeded` | n/a |
//! | `remove_product` | `ItemNotFound` | n/a | n/a |
//! | `update_product_amount` | ignored (`Ok(None)`) | `StockExceeded` | ignored (`Ok(None)`) |

pub mod actor;
pub mod error;
pub mod messages;

pub use actor::*;
pub use error::*;
pub use messages::*;

use tracing::info;

use crate::clients::CartClient;
use crate::model::Cart;
use crate::storage::{decode_cart, KeyValueStore};

/// Creates a new Cart actor holding `initial`, and its client.
pub fn new(buffer_size: usize, initial: Cart) -> (CartActor, CartClient) {
    CartActor::new(buffer_size, initial)
}

/// Reads the persisted cart. A missing entry is an empty cart.
///
/// # Errors
///
/// Returns [`CartError::Storage`] if the store cannot be read and
/// [`CartError::Codec`] if the stored value is not a valid cart.
pub async fn load_cart(store: &dyn KeyValueStore, key: &str) -> Result<Cart, CartError> {
    let cart = match store.get(key).await? {
        Some(raw) => decode_cart(&raw)?,
        None => Cart::new(),
    };
    info!(key, size = cart.len(), "Cart rehydrated");
    Ok(cart)
}
