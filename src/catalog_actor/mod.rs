//! # Catalog Actor
//!
//! An in-process product catalog with stock levels, served by its own Tokio task.
//!
//! ## Overview
//!
//! The cart never talks to this actor directly: it sees a [`Catalog`](crate::catalog::Catalog),
//! and [`CatalogClient`] is one implementation of it. The actor stands in for the remote
//! catalog when none is configured (demo binary, integration tests).
//!
//! ## Structure
//!
//! - [`messages`] - [`CatalogRequest`] handled by the actor loop
//! - [`actor`] - [`CatalogActor`], the owner of the product table
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use cart_store::catalog::Catalog;
//! use cart_store::catalog_actor;
//! use cart_store::model::{Product, ProductId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = catalog_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     client.upsert(Product::new(1, "Tênis de Caminhada", 179.9, "1.jpg"), 3).await?;
//!     assert_eq!(client.stock(ProductId(1)).await?.amount, 3);
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod messages;

pub use actor::*;
pub use messages::*;

use crate::clients::CatalogClient;

/// Creates a new Catalog actor and its client.
pub fn new(buffer_size: usize) -> (CatalogActor, CatalogClient) {
    CatalogActor::new(buffer_size)
}
