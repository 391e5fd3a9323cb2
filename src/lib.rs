//! # Cart Store
//!
//! > **A shopping cart kept by an actor, checked against stock, persisted after every change.**
//!
//! The cart is an ordered list of line items, one per product. Three operations
//! change it: add one unit, remove a product, set a product's amount. Every change
//! is validated against the catalog's current stock, written to a durable
//! key-value store, and only then made visible. Failures never leave a partial
//! change behind; each one is returned to the caller and reported once as a
//! user-facing notice.
//!
//! ## Architecture Notes
//!
//! ### 1. One Owner for the Cart
//! The [`CartActor`](cart_actor::CartActor) runs in its own Tokio task and is the only
//! code that mutates the cart. Everyone else holds a [`CartClient`](clients::CartClient)
//! and gets owned snapshots back, so nothing outside the actor can alias its state.
//!
//! ### 2. Collaborators Behind Traits
//! Stock and product lookups go through [`Catalog`](catalog::Catalog), persistence through
//! [`KeyValueStore`](storage::KeyValueStore), notices through [`Notifier`](notify::Notifier).
//! They are injected when the actor starts running, not when it is built.
//!
//! ### 3. Type-Safe Error Handling
//! Every operation returns `Result<_, CartError>`. Stock problems, missing items and
//! collaborator failures are distinct variants; a non-positive amount update is not an
//! error at all and comes back as `Ok(None)`.
//!
//! ### 4. Observability
//! `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - Products, stock records, line items, the cart
//! - [`cart_actor`] - The cart store itself
//! - [`clients`] - Type-safe handles to the actors
//! - [`catalog`] / [`catalog_actor`] - Where stock and product records come from
//! - [`storage`] - Durable key-value store and the cart's stored format
//! - [`notify`] - User-facing notices
//! - [`lifecycle`] - Configuration, wiring, shutdown, tracing
//! - [`framework`] - Request/response plumbing and test doubles
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod cart_actor;
pub mod catalog;
pub mod catalog_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod storage;
