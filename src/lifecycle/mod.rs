//! # Session Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the actors behind a cart session.
//!
//! ## Responsibilities
//!
//! 1. **Configuration** - [`CartConfig::from_env`] decides where the cart is stored and which catalog it checks
//! 2. **Rehydration** - The persisted cart is loaded before the cart actor accepts requests
//! 3. **Dependency Injection** - Catalog, store and notifier are passed to the actor's `run(context)`
//! 4. **Graceful Shutdown** - Dropping the clients closes the mailboxes; [`CartSystem::shutdown`] awaits the tasks
//! 5. **Observability Setup** - [`setup_tracing`] installs the log subscriber
//!
//! ## Shutdown Order
//!
//! The cart actor holds a catalog client in its context. When the in-process catalog
//! is used, the cart actor is awaited first; once it exits, its context (and the
//! catalog client inside) is dropped, and the catalog actor's mailbox closes in turn.

pub mod cart_system;
pub mod config;
pub mod tracing;

pub use cart_system::*;
pub use config::*;
pub use self::tracing::setup_tracing;
