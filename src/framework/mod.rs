//! Actor plumbing shared by the cart and catalog actors.
//!
//! # Main Components
//!
//! - [`request`] - Typed request/response over an actor mailbox
//! - [`Response`] - One-shot responder carried inside every request
//! - [`FrameworkError`] - Transport errors (actor gone, response dropped)
//!
//! # Testing
//!
//! See [`mock`] for collaborator doubles that let the cart actor run without a real catalog.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
