//! # Cart Client
//!
//! Provides the high‑level API the rest of the application uses to drive the cart.
//! It wraps the cart actor's mailbox and exposes one method per operation.
use tokio::sync::{mpsc, watch};
use tracing::{debug, instrument};

use crate::cart_actor::{CartError, CartRequest};
use crate::framework::request;
use crate::model::{AmountUpdate, Cart, CartLineItem, ProductId};

/// Client for interacting with the Cart actor.
///
/// Cheap to clone; every clone talks to the same actor. The actor shuts down once
/// every clone has been dropped.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
    state: watch::Receiver<Cart>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>, state: watch::Receiver<Cart>) -> Self {
        Self { sender, state }
    }

    /// Adds one unit of a product, fetching its record if it is not in the cart yet.
    ///
    /// Returns the line item as stored.
    #[instrument(skip(self))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<CartLineItem, CartError> {
        debug!("Sending request");
        request(&self.sender, |respond_to| CartRequest::AddProduct {
            product_id,
            respond_to,
        })
        .await
    }

    /// Removes a product from the cart. Removing a product that is not there is an error.
    #[instrument(skip(self))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<(), CartError> {
        debug!("Sending request");
        request(&self.sender, |respond_to| CartRequest::RemoveProduct {
            product_id,
            respond_to,
        })
        .await
    }

    /// Sets a product's amount.
    ///
    /// Returns `Ok(None)` when nothing changed because the amount was not positive
    /// or the product is not in the cart.
    #[instrument(skip(self))]
    pub async fn update_product_amount(
        &self,
        update: AmountUpdate,
    ) -> Result<Option<CartLineItem>, CartError> {
        debug!("Sending request");
        request(&self.sender, |respond_to| CartRequest::UpdateAmount {
            update,
            respond_to,
        })
        .await
    }

    /// Current cart, as an owned snapshot.
    #[instrument(skip(self))]
    pub async fn cart(&self) -> Result<Cart, CartError> {
        request(&self.sender, |respond_to| CartRequest::Get { respond_to }).await
    }

    /// Receiver that observes every cart the actor publishes, starting with the current one.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.clone()
    }
}
