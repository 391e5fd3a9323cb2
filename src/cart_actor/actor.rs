use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use super::{CartError, CartRequest};
use crate::catalog::Catalog;
use crate::clients::CartClient;
use crate::framework::respond;
use crate::model::{AmountUpdate, Cart, CartLineItem, ProductId};
use crate::notify::{CartNotice, Notifier};
use crate::storage::{encode_cart, KeyValueStore};

/// Collaborators injected into the cart actor when it starts running.
///
/// # Context Injection
/// The actor is constructed from the rehydrated cart alone; its collaborators are
/// handed to [`CartActor::run`]. Tests swap any of them for doubles.
#[derive(Clone)]
pub struct CartContext {
    pub catalog: Arc<dyn Catalog>,
    pub store: Arc<dyn KeyValueStore>,
    pub notifier: Arc<dyn Notifier>,
    /// Key the encoded cart is written under.
    pub storage_key: String,
}

/// The actor that owns the cart.
///
/// # Concurrency Model
/// Requests are processed one at a time, and each one runs to completion
/// (lookups, persistence, publish) before the next is read. Two `add_product`
/// calls for the same product from different tasks therefore compound instead of
/// overwriting each other.
///
/// # Write Ordering
/// A mutation is applied to a copy of the cart. The copy is persisted first and
/// only then becomes the actor's state and is published to subscribers. If any
/// step fails, neither the store nor the in-memory cart changes.
pub struct CartActor {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
    publisher: watch::Sender<Cart>,
}

impl CartActor {
    /// Creates a new `CartActor` holding `initial`, and its associated `CartClient`.
    pub fn new(buffer_size: usize, initial: Cart) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, state) = watch::channel(initial.clone());
        let actor = Self {
            receiver,
            cart: initial,
            publisher,
        };
        (actor, CartClient::new(sender, state))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self, context: CartContext) {
        info!(actor = "cart", size = self.cart.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddProduct {
                    product_id,
                    respond_to,
                } => {
                    debug!(actor = "cart", %product_id, "AddProduct");
                    let result = self.add_product(product_id, &context).await;
                    match &result {
                        Ok(item) => {
                            info!(actor = "cart", %product_id, amount = item.amount, "Added")
                        }
                        Err(e) => {
                            warn!(actor = "cart", %product_id, error = %e, "Add failed");
                            let notice = if e.is_stock_exceeded() {
                                CartNotice::InsufficientStockOnAdd
                            } else {
                                CartNotice::AddFailed
                            };
                            context.notifier.notify(notice);
                        }
                    }
                    respond(respond_to, result);
                }
                CartRequest::RemoveProduct {
                    product_id,
                    respond_to,
                } => {
                    debug!(actor = "cart", %product_id, "RemoveProduct");
                    let result = self.remove_product(product_id, &context).await;
                    match &result {
                        Ok(()) => info!(actor = "cart", %product_id, size = self.cart.len(), "Removed"),
                        Err(e) => {
                            warn!(actor = "cart", %product_id, error = %e, "Remove failed");
                            context.notifier.notify(CartNotice::RemoveFailed);
                        }
                    }
                    respond(respond_to, result);
                }
                CartRequest::UpdateAmount { update, respond_to } => {
                    debug!(actor = "cart", ?update, "UpdateAmount");
                    let product_id = update.product_id;
                    let result = self.update_product_amount(update, &context).await;
                    match &result {
                        Ok(Some(item)) => {
                            info!(actor = "cart", %product_id, amount = item.amount, "Updated")
                        }
                        Ok(None) => debug!(actor = "cart", %product_id, "Update ignored"),
                        Err(e) => {
                            warn!(actor = "cart", %product_id, error = %e, "Update failed");
                            let notice = if e.is_stock_exceeded() {
                                CartNotice::InsufficientStockOnUpdate
                            } else {
                                CartNotice::UpdateFailed
                            };
                            context.notifier.notify(notice);
                        }
                    }
                    respond(respond_to, result);
                }
                CartRequest::Get { respond_to } => {
                    debug!(actor = "cart", size = self.cart.len(), "Get");
                    respond(respond_to, Ok(self.cart.clone()));
                }
            }
        }

        info!(actor = "cart", size = self.cart.len(), "Shutdown");
    }

    async fn add_product(
        &mut self,
        product_id: ProductId,
        ctx: &CartContext,
    ) -> Result<CartLineItem, CartError> {
        let current = self.cart.get(product_id).map_or(0, |item| item.amount);
        let requested = current.saturating_add(1);

        let stock = ctx.catalog.stock(product_id).await?;
        if requested > stock.amount {
            return Err(CartError::StockExceeded {
                product_id,
                requested,
                available: stock.amount,
            });
        }

        let mut updated = self.cart.clone();
        let item = match updated.get_mut(product_id) {
            Some(item) => {
                item.amount = requested;
                item.clone()
            }
            None => {
                let product = ctx.catalog.product(product_id).await?;
                let item = CartLineItem::new(product, requested);
                updated.push(item.clone());
                item
            }
        };

        self.commit(updated, ctx).await?;
        Ok(item)
    }

    async fn remove_product(
        &mut self,
        product_id: ProductId,
        ctx: &CartContext,
    ) -> Result<(), CartError> {
        let mut updated = self.cart.clone();
        if updated.remove(product_id).is_none() {
            return Err(CartError::ItemNotFound(product_id));
        }
        self.commit(updated, ctx).await
    }

    /// Sets an absolute amount. `Ok(None)` means the request was ignored: the
    /// amount was not positive, or the product is not in the cart.
    async fn update_product_amount(
        &mut self,
        update: AmountUpdate,
        ctx: &CartContext,
    ) -> Result<Option<CartLineItem>, CartError> {
        if update.amount <= 0 {
            return Ok(None);
        }
        let product_id = update.product_id;
        let requested = u32::try_from(update.amount).unwrap_or(u32::MAX);

        let stock = ctx.catalog.stock(product_id).await?;
        if requested > stock.amount {
            return Err(CartError::StockExceeded {
                product_id,
                requested,
                available: stock.amount,
            });
        }

        let mut updated = self.cart.clone();
        let Some(item) = updated.get_mut(product_id) else {
            return Ok(None);
        };
        item.amount = requested;
        let item = item.clone();

        self.commit(updated, ctx).await?;
        Ok(Some(item))
    }

    /// Persists `updated`, then makes it the current cart.
    async fn commit(&mut self, updated: Cart, ctx: &CartContext) -> Result<(), CartError> {
        let encoded = encode_cart(&updated)?;
        ctx.store.set(&ctx.storage_key, encoded).await?;
        self.cart = updated;
        self.publisher.send_replace(self.cart.clone());
        Ok(())
    }
}
