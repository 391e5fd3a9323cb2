use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::CatalogRequest;
use crate::catalog::CatalogError;
use crate::clients::CatalogClient;
use crate::framework::respond;
use crate::model::{Product, ProductId, StockRecord};

#[derive(Debug, Clone)]
struct CatalogEntry {
    product: Product,
    stock: u32,
}

/// The actor that owns the in-process product table.
///
/// Processes its mailbox sequentially, so the table needs no lock.
pub struct CatalogActor {
    receiver: mpsc::Receiver<CatalogRequest>,
    entries: HashMap<ProductId, CatalogEntry>,
}

impl CatalogActor {
    /// Creates a new `CatalogActor` and its associated `CatalogClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            entries: HashMap::new(),
        };
        (actor, CatalogClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        info!(actor = "catalog", "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::Product { id, respond_to } => {
                    let result = self.lookup(id).map(|entry| entry.product.clone());
                    debug!(actor = "catalog", %id, found = result.is_ok(), "Product");
                    respond(respond_to, result);
                }
                CatalogRequest::Stock { id, respond_to } => {
                    let result = self
                        .lookup(id)
                        .map(|entry| StockRecord::new(id, entry.stock));
                    debug!(actor = "catalog", %id, found = result.is_ok(), "Stock");
                    respond(respond_to, result);
                }
                CatalogRequest::Upsert {
                    product,
                    stock,
                    respond_to,
                } => {
                    let id = product.id;
                    self.entries.insert(id, CatalogEntry { product, stock });
                    info!(actor = "catalog", %id, stock, size = self.entries.len(), "Upserted");
                    respond(respond_to, Ok(()));
                }
            }
        }

        info!(actor = "catalog", size = self.entries.len(), "Shutdown");
    }

    fn lookup(&self, id: ProductId) -> Result<&CatalogEntry, CatalogError> {
        self.entries.get(&id).ok_or_else(|| {
            warn!(actor = "catalog", %id, "Not found");
            CatalogError::NotFound(id)
        })
    }
}
