use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::cart_actor::{self, load_cart, CartContext, CartError};
use crate::catalog::{Catalog, HttpCatalog};
use crate::catalog_actor;
use crate::clients::{CartClient, CatalogClient};
use crate::lifecycle::CartConfig;
use crate::notify::Notifier;
use crate::storage::{FileStore, KeyValueStore};

/// The runtime orchestrator for a cart session.
///
/// `CartSystem` is responsible for:
/// - **Rehydration**: Reading the persisted cart before the actor starts
/// - **Dependency Wiring**: Handing the catalog, store and notifier to the cart actor
/// - **Lifecycle Management**: Starting and stopping every actor it spawned
///
/// # Example
///
/// ```ignore
/// let system = CartSystem::from_config(&config, Arc::new(TracingNotifier)).await?;
///
/// system.cart_client.add_product(ProductId(1)).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Client for interacting with the Cart actor
    pub cart_client: CartClient,

    /// Client for the in-process catalog, when the system runs one
    pub catalog_client: Option<CatalogClient>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl CartSystem {
    /// Rehydrates the cart from `context.store` and starts the cart actor.
    ///
    /// # Errors
    ///
    /// Returns error if the stored cart cannot be read or is not a valid cart.
    pub async fn start(context: CartContext, buffer_size: usize) -> Result<Self, CartError> {
        let initial = load_cart(context.store.as_ref(), &context.storage_key).await?;
        let (cart_actor, cart_client) = cart_actor::new(buffer_size, initial);
        let cart_handle = tokio::spawn(cart_actor.run(context));

        Ok(Self {
            cart_client,
            catalog_client: None,
            handles: vec![cart_handle],
        })
    }

    /// Starts an in-process catalog actor and a cart validated against it.
    ///
    /// The catalog starts empty; seed it through [`CartSystem::catalog_client`].
    ///
    /// # Errors
    ///
    /// Returns error if the stored cart cannot be read or is not a valid cart.
    pub async fn start_with_local_catalog(
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
        storage_key: impl Into<String>,
        buffer_size: usize,
    ) -> Result<Self, CartError> {
        let (catalog_actor, catalog_client) = catalog_actor::new(buffer_size);
        let catalog_handle = tokio::spawn(catalog_actor.run());

        let context = CartContext {
            catalog: Arc::new(catalog_client.clone()),
            store,
            notifier,
            storage_key: storage_key.into(),
        };

        // Cart first: it must stop before the catalog it holds a client to
        let mut system = match Self::start(context, buffer_size).await {
            Ok(system) => system,
            Err(e) => {
                drop(catalog_client);
                let _ = catalog_handle.await;
                return Err(e);
            }
        };
        system.catalog_client = Some(catalog_client);
        system.handles.push(catalog_handle);
        Ok(system)
    }

    /// Builds the system described by `config`: a [`FileStore`] at the configured path,
    /// and the remote catalog if one is configured, the in-process catalog otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the catalog client cannot be built or the stored cart cannot be loaded.
    pub async fn from_config(
        config: &CartConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, CartError> {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.storage_path));
        info!(
            path = %config.storage_path.display(),
            remote_catalog = config.catalog.is_some(),
            "Starting cart system"
        );

        match &config.catalog {
            Some(catalog_config) => {
                let catalog: Arc<dyn Catalog> = Arc::new(HttpCatalog::new(catalog_config)?);
                let context = CartContext {
                    catalog,
                    store,
                    notifier,
                    storage_key: config.storage_key.clone(),
                };
                Self::start(context, config.channel_capacity).await
            }
            None => {
                Self::start_with_local_catalog(
                    store,
                    notifier,
                    config.storage_key.clone(),
                    config.channel_capacity,
                )
                .await
            }
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops the clients held here, which closes the mailboxes, then waits for each
    /// actor to drain and exit. Clones of [`CartClient`] held elsewhere keep the cart
    /// actor alive; drop them first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart system...");

        drop(self.cart_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}
