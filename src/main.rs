//! # Cart Store Demo
//!
//! Starts a cart session from the environment (see [`CartConfig`]), runs a short
//! shopping script against it, and shuts down. Run it twice: the second run starts
//! from the cart the first one persisted.

use std::sync::Arc;

use cart_store::lifecycle::{setup_tracing, CartConfig, CartSystem};
use cart_store::model::{AmountUpdate, Product, ProductId};
use cart_store::notify::{ChannelNotifier, Notifier, TracingNotifier};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = CartConfig::from_env().map_err(|e| e.to_string())?;
    let (notifier, mut notices) = ChannelNotifier::new();

    // Stand-in for the toast layer
    let toasts = tokio::spawn(async move {
        while let Some(notice) = notices.recv().await {
            TracingNotifier.notify(notice);
        }
    });

    let system = CartSystem::from_config(&config, Arc::new(notifier))
        .await
        .map_err(|e| e.to_string())?;

    if let Some(catalog) = &system.catalog_client {
        let products = [
            (Product::new(1, "Tênis de Caminhada Leve Confortável", 179.9, "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis1.jpg"), 3),
            (Product::new(2, "Tênis VR Caminhada Confortável Detalhes Couro Masculino", 139.9, "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis2.jpg"), 5),
            (Product::new(3, "Tênis Adidas Duramo Lite 2.0", 219.9, "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis3.jpg"), 2),
        ];
        for (product, stock) in products {
            catalog.upsert(product, stock).await.map_err(|e| e.to_string())?;
        }
    }

    let cart = system.cart_client.clone();
    let span = tracing::info_span!("shopping");
    async {
        let before = cart.cart().await.map_err(|e| e.to_string())?;
        info!(items = before.len(), total = before.total(), "Cart at start");

        for id in [1, 1, 2, 3, 3, 3] {
            if let Err(e) = cart.add_product(ProductId(id)).await {
                warn!(error = %e, "Add rejected");
            }
        }
        if let Err(e) = cart.update_product_amount(AmountUpdate::new(2, 4)).await {
            warn!(error = %e, "Update rejected");
        }
        match cart.update_product_amount(AmountUpdate::new(2, 0)).await {
            Ok(Some(item)) => info!(product_id = %item.id(), amount = item.amount, "Update applied"),
            Ok(None) => info!(product_id = 2, "Update ignored"),
            Err(e) => warn!(error = %e, "Update rejected"),
        }
        if let Err(e) = cart.remove_product(ProductId(3)).await {
            warn!(error = %e, "Remove rejected");
        }

        let after = cart.cart().await.map_err(|e| e.to_string())?;
        for item in &after {
            info!(
                product_id = %item.id(),
                title = %item.product.title,
                amount = item.amount,
                subtotal = item.subtotal(),
                "Line item"
            );
        }
        info!(items = after.len(), units = after.item_count(), total = after.total(), "Cart at end");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    drop(cart);
    system.shutdown().await?;
    let _ = toasts.await;

    info!("Session completed successfully");
    Ok(())
}
