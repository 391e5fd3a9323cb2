use std::sync::Arc;

use cart_store::cart_actor::CartError;
use cart_store::lifecycle::CartSystem;
use cart_store::model::{AmountUpdate, Product, ProductId};
use cart_store::notify::{CartNotice, ChannelNotifier};
use cart_store::storage::{FileStore, KeyValueStore, CART_STORAGE_KEY};
use tempfile::TempDir;
use tokio::sync::mpsc::UnboundedReceiver;

/// Full system: real cart actor, real catalog actor, file-backed store.
///
/// Pattern 1: Full Integration
/// - Everything real, state on disk in a temp directory
/// - Tests rehydration across restarts and concurrent callers
async fn start(dir: &TempDir) -> (CartSystem, UnboundedReceiver<CartNotice>) {
    let store = Arc::new(FileStore::new(dir.path().join("cart.json")));
    let (notifier, notices) = ChannelNotifier::new();
    let system =
        CartSystem::start_with_local_catalog(store, Arc::new(notifier), CART_STORAGE_KEY, 16)
            .await
            .expect("system starts");

    let catalog = system.catalog_client.as_ref().expect("local catalog");
    let stock = [(1, 3), (2, 5), (3, 2), (4, 0)];
    for (id, amount) in stock {
        let product = Product::new(id, format!("Sneaker {id}"), 100.0 + f64::from(id), format!("{id}.jpg"));
        catalog.upsert(product, amount).await.unwrap();
    }

    (system, notices)
}

fn amounts(items: impl IntoIterator<Item = (ProductId, u32)>) -> Vec<(u32, u32)> {
    items.into_iter().map(|(id, amount)| (id.0, amount)).collect()
}

#[tokio::test]
async fn test_cart_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let (system, _notices) = start(&dir).await;
    let client = system.cart_client.clone();
    client.add_product(ProductId(2)).await.unwrap();
    client.add_product(ProductId(1)).await.unwrap();
    client.add_product(ProductId(2)).await.unwrap();
    client
        .update_product_amount(AmountUpdate::new(1, 3))
        .await
        .unwrap();
    let before = client.cart().await.unwrap();
    drop(client);
    system.shutdown().await.unwrap();

    let (system, _notices) = start(&dir).await;
    let after = system.cart_client.cart().await.unwrap();
    assert_eq!(after, before);
    assert_eq!(
        amounts(after.iter().map(|i| (i.id(), i.amount))),
        vec![(2, 2), (1, 3)]
    );
    assert_eq!(after.item_count(), 5);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_repeated_adds_keep_one_line_per_product() {
    let dir = tempfile::tempdir().unwrap();
    let (system, mut notices) = start(&dir).await;
    let client = &system.cart_client;

    for id in [1, 2, 1, 3, 2, 1, 1] {
        let _ = client.add_product(ProductId(id)).await;
    }

    let cart = client.cart().await.unwrap();
    assert_eq!(
        amounts(cart.iter().map(|i| (i.id(), i.amount))),
        vec![(1, 3), (2, 2), (3, 1)]
    );
    // Fourth add of product 1 exceeds its stock of 3
    assert_eq!(notices.try_recv().ok(), Some(CartNotice::InsufficientStockOnAdd));
    assert!(notices.try_recv().is_err());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_adds_compound() {
    let dir = tempfile::tempdir().unwrap();
    let (system, _notices) = start(&dir).await;

    let mut tasks = Vec::new();
    for _ in 0..5 {
        let client = system.cart_client.clone();
        tasks.push(tokio::spawn(async move {
            client.add_product(ProductId(2)).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let cart = system.cart_client.cart().await.unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get(ProductId(2)).map(|i| i.amount), Some(5));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_and_out_of_stock_products() {
    let dir = tempfile::tempdir().unwrap();
    let (system, mut notices) = start(&dir).await;
    let client = &system.cart_client;

    let unknown = client.add_product(ProductId(99)).await;
    assert!(matches!(unknown, Err(CartError::Catalog(_))));
    assert_eq!(notices.try_recv().ok(), Some(CartNotice::AddFailed));

    let sold_out = client.add_product(ProductId(4)).await;
    assert!(sold_out.unwrap_err().is_stock_exceeded());
    assert_eq!(notices.try_recv().ok(), Some(CartNotice::InsufficientStockOnAdd));

    assert!(client.cart().await.unwrap().is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_remove_then_readd_moves_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let (system, _notices) = start(&dir).await;
    let client = &system.cart_client;

    for id in [1, 2, 3] {
        client.add_product(ProductId(id)).await.unwrap();
    }
    client.remove_product(ProductId(1)).await.unwrap();
    client.add_product(ProductId(1)).await.unwrap();

    let cart = client.cart().await.unwrap();
    assert_eq!(
        amounts(cart.iter().map(|i| (i.id(), i.amount))),
        vec![(2, 1), (3, 1), (1, 1)]
    );
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_malformed_file_prevents_start() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("cart.json"));
    store
        .set(CART_STORAGE_KEY, "not a cart".to_string())
        .await
        .unwrap();

    let (notifier, _notices) = ChannelNotifier::new();
    let result = CartSystem::start_with_local_catalog(
        Arc::new(store),
        Arc::new(notifier),
        CART_STORAGE_KEY,
        16,
    )
    .await;
    assert!(matches!(result, Err(CartError::Codec(_))));
}
