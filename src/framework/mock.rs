//! # Mock Collaborators
//!
//! Doubles for the cart's collaborators, so the real cart actor can be tested
//! without a catalog service or a disk.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | Mocks | Real catalog actor / file store |
//! |---------|-------|---------------------------------|
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **Error Injection** | Easy (`return_err`, `fail_writes`) | Hard (requires specific state) |
//! | **Call assertions** | `verify()`, `writes()` | None |
//!
//! ## Example
//!
//! ```rust
//! use cart_store::catalog::Catalog;
//! use cart_store::framework::mock::MockCatalog;
//! use cart_store::model::ProductId;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut catalog = MockCatalog::new();
//!     catalog.expect_stock(ProductId(1)).return_ok(3);
//!
//!     let stock = catalog.stock(ProductId(1)).await.unwrap();
//!     assert_eq!(stock.amount, 3);
//!
//!     catalog.verify(); // Ensures all expectations were met
//! }
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::catalog::{Catalog, CatalogError};
use crate::model::{Product, ProductId, StockRecord};
use crate::storage::{KeyValueStore, MemoryStore, StorageError};

// =============================================================================
// CATALOG EXPECTATIONS
// =============================================================================

/// Represents an expected lookup and the response to give it.
enum Expectation {
    Product {
        id: ProductId,
        response: Result<Product, CatalogError>,
    },
    Stock {
        id: ProductId,
        response: Result<StockRecord, CatalogError>,
    },
}

/// A [`Catalog`] that answers from a queue of expectations, in order.
///
/// Clones share the queue: keep one to call [`verify`](MockCatalog::verify) after
/// handing another to the cart.
///
/// # Panics
/// A lookup that does not match the next expectation (kind or product id) panics.
#[derive(Clone, Default)]
pub struct MockCatalog {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl MockCatalog {
    /// Creates a new mock catalog with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `product` lookup.
    pub fn expect_product(&mut self, id: ProductId) -> ProductExpectationBuilder {
        ProductExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `stock` lookup.
    pub fn expect_stock(&mut self, id: ProductId) -> StockExpectationBuilder {
        StockExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn next(&self) -> Option<Expectation> {
        self.expectations.lock().unwrap().pop_front()
    }
}

#[async_trait]
impl Catalog for MockCatalog {
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        match self.next() {
            Some(Expectation::Product { id: expected, response }) if expected == id => response,
            _ => panic!("Unexpected product lookup for {id} or expectation mismatch"),
        }
    }

    async fn stock(&self, id: ProductId) -> Result<StockRecord, CatalogError> {
        match self.next() {
            Some(Expectation::Stock { id: expected, response }) if expected == id => response,
            _ => panic!("Unexpected stock lookup for {id} or expectation mismatch"),
        }
    }
}

/// Builder for `product` expectations.
pub struct ProductExpectationBuilder {
    id: ProductId,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ProductExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, product: Product) {
        self.push(Ok(product));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: CatalogError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Product, CatalogError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Product {
            id: self.id,
            response,
        });
    }
}

/// Builder for `stock` expectations.
pub struct StockExpectationBuilder {
    id: ProductId,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl StockExpectationBuilder {
    /// Sets the expectation to report `amount` units available.
    pub fn return_ok(self, amount: u32) {
        let record = StockRecord::new(self.id, amount);
        self.push(Ok(record));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: CatalogError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<StockRecord, CatalogError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Stock {
            id: self.id,
            response,
        });
    }
}

// =============================================================================
// STORE DOUBLE
// =============================================================================

/// A [`MemoryStore`] that counts writes and can be told to refuse them.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    inner: MemoryStore,
    writes: Arc<AtomicUsize>,
    fail_writes: Arc<AtomicBool>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding one entry. Seeding is not counted as a write.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            inner: MemoryStore::with_entry(key, value),
            ..Self::default()
        }
    }

    /// Number of successful `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// While `true`, every `set` fails with [`StorageError::Unavailable`].
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for MockStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        self.inner.set(key, value).await?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
