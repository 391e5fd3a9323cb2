//! Cart line items and the ordered cart itself.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Product, ProductId};

/// A product plus the quantity requested for it.
///
/// Serialized flat, the way the cart has always been persisted:
/// `{"id":1,"title":"…","price":179.9,"image":"…","amount":2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

impl CartLineItem {
    pub fn new(product: Product, amount: u32) -> Self {
        Self { product, amount }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price × amount.
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.amount)
    }
}

/// Request to set a line item's amount to an absolute value.
///
/// `amount` is signed so that a decrement below one can be expressed by the caller;
/// the cart ignores non-positive requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountUpdate {
    pub product_id: ProductId,
    pub amount: i64,
}

impl AmountUpdate {
    pub fn new(product_id: impl Into<ProductId>, amount: i64) -> Self {
        Self {
            product_id: product_id.into(),
            amount,
        }
    }
}

/// Reasons a sequence of line items cannot form a cart.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidCart {
    #[error("Duplicate line item for {0}")]
    DuplicateProduct(ProductId),
    #[error("Line item for {0} has zero amount")]
    ZeroAmount(ProductId),
}

/// The ordered sequence of line items.
///
/// Insertion ordered and unique by product id. Only the cart actor can mutate it;
/// everyone else sees owned snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CartLineItem> {
        self.items.iter()
    }

    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all amounts.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    /// Sum of all subtotals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartLineItem::subtotal).sum()
    }

    pub(crate) fn get_mut(&mut self, id: ProductId) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Appends a line item. Callers must have checked that `item` is not already present.
    pub(crate) fn push(&mut self, item: CartLineItem) {
        debug_assert!(!self.contains(item.id()));
        self.items.push(item);
    }

    /// Removes a line item, keeping the relative order of the rest.
    pub(crate) fn remove(&mut self, id: ProductId) -> Option<CartLineItem> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }
}

impl TryFrom<Vec<CartLineItem>> for Cart {
    type Error = InvalidCart;

    fn try_from(items: Vec<CartLineItem>) -> Result<Self, Self::Error> {
        let mut cart = Cart::new();
        for item in items {
            if item.amount == 0 {
                return Err(InvalidCart::ZeroAmount(item.id()));
            }
            if cart.contains(item.id()) {
                return Err(InvalidCart::DuplicateProduct(item.id()));
            }
            cart.items.push(item);
        }
        Ok(cart)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLineItem;
    type IntoIter = std::slice::Iter<'a, CartLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
