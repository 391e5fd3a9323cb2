//! Cart persistence format.
//!
//! The stored value is a JSON array of flat line items. Decoding is typed: a
//! missing or mistyped field, a zero amount, or a repeated product id is rejected
//! instead of being loaded into the cart.
//!
//! Encoding refuses prices JSON cannot carry (NaN, infinities). `serde_json` would
//! write them as `null`, which decoding then rejects.

use thiserror::Error;

use crate::model::{Cart, CartLineItem, InvalidCart, ProductId};

/// Key the cart is stored under unless configured otherwise.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Malformed cart JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid cart contents: {0}")]
    Invalid(#[from] InvalidCart),

    #[error("Price of {0} is not a finite number")]
    NonFinitePrice(ProductId),
}

pub fn encode_cart(cart: &Cart) -> Result<String, CodecError> {
    if let Some(item) = cart.iter().find(|item| !item.product.price.is_finite()) {
        return Err(CodecError::NonFinitePrice(item.id()));
    }
    Ok(serde_json::to_string(cart.items())?)
}

pub fn decode_cart(raw: &str) -> Result<Cart, CodecError> {
    let items: Vec<CartLineItem> = serde_json::from_str(raw)?;
    Ok(Cart::try_from(items)?)
}
