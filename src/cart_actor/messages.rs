//! Requests understood by the cart actor.

use super::CartError;
use crate::framework::Response;
use crate::model::{AmountUpdate, Cart, CartLineItem, ProductId};

#[derive(Debug)]
pub enum CartRequest {
    AddProduct {
        product_id: ProductId,
        respond_to: Response<CartLineItem, CartError>,
    },
    RemoveProduct {
        product_id: ProductId,
        respond_to: Response<(), CartError>,
    },
    UpdateAmount {
        update: AmountUpdate,
        respond_to: Response<Option<CartLineItem>, CartError>,
    },
    Get {
        respond_to: Response<Cart, CartError>,
    },
}
