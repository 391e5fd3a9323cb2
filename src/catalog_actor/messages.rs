//! Requests understood by the catalog actor.

use crate::catalog::CatalogError;
use crate::framework::Response;
use crate::model::{Product, ProductId, StockRecord};

#[derive(Debug)]
pub enum CatalogRequest {
    Product {
        id: ProductId,
        respond_to: Response<Product, CatalogError>,
    },
    Stock {
        id: ProductId,
        respond_to: Response<StockRecord, CatalogError>,
    },
    /// Inserts a product or replaces its record and stock level.
    Upsert {
        product: Product,
        stock: u32,
        respond_to: Response<(), CatalogError>,
    },
}
