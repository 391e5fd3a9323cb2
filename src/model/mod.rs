//! Pure data structures shared by the cart, the catalog and the persistence codec.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
