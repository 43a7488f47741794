//! Shopping cart models and total calculation.
//!
//! A small, self-contained module: products with unit prices, cart items
//! with quantities and subtotals, and a cart that merges repeated products
//! and computes the overall total. All prices use `Decimal` so totals are
//! exact.

mod item;
mod product;
mod shopping_cart;

pub use item::CartItem;
pub use product::Product;
pub use shopping_cart::Cart;
