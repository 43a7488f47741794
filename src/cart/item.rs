//! Cart item model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

/// A product with a quantity inside a shopping cart.
///
/// # Example
///
/// ```
/// use payroll_engine::cart::{CartItem, Product};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let product = Product::new("Habichuela negra", Decimal::from_str("64.50").unwrap());
/// let item = CartItem::new(product, 100);
/// assert_eq!(item.subtotal(), Decimal::from_str("6450").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    product: Product,
    quantity: u32,
}

impl CartItem {
    /// Creates a new cart item.
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Returns the item's product.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Updates the quantity.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Returns the subtotal for this item (unit price × quantity).
    pub fn subtotal(&self) -> Decimal {
        self.product.unit_price() * Decimal::from(self.quantity)
    }
}
