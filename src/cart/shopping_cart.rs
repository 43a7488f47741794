//! Shopping cart with merge-on-add semantics and total calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CartItem, Product};

/// An ordered collection of cart items.
///
/// Adding a product whose name already exists in the cart merges the
/// quantities instead of appending a duplicate line.
///
/// # Example
///
/// ```
/// use payroll_engine::cart::{Cart, Product};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut cart = Cart::new();
/// cart.add_product(Product::new("Arroz", Decimal::from_str("44.13").unwrap()), 10);
/// cart.add_product(Product::new("Arroz", Decimal::from_str("44.13").unwrap()), 5);
///
/// assert_eq!(cart.items().len(), 1);
/// assert_eq!(cart.total(), Decimal::from_str("661.95").unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product to the cart.
    ///
    /// If an item with the same product name already exists, its quantity
    /// is increased; otherwise a new item is appended.
    pub fn add_product(&mut self, product: Product, quantity: u32) {
        for item in &mut self.items {
            if item.product().name() == product.name() {
                item.set_quantity(item.quantity() + quantity);
                return;
            }
        }
        self.items.push(CartItem::new(product, quantity));
    }

    /// Removes every item whose product has the given name.
    pub fn remove_product(&mut self, product_name: &str) {
        self.items
            .retain(|item| item.product().name() != product_name);
    }

    /// Sets the quantity of the first item whose product has the given
    /// name. Does nothing when no such item exists.
    pub fn update_quantity(&mut self, product_name: &str, quantity: u32) {
        for item in &mut self.items {
            if item.product().name() == product_name {
                item.set_quantity(quantity);
                return;
            }
        }
    }

    /// Returns the sum of all item subtotals.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Returns the items in the cart.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }
}
