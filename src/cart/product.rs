//! Product model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product that can be placed in a shopping cart.
///
/// # Example
///
/// ```
/// use payroll_engine::cart::Product;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut product = Product::new("Arroz (Selecto), primera", Decimal::from_str("44.13").unwrap());
/// assert_eq!(product.name(), "Arroz (Selecto), primera");
///
/// product.set_unit_price(Decimal::from_str("45.00").unwrap());
/// assert_eq!(product.unit_price(), Decimal::from_str("45.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    unit_price: Decimal,
}

impl Product {
    /// Creates a new product.
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            unit_price,
        }
    }

    /// Returns the product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Renames the product.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Updates the unit price.
    pub fn set_unit_price(&mut self, unit_price: Decimal) {
        self.unit_price = unit_price;
    }
}
