//! # Cart
//!
//! The shopping cart for one session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  cart.add(&tv, 1) ─────► quantity valid? ──► stock covers it? ──► push  │
//! │                                                                         │
//! │  checkout(..) ─────────► cart.items()  (read only)                      │
//! │                                                                         │
//! │  NOTE: Adding never reserves stock. Stock is decremented only by a      │
//! │        successful checkout, and is re-checked there.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::{Product, ProductId};
use crate::validation::{validate_cart_size, validate_quantity};
use crate::MAX_CART_ITEMS;

/// An entry in the shopping cart.
///
/// ## Design Notes
/// - `product_id`: Reference into the inventory; the product stays shared
/// - `name` / `unit_price`: Copied when added, used to describe the entry
///   without an inventory lookup. Checkout always charges the live price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product_id: ProductId,

    /// Product name at time of adding.
    pub name: String,

    /// Unit price at time of adding.
    pub unit_price: Money,

    /// Requested quantity, always > 0.
    pub quantity: u32,

    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    fn from_product(product: &Product, quantity: u32) -> Self {
        CartEntry {
            product_id: product.id(),
            name: product.name().to_string(),
            unit_price: product.price(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Unit price × quantity, at the price captured when added.
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Entries keep insertion order; the receipt lists them in that order
/// - Adding a product already in the cart appends a second entry
/// - Quantity must be > 0 and at most 999
/// - Maximum entries: 100
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `quantity` units of `product`.
    ///
    /// ## Errors
    /// - [`CoreError::Validation`] for a zero or oversized quantity
    /// - [`CoreError::CartTooLarge`] when the cart already holds 100 entries
    /// - [`CoreError::InsufficientStock`] when `quantity` exceeds the stock
    ///   on hand right now
    pub fn add(&mut self, product: &Product, quantity: u32) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if validate_cart_size(self.items.len()).is_err() {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        if !product.has_stock_for(quantity) {
            return Err(CoreError::InsufficientStock {
                name: product.name().to_string(),
                available: product.quantity(),
                requested: quantity,
            });
        }

        self.items.push(CartEntry::from_product(product, quantity));
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CartEntry] {
        &self.items
    }

    /// Number of entries (not units).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total units across all entries.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of entry line totals at the captured prices.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartEntry::line_total).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn test_product(name: &str, price: i64, stock: u32) -> Product {
        Product::new(name, Money::from_major(price), stock).unwrap()
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let cheese = test_product("Cheese", 100, 5);

        cart.add(&cheese, 2).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal(), Money::from_major(200));
        assert_eq!(cart.items()[0].product_id, cheese.id());
    }

    #[test]
    fn test_cart_add_same_product_appends() {
        let mut cart = Cart::new();
        let cheese = test_product("Cheese", 100, 5);

        cart.add(&cheese, 2).unwrap();
        cart.add(&cheese, 3).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_cart_add_does_not_touch_stock() {
        let mut cart = Cart::new();
        let tv = test_product("TV", 300, 4);

        cart.add(&tv, 4).unwrap();
        assert_eq!(tv.quantity(), 4);
    }

    #[test]
    fn test_cart_add_beyond_stock() {
        let mut cart = Cart::new();
        let tv = test_product("TV", 300, 4);

        let err = cart.add(&tv, 5).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientStock {
                name: "TV".to_string(),
                available: 4,
                requested: 5,
            }
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_add_zero_quantity() {
        let mut cart = Cart::new();
        let tv = test_product("TV", 300, 4);

        assert!(matches!(
            cart.add(&tv, 0),
            Err(CoreError::Validation(ValidationError::MustBePositive { .. }))
        ));
    }

    #[test]
    fn test_cart_too_large() {
        let mut cart = Cart::new();
        let card = test_product("Scratch Card", 50, 500);

        for _ in 0..MAX_CART_ITEMS {
            cart.add(&card, 1).unwrap();
        }

        assert_eq!(
            cart.add(&card, 1).unwrap_err(),
            CoreError::CartTooLarge {
                max: MAX_CART_ITEMS
            }
        );
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add(&test_product("Biscuits", 150, 3), 1).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
    }
}
