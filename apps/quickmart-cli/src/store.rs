//! # Sample Store
//!
//! Seeds the demo inventory, customer and cart.
//!
//! ## Generated Data
//! | Product | Price | Stock | Capability |
//! |---|---|---|---|
//! | Cheese | 100.00 | 5 | expirable, fresh |
//! | Biscuits | 150.00 | 3 | expirable, fresh |
//! | TV | 300.00 | 4 | shippable, 10 kg |
//! | Scratch Card | 50.00 | 10 | none |
//!
//! Customer "Anton" starts with 800.00 and buys 2 Cheese, 1 Biscuits,
//! 1 TV and 1 Scratch Card.

use quickmart_core::{Cart, CoreResult, Customer, Inventory, Money, Product, Weight};
use tracing::debug;

/// Everything a demo checkout needs.
pub struct SampleStore {
    pub inventory: Inventory,
    pub customer: Customer,
    pub cart: Cart,
}

/// Builds the sample store with its cart already filled.
pub fn seed() -> CoreResult<SampleStore> {
    let cheese = Product::new("Cheese", Money::from_major(100), 5)?.expirable(false);
    let biscuits = Product::new("Biscuits", Money::from_major(150), 3)?.expirable(false);
    let tv = Product::new("TV", Money::from_major(300), 4)?.shippable(Weight::from_grams(10_000.0));
    let scratch_card = Product::new("Scratch Card", Money::from_major(50), 10)?;

    let mut cart = Cart::new();
    cart.add(&cheese, 2)?;
    cart.add(&biscuits, 1)?;
    cart.add(&tv, 1)?;
    cart.add(&scratch_card, 1)?;

    let mut inventory = Inventory::new();
    for product in [cheese, biscuits, tv, scratch_card] {
        debug!(product = %product.name(), id = %product.id(), stock = product.quantity(), "Seeding product");
        inventory.insert(product);
    }

    let customer = Customer::new("Anton", Money::from_major(800))?;

    Ok(SampleStore {
        inventory,
        customer,
        cart,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed() {
        let store = seed().unwrap();
        assert_eq!(store.inventory.len(), 4);
        assert_eq!(store.cart.len(), 4);
        assert_eq!(store.cart.subtotal(), Money::from_major(700));
        assert_eq!(store.customer.balance(), Money::from_major(800));
    }
}
