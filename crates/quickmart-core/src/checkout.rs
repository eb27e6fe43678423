//! # Checkout
//!
//! Turns a cart into a charged customer, decremented stock, a shipment
//! notice and a receipt.
//!
//! ## Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       checkout(customer, cart, inventory)               │
//! │                                                                         │
//! │  1. Cart empty? ──────────────────────────────► EmptyCart               │
//! │                                                                         │
//! │  2. Validate every entry (read only)                                    │
//! │     ├── product missing? ─────────────────────► ProductNotFound         │
//! │     ├── expired? ─────────────────────────────► ProductExpired(name)    │
//! │     ├── quantity > stock? ────────────────────► OutOfStock(name)        │
//! │     └── subtotal += price × qty, note shippables ─► AmountOverflow      │
//! │                                                                         │
//! │  3. shipping = flat fee × shippable entries ──────► AmountOverflow      │
//! │                                                                         │
//! │  4. customer.deduct(subtotal + shipping) ─────► InsufficientFunds       │
//! │     ─────────── nothing has been mutated above this line ───────────    │
//! │                                                                         │
//! │  5. product.reduce_quantity(qty) for every entry                        │
//! │                                                                         │
//! │  6. Shipment notice (if any shippables)                                 │
//! │  7. Receipt                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stock Across Repeated Entries
//! The same product may appear in several entries. Validation checks the
//! running total requested per product against its stock, so the mutation
//! pass in step 5 cannot run out part way through a single-threaded call.
//! Step 5 still propagates any error it meets and does not roll back.

use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cart::Cart;
use crate::customer::Customer;
use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::money::Money;
use crate::product::ProductId;
use crate::receipt::{CheckoutReceipt, ReceiptLine};
use crate::shipping::{build_notice, ShipmentItem, ShipmentNotice};
use crate::DEFAULT_SHIPPING_FEE_CENTS;

// =============================================================================
// Policy
// =============================================================================

/// Pricing knobs for checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutPolicy {
    /// Charged once per shippable cart entry, whatever its quantity or weight.
    pub shipping_fee_per_entry: Money,
}

impl Default for CheckoutPolicy {
    /// 10.00 per shippable entry.
    fn default() -> Self {
        CheckoutPolicy {
            shipping_fee_per_entry: Money::from_cents(DEFAULT_SHIPPING_FEE_CENTS),
        }
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// Everything a successful checkout produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutOutcome {
    /// Present only when at least one entry requires shipping.
    pub shipment: Option<ShipmentNotice>,
    pub receipt: CheckoutReceipt,
}

/// Result of the read-only validation pass.
struct ValidatedCart {
    lines: Vec<ReceiptLine>,
    shippables: Vec<ShipmentItem>,
    subtotal: Money,
}

// =============================================================================
// Checkout
// =============================================================================

/// Runs checkout for `customer` over `cart`, against the products held in
/// `inventory`.
///
/// ## Errors
/// - [`CoreError::EmptyCart`]
/// - [`CoreError::ProductNotFound`] when an entry's product is not in `inventory`
/// - [`CoreError::ProductExpired`]
/// - [`CoreError::OutOfStock`]
/// - [`CoreError::AmountOverflow`] when a total does not fit in [`Money`]
/// - [`CoreError::InsufficientFunds`]
///
/// All of these leave the customer and the inventory exactly as they were.
///
/// ## Example
/// ```rust
/// use quickmart_core::{checkout, Cart, CheckoutPolicy, Customer, Inventory, Money, Product, Weight};
///
/// let mut inventory = Inventory::new();
/// let tv = Product::new("TV", Money::from_major(300), 4)
///     .unwrap()
///     .shippable(Weight::from_grams(10_000.0));
/// let mut cart = Cart::new();
/// cart.add(&tv, 1).unwrap();
/// let tv_id = inventory.insert(tv);
///
/// let mut customer = Customer::new("Anton", Money::from_major(800)).unwrap();
/// let outcome = checkout(&mut customer, &cart, &mut inventory, &CheckoutPolicy::default()).unwrap();
///
/// assert_eq!(outcome.receipt.total, Money::from_major(310));
/// assert_eq!(customer.balance(), Money::from_major(490));
/// assert_eq!(inventory.product(&tv_id).unwrap().quantity(), 3);
/// ```
pub fn checkout(
    customer: &mut Customer,
    cart: &Cart,
    inventory: &mut Inventory,
    policy: &CheckoutPolicy,
) -> CoreResult<CheckoutOutcome> {
    debug!(customer = %customer.name(), entries = cart.len(), "Starting checkout");

    let validated = validate(cart, inventory).inspect_err(|e| {
        warn!(customer = %customer.name(), error = %e, "Checkout rejected");
    })?;

    let (shipping, total) = price_shipping(&validated, policy).inspect_err(|e| {
        warn!(customer = %customer.name(), error = %e, "Checkout rejected");
    })?;

    customer.deduct(total).inspect_err(|e| {
        warn!(customer = %customer.name(), total = %total, error = %e, "Checkout rejected");
    })?;

    for entry in cart.items() {
        inventory
            .product_mut(&entry.product_id)?
            .reduce_quantity(entry.quantity)?;
    }

    let shipment = build_notice(&validated.shippables);

    let receipt = CheckoutReceipt {
        customer: customer.name().to_string(),
        lines: validated.lines,
        subtotal: validated.subtotal,
        shipping,
        total,
        remaining_balance: customer.balance(),
        completed_at: Utc::now(),
    };

    info!(
        customer = %receipt.customer,
        total = %receipt.total,
        entries = receipt.lines.len(),
        shipped = shipment.is_some(),
        "Checkout complete"
    );

    Ok(CheckoutOutcome { shipment, receipt })
}

/// Flat fee per shippable entry, and the grand total.
fn price_shipping(validated: &ValidatedCart, policy: &CheckoutPolicy) -> CoreResult<(Money, Money)> {
    let shipping = u32::try_from(validated.shippables.len())
        .ok()
        .and_then(|n| policy.shipping_fee_per_entry.checked_multiply_quantity(n))
        .ok_or_else(|| overflow("shipping"))?;
    let total = validated
        .subtotal
        .checked_add(shipping)
        .ok_or_else(|| overflow("total"))?;

    Ok((shipping, total))
}

fn overflow(what: &str) -> CoreError {
    CoreError::AmountOverflow {
        what: what.to_string(),
    }
}

/// Validation pass: no mutation.
fn validate(cart: &Cart, inventory: &Inventory) -> CoreResult<ValidatedCart> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let mut claimed: HashMap<ProductId, u32> = HashMap::new();
    let mut lines = Vec::with_capacity(cart.len());
    let mut shippables = Vec::new();
    let mut subtotal = Money::zero();

    for entry in cart.items() {
        let product = inventory.product(&entry.product_id)?;
        debug!(product = %product.name(), quantity = entry.quantity, "Validating cart entry");

        if product.is_expired() {
            return Err(CoreError::ProductExpired(product.name().to_string()));
        }

        let requested = claimed.entry(entry.product_id).or_insert(0);
        *requested += entry.quantity;
        if !product.has_stock_for(*requested) {
            return Err(CoreError::OutOfStock {
                name: product.name().to_string(),
                available: product.quantity(),
                requested: *requested,
            });
        }

        let line_total = product
            .price()
            .checked_multiply_quantity(entry.quantity)
            .ok_or_else(|| overflow("line total"))?;
        subtotal = subtotal
            .checked_add(line_total)
            .ok_or_else(|| overflow("subtotal"))?;
        lines.push(ReceiptLine {
            quantity: entry.quantity,
            name: product.name().to_string(),
            unit_price: product.price(),
            line_total,
        });

        if product.requires_shipping() {
            shippables.push(ShipmentItem {
                name: product.name().to_string(),
                quantity: entry.quantity,
                unit_weight: product.weight(),
            });
        }
    }

    Ok(ValidatedCart {
        lines,
        shippables,
        subtotal,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Product;
    use crate::weight::Weight;

    struct Store {
        inventory: Inventory,
        cheese: ProductId,
        tv: ProductId,
    }

    fn store() -> Store {
        let mut inventory = Inventory::new();
        let cheese = inventory.insert(
            Product::new("Cheese", Money::from_major(100), 5)
                .unwrap()
                .expirable(false),
        );
        let tv = inventory.insert(
            Product::new("TV", Money::from_major(300), 4)
                .unwrap()
                .shippable(Weight::from_grams(10_000.0)),
        );
        Store {
            inventory,
            cheese,
            tv,
        }
    }

    fn cart_of(inventory: &Inventory, entries: &[(ProductId, u32)]) -> Cart {
        let mut cart = Cart::new();
        for (id, qty) in entries {
            cart.add(inventory.product(id).unwrap(), *qty).unwrap();
        }
        cart
    }

    fn anton(major: i64) -> Customer {
        Customer::new("Anton", Money::from_major(major)).unwrap()
    }

    #[test]
    fn test_checkout_charges_and_decrements() {
        let mut s = store();
        let cart = cart_of(&s.inventory, &[(s.cheese, 2), (s.tv, 1)]);
        let mut customer = anton(800);

        let outcome =
            checkout(&mut customer, &cart, &mut s.inventory, &CheckoutPolicy::default()).unwrap();

        assert_eq!(outcome.receipt.subtotal, Money::from_major(500));
        assert_eq!(outcome.receipt.shipping, Money::from_major(10));
        assert_eq!(outcome.receipt.total, Money::from_major(510));
        assert_eq!(outcome.receipt.remaining_balance, Money::from_major(290));
        assert_eq!(customer.balance(), Money::from_major(290));
        assert_eq!(s.inventory.product(&s.cheese).unwrap().quantity(), 3);
        assert_eq!(s.inventory.product(&s.tv).unwrap().quantity(), 3);

        let shipment = outcome.shipment.unwrap();
        assert_eq!(shipment.lines.len(), 1);
        assert_eq!(shipment.lines[0].name, "TV");
    }

    #[test]
    fn test_no_shippables_no_notice() {
        let mut s = store();
        let cart = cart_of(&s.inventory, &[(s.cheese, 1)]);
        let mut customer = anton(800);

        let outcome =
            checkout(&mut customer, &cart, &mut s.inventory, &CheckoutPolicy::default()).unwrap();

        assert!(outcome.shipment.is_none());
        assert!(outcome.receipt.shipping.is_zero());
    }

    #[test]
    fn test_empty_cart() {
        let mut s = store();
        let mut customer = anton(800);

        let err = checkout(&mut customer, &Cart::new(), &mut s.inventory, &CheckoutPolicy::default())
            .unwrap_err();
        assert_eq!(err, CoreError::EmptyCart);
        assert_eq!(customer.balance(), Money::from_major(800));
    }

    #[test]
    fn test_shipping_is_per_entry_not_per_unit() {
        let mut s = store();
        let cart = cart_of(&s.inventory, &[(s.tv, 3)]);
        let mut customer = anton(2_000);

        let outcome =
            checkout(&mut customer, &cart, &mut s.inventory, &CheckoutPolicy::default()).unwrap();
        assert_eq!(outcome.receipt.shipping, Money::from_major(10));
    }

    #[test]
    fn test_custom_shipping_fee() {
        let mut s = store();
        let cart = cart_of(&s.inventory, &[(s.tv, 1), (s.tv, 1)]);
        let mut customer = anton(2_000);
        let policy = CheckoutPolicy {
            shipping_fee_per_entry: Money::from_cents(2_550),
        };

        let outcome = checkout(&mut customer, &cart, &mut s.inventory, &policy).unwrap();
        assert_eq!(outcome.receipt.shipping, Money::from_cents(5_100));
    }

    #[test]
    fn test_repeated_entries_checked_against_running_total() {
        let mut s = store();
        // Each entry fits on its own; together they exceed the 4 TVs on hand.
        let cart = cart_of(&s.inventory, &[(s.tv, 3), (s.tv, 2)]);
        let mut customer = anton(5_000);

        let err = checkout(&mut customer, &cart, &mut s.inventory, &CheckoutPolicy::default())
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::OutOfStock {
                name: "TV".to_string(),
                available: 4,
                requested: 5,
            }
        );
        assert_eq!(customer.balance(), Money::from_major(5_000));
        assert_eq!(s.inventory.product(&s.tv).unwrap().quantity(), 4);
    }

    #[test]
    fn test_oversized_shipping_fee_is_rejected_before_charging() {
        let mut s = store();
        let cart = cart_of(&s.inventory, &[(s.tv, 1), (s.tv, 1), (s.tv, 1)]);
        let mut customer = Customer::new("Anton", Money::from_cents(i64::MAX)).unwrap();
        let policy = CheckoutPolicy {
            shipping_fee_per_entry: Money::from_cents(i64::MAX / 2),
        };

        let err = checkout(&mut customer, &cart, &mut s.inventory, &policy).unwrap_err();

        assert_eq!(
            err,
            CoreError::AmountOverflow {
                what: "shipping".to_string()
            }
        );
        assert_eq!(customer.balance(), Money::from_cents(i64::MAX));
        assert_eq!(s.inventory.product(&s.tv).unwrap().quantity(), 4);
    }

    #[test]
    fn test_total_overflow_is_rejected() {
        let mut s = store();
        let cart = cart_of(&s.inventory, &[(s.tv, 1)]);
        let mut customer = Customer::new("Anton", Money::from_cents(i64::MAX)).unwrap();
        let policy = CheckoutPolicy {
            shipping_fee_per_entry: Money::from_cents(i64::MAX),
        };

        let err = checkout(&mut customer, &cart, &mut s.inventory, &policy).unwrap_err();

        assert_eq!(
            err,
            CoreError::AmountOverflow {
                what: "total".to_string()
            }
        );
        assert_eq!(customer.balance(), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_unknown_product() {
        let mut s = store();
        let stray = Product::new("Stray", Money::from_major(1), 1).unwrap();
        let mut cart = Cart::new();
        cart.add(&stray, 1).unwrap();
        let mut customer = anton(800);

        let err = checkout(&mut customer, &cart, &mut s.inventory, &CheckoutPolicy::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));
        assert_eq!(customer.balance(), Money::from_major(800));
    }
}
