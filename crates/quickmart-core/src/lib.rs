//! # quickmart-core: Pure Checkout Logic for Quickmart
//!
//! This crate is the **heart** of Quickmart. It contains the whole checkout
//! flow as plain functions and types with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Quickmart Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    quickmart-cli (binary)                       │   │
//! │  │    config ──► logging ──► sample store ──► stdout / stderr      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ quickmart-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │   money   │  │   cart    │  │ checkout  │  │   │
//! │  │   │ inventory │  │  weight   │  │ customer  │  │ shipping  │  │   │
//! │  │   │           │  │           │  │           │  │  receipt  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ASYNC • FULLY TESTABLE                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//! ```rust
//! use quickmart_core::{checkout, Cart, CheckoutPolicy, Customer, Inventory, Money, Product};
//!
//! let mut inventory = Inventory::new();
//! let cheese = Product::new("Cheese", Money::from_major(100), 5)?.expirable(false);
//!
//! let mut cart = Cart::new();
//! cart.add(&cheese, 2)?;
//! inventory.insert(cheese);
//!
//! let mut customer = Customer::new("Anton", Money::from_major(800))?;
//! let outcome = checkout(&mut customer, &cart, &mut inventory, &CheckoutPolicy::default())?;
//!
//! assert_eq!(outcome.receipt.total, Money::from_major(200));
//! # Ok::<(), quickmart_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod customer;
pub mod error;
pub mod inventory;
pub mod money;
pub mod product;
pub mod receipt;
pub mod shipping;
pub mod validation;
pub mod weight;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartEntry};
pub use checkout::{checkout, CheckoutOutcome, CheckoutPolicy};
pub use customer::Customer;
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use money::Money;
pub use product::{Product, ProductId};
pub use receipt::{CheckoutReceipt, ReceiptLine};
pub use shipping::{ShipmentLine, ShipmentNotice};
pub use weight::Weight;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum entries allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and keeps receipts a reasonable length.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single cart entry
///
/// ## Business Reason
/// Catches typing 1000 instead of 10.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Highest accepted unit price, in cents (10,000,000.00).
///
/// ## Business Reason
/// Keeps price × MAX_ITEM_QUANTITY × MAX_CART_ITEMS well inside i64.
pub const MAX_PRICE_CENTS: i64 = 1_000_000_000;

/// Flat shipping fee charged per shippable cart entry, in cents (10.00).
pub const DEFAULT_SHIPPING_FEE_CENTS: i64 = 1_000;
