//! # Error Types
//!
//! Domain-specific error types for quickmart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quickmart-core errors (this file)                                     │
//! │  ├── CoreError        - Business rule violations during checkout       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  quickmart-cli errors (binary)                                         │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → "Checkout failed: <reason>"       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, amounts)
//! 3. Errors are enum variants, never String
//! 4. Each variant renders as the single line shown after "Checkout failed:"

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Every variant aborts the checkout in progress. None are transient, so
/// nothing in this crate retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Checkout was attempted with no cart entries.
    #[error("Cart is empty")]
    EmptyCart,

    /// A cart entry refers to a product that has expired.
    #[error("{0} is expired")]
    ProductExpired(String),

    /// Stock no longer covers the requested quantity.
    ///
    /// ## When This Occurs
    /// - Checkout validation: stock changed since the item was added
    /// - `Product::reduce_quantity` asked for more than is on hand
    #[error("{name} is out of stock: available {available}, requested {requested}")]
    OutOfStock {
        name: String,
        available: u32,
        requested: u32,
    },

    /// Adding to the cart asked for more than is currently on hand.
    ///
    /// ## User Workflow
    /// ```text
    /// cart.add(tv, 5)
    ///      │
    ///      ▼
    /// Check stock: available=4
    ///      │
    ///      ▼
    /// InsufficientStock { name: "TV", available: 4, requested: 5 }
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: u32,
        requested: u32,
    },

    /// Customer balance does not cover the checkout total.
    #[error("Insufficient balance: available {balance}, required {required}")]
    InsufficientFunds { balance: Money, required: Money },

    /// A cart entry points at a product the inventory does not hold.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Cart has exceeded maximum allowed entries.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// A line total, the shipping charge or the grand total does not fit
    /// in the money representation.
    #[error("Amount overflow while computing {what}")]
    AmountOverflow { what: String },

    /// Payment amount is invalid.
    #[error("Invalid payment amount: {reason}")]
    InvalidPaymentAmount { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when constructing products, customers or cart entries from bad
/// input, before any business rule runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
