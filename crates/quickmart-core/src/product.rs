//! # Product
//!
//! A product for sale, with optional capabilities.
//!
//! ## Capability Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product                                         │
//! │  id · name · price · quantity                                           │
//! │                                                                         │
//! │   expiry: Option<Expiry>          shipping: Option<ShippingProfile>     │
//! │   ─────────────────────           ─────────────────────────────────     │
//! │   None  → never expires           None  → collected in store            │
//! │   Some  → expired flag            Some  → unit weight in grams          │
//! │                                                                         │
//! │  Cheese       = expirable                                               │
//! │  TV           = shippable                                               │
//! │  Scratch Card = plain                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both capabilities may be present on one product.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_price_cents, validate_product_name};
use crate::weight::Weight;

// =============================================================================
// Product Id
// =============================================================================

/// Identity of a product inside an [`Inventory`](crate::inventory::Inventory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generates a fresh UUID v4 id.
    pub fn new() -> Self {
        ProductId(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Capabilities
// =============================================================================

/// Expiry capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiry {
    pub expired: bool,
}

/// Shipping capability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingProfile {
    /// Weight of one unit.
    pub unit_weight: Weight,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Quantity on hand only changes through [`Product::reduce_quantity`], so it
/// can never go below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    quantity: u32,
    expiry: Option<Expiry>,
    shipping: Option<ShippingProfile>,
}

impl Product {
    /// Creates a plain product: never expires, never ships.
    ///
    /// ## Example
    /// ```rust
    /// use quickmart_core::{Money, Product};
    ///
    /// let card = Product::new("Scratch Card", Money::from_major(50), 10).unwrap();
    /// assert!(!card.is_expired());
    /// assert!(!card.requires_shipping());
    /// ```
    pub fn new(name: impl Into<String>, price: Money, quantity: u32) -> CoreResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price_cents(price.cents())?;

        Ok(Product {
            id: ProductId::new(),
            name: name.trim().to_string(),
            price,
            quantity,
            expiry: None,
            shipping: None,
        })
    }

    /// Attaches the expiry capability.
    pub fn expirable(mut self, expired: bool) -> Self {
        self.expiry = Some(Expiry { expired });
        self
    }

    /// Attaches the shipping capability with the weight of one unit.
    pub fn shippable(mut self, unit_weight: Weight) -> Self {
        self.shipping = Some(ShippingProfile { unit_weight });
        self
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Quantity on hand.
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[inline]
    pub fn is_expirable(&self) -> bool {
        self.expiry.is_some()
    }

    /// Always `false` for products without the expiry capability.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.expiry.is_some_and(|e| e.expired)
    }

    #[inline]
    pub fn requires_shipping(&self) -> bool {
        self.shipping.is_some()
    }

    /// Unit weight; zero for products that are not shipped.
    #[inline]
    pub fn weight(&self) -> Weight {
        self.shipping.map_or(Weight::zero(), |s| s.unit_weight)
    }

    /// Checks whether `quantity` units are on hand.
    #[inline]
    pub fn has_stock_for(&self, quantity: u32) -> bool {
        quantity <= self.quantity
    }

    /// Removes `q` units from stock.
    ///
    /// ## Errors
    /// [`CoreError::OutOfStock`] when `q` exceeds the quantity on hand. Stock
    /// is left untouched in that case.
    pub fn reduce_quantity(&mut self, q: u32) -> CoreResult<()> {
        if !self.has_stock_for(q) {
            return Err(CoreError::OutOfStock {
                name: self.name.clone(),
                available: self.quantity,
                requested: q,
            });
        }

        self.quantity -= q;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
