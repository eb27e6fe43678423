//! # Inventory
//!
//! Owns every product on sale. Carts never own products: they hold a
//! [`ProductId`] and resolve it here, so stock changes made during checkout
//! are visible to every cart that references the product.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::product::{Product, ProductId};

/// In-memory product store keyed by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    products: HashMap<ProductId, Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product and returns its id. A product with the same id is replaced.
    pub fn insert(&mut self, product: Product) -> ProductId {
        let id = product.id();
        self.products.insert(id, product);
        id
    }

    /// Looks up a product, failing with [`CoreError::ProductNotFound`].
    pub fn product(&self, id: &ProductId) -> CoreResult<&Product> {
        self.products
            .get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Mutable lookup, failing with [`CoreError::ProductNotFound`].
    pub fn product_mut(&mut self, id: &ProductId) -> CoreResult<&mut Product> {
        self.products
            .get_mut(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
