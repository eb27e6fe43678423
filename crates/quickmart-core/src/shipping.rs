//! # Shipping Notice
//!
//! Builds the shipment notice for the shippable part of a paid cart. Pure:
//! no state, no stock or balance changes. Checkout calls it only after the
//! customer has been charged.
//!
//! ## Rendered Form
//! ```text
//! ** Shipment notice **
//! 1x TV
//! 10000g
//! Total package weight 10.0kg
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::weight::Weight;

/// One shippable cart entry, as handed to [`build_notice`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentItem {
    pub name: String,
    pub quantity: u32,
    pub unit_weight: Weight,
}

/// One line of the notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentLine {
    pub quantity: u32,
    pub name: String,
    /// Unit weight × quantity.
    pub weight: Weight,
}

/// The shipment notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentNotice {
    pub lines: Vec<ShipmentLine>,
    pub total_weight: Weight,
}

/// Builds a notice, or `None` when nothing needs shipping.
pub fn build_notice(items: &[ShipmentItem]) -> Option<ShipmentNotice> {
    if items.is_empty() {
        return None;
    }

    let lines: Vec<ShipmentLine> = items
        .iter()
        .map(|item| ShipmentLine {
            quantity: item.quantity,
            name: item.name.clone(),
            weight: item.unit_weight.multiply_quantity(item.quantity),
        })
        .collect();
    let total_weight = lines.iter().map(|l| l.weight).sum();

    Some(ShipmentNotice {
        lines,
        total_weight,
    })
}

impl fmt::Display for ShipmentNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "** Shipment notice **")?;
        for line in &self.lines {
            writeln!(f, "{}x {}", line.quantity, line.name)?;
            writeln!(f, "{}", line.weight)?;
        }
        // Weightless shippables (e.g. e-vouchers) get no aggregate line.
        if self.total_weight.is_positive() {
            writeln!(
                f,
                "Total package weight {}",
                self.total_weight.kilograms_label()
            )?;
        }
        Ok(())
    }
}
