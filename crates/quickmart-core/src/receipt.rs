//! # Checkout Receipt
//!
//! The receipt produced by a successful checkout. Lines are tab separated
//! (label, tab, value):
//!
//! ```text
//! ** Checkout receipt **
//! 2x Cheese	$200.00
//! 1x TV	$300.00
//! ----------------------
//! Subtotal	$500.00
//! Shipping	$10.00
//! Amount		$510.00
//! Remaining balance	$290.00
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

/// One purchased cart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub quantity: u32,
    pub name: String,
    pub unit_price: Money,
    /// Unit price × quantity.
    pub line_total: Money,
}

/// Totals and lines of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub customer: String,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Money,
    pub shipping: Money,
    /// Subtotal + shipping; the amount deducted.
    pub total: Money,
    pub remaining_balance: Money,
    pub completed_at: DateTime<Utc>,
}

impl fmt::Display for CheckoutReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "** Checkout receipt **")?;
        for line in &self.lines {
            writeln!(f, "{}x {}\t{}", line.quantity, line.name, line.line_total)?;
        }
        writeln!(f, "----------------------")?;
        writeln!(f, "Subtotal\t{}", self.subtotal)?;
        writeln!(f, "Shipping\t{}", self.shipping)?;
        writeln!(f, "Amount\t\t{}", self.total)?;
        writeln!(f, "Remaining balance\t{}", self.remaining_balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_layout() {
        let receipt = CheckoutReceipt {
            customer: "Anton".to_string(),
            lines: vec![
                ReceiptLine {
                    quantity: 2,
                    name: "Cheese".to_string(),
                    unit_price: Money::from_major(100),
                    line_total: Money::from_major(200),
                },
                ReceiptLine {
                    quantity: 1,
                    name: "TV".to_string(),
                    unit_price: Money::from_major(300),
                    line_total: Money::from_major(300),
                },
            ],
            subtotal: Money::from_major(500),
            shipping: Money::from_major(10),
            total: Money::from_major(510),
            remaining_balance: Money::from_major(290),
            completed_at: Utc::now(),
        };

        let expected = "** Checkout receipt **\n\
                        2x Cheese\t$200.00\n\
                        1x TV\t$300.00\n\
                        ----------------------\n\
                        Subtotal\t$500.00\n\
                        Shipping\t$10.00\n\
                        Amount\t\t$510.00\n\
                        Remaining balance\t$290.00\n";
        assert_eq!(receipt.to_string(), expected);
    }
}
