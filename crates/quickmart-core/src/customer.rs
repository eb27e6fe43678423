//! # Customer
//!
//! A customer and their prepaid balance.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_balance_cents, validate_customer_name};

/// A paying customer.
///
/// The balance never goes negative: [`Customer::deduct`] refuses any amount
/// larger than what is left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    balance: Money,
}

impl Customer {
    pub fn new(name: impl Into<String>, balance: Money) -> CoreResult<Self> {
        let name = name.into();
        validate_customer_name(&name)?;
        validate_balance_cents(balance.cents())?;

        Ok(Customer {
            name: name.trim().to_string(),
            balance,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Takes `amount` off the balance.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidPaymentAmount`] for a negative amount
    /// - [`CoreError::InsufficientFunds`] when `amount` exceeds the balance;
    ///   the balance is unchanged
    pub fn deduct(&mut self, amount: Money) -> CoreResult<()> {
        if amount.is_negative() {
            return Err(CoreError::InvalidPaymentAmount {
                reason: format!("{amount} is negative"),
            });
        }

        if amount > self.balance {
            return Err(CoreError::InsufficientFunds {
                balance: self.balance,
                required: amount,
            });
        }

        self.balance -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduct() {
        let mut customer = Customer::new("Anton", Money::from_major(800)).unwrap();
        customer.deduct(Money::from_major(710)).unwrap();
        assert_eq!(customer.balance(), Money::from_major(90));
    }

    #[test]
    fn test_deduct_entire_balance() {
        let mut customer = Customer::new("Anton", Money::from_major(800)).unwrap();
        customer.deduct(Money::from_major(800)).unwrap();
        assert!(customer.balance().is_zero());
    }

    #[test]
    fn test_deduct_insufficient_funds() {
        let mut customer = Customer::new("Anton", Money::from_major(100)).unwrap();
        let err = customer.deduct(Money::from_cents(10_001)).unwrap_err();

        assert!(matches!(err, CoreError::InsufficientFunds { .. }));
        assert_eq!(customer.balance(), Money::from_major(100));
    }

    #[test]
    fn test_deduct_negative_amount() {
        let mut customer = Customer::new("Anton", Money::from_major(100)).unwrap();
        assert!(matches!(
            customer.deduct(Money::from_cents(-1)),
            Err(CoreError::InvalidPaymentAmount { .. })
        ));
    }

    #[test]
    fn test_new_rejects_negative_balance() {
        assert!(Customer::new("Anton", Money::from_cents(-1)).is_err());
        assert!(Customer::new(" ", Money::zero()).is_err());
    }
}
