//! Settlement types
//!
//! A settlement is a single proposed payment that reduces outstanding
//! balances. The settlement list, replayed as transactions (payer
//! −amount, payee +amount), drives every balance to zero.

use super::account::AccountLabel;
use rust_decimal::Decimal;

/// A single proposed payment
///
/// Means "payer should transfer `amount` to payee". Amounts are always
/// strictly positive; the payer/payee direction carries the sign.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    /// The account that owes money (was a debtor)
    pub payer: AccountLabel,

    /// The account that is owed money (was a creditor)
    pub payee: AccountLabel,

    /// Amount to transfer, strictly positive
    pub amount: Decimal,
}

impl Settlement {
    /// Create a settlement entry
    pub fn new(payer: impl Into<AccountLabel>, payee: impl Into<AccountLabel>, amount: Decimal) -> Self {
        Settlement {
            payer: payer.into(),
            payee: payee.into(),
            amount,
        }
    }
}
