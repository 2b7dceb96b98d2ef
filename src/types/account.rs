//! Account-related types
//!
//! An account is nothing more than an opaque label with one running
//! balance ("credit"). Positive credit means the account is net owed
//! money; negative means it net owes money.

use rust_decimal::Decimal;

/// Opaque account identifier
///
/// Labels are arbitrary text taken verbatim from the input table.
pub type AccountLabel = String;

/// One account's net balance
#[derive(Debug, Clone, PartialEq)]
pub struct AccountBalance {
    /// The account label
    pub label: AccountLabel,

    /// Net signed balance
    ///
    /// Sum of all transaction amounts recorded for this account.
    /// Positive: the account is a creditor. Negative: a debtor.
    pub credit: Decimal,
}

impl AccountBalance {
    /// Create a balance entry
    pub fn new(label: impl Into<AccountLabel>, credit: Decimal) -> Self {
        AccountBalance {
            label: label.into(),
            credit,
        }
    }
}
