//! Transaction-related types
//!
//! A transaction is an (account, signed amount) pair read from the input
//! table. Positive amounts mean the account paid money into the pool;
//! negative amounts mean it received money. Transactions are ephemeral:
//! only their cumulative effect on the account balance is retained.

use super::account::AccountLabel;
use rust_decimal::Decimal;

/// Input transaction record
///
/// One row of the input table after parsing. The amount is exact decimal
/// (not binary float), so ingesting many small transactions introduces no
/// representation drift.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// The account this transaction applies to
    pub account: AccountLabel,

    /// Signed transaction amount
    ///
    /// Positive: paid into the pool (balance increases).
    /// Negative: received from the pool (balance decreases).
    /// Zero is accepted and has no effect beyond creating the account.
    pub amount: Decimal,
}
