//! Ledger: running balance accumulation
//!
//! The Ledger folds signed transactions into one net balance per account.
//! Accounts are created at zero on first mention and never deleted, and
//! the order of first appearance is preserved so downstream output is
//! deterministic.

use crate::core::observer::SettlementObserver;
use crate::types::{AccountBalance, AccountLabel, TransactionRecord};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Accumulates signed transactions into per-account net balances
///
/// Leaf component with no dependencies. Balances live in a `Vec` in
/// first-appearance order; a label index makes each record O(1).
#[derive(Debug, Default)]
pub struct Ledger {
    /// Balances in order of first appearance
    balances: Vec<AccountBalance>,
    /// Label to position in `balances`
    index: HashMap<AccountLabel, usize>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Ledger {
            balances: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Record one signed transaction against an account
    ///
    /// Adds `amount` to the account's running balance, creating the
    /// account at zero first if unseen. Any finite amount is accepted,
    /// including zero (which still creates the account). The observer is
    /// notified of every recorded transaction.
    pub fn record(
        &mut self,
        account: &str,
        amount: Decimal,
        observer: &mut dyn SettlementObserver,
    ) {
        let position = match self.index.get(account) {
            Some(&position) => position,
            None => {
                let position = self.balances.len();
                self.balances
                    .push(AccountBalance::new(account, Decimal::ZERO));
                self.index.insert(account.to_string(), position);
                position
            }
        };

        self.balances[position].credit += amount;
        observer.transaction_recorded(account, amount);
    }

    /// Record a batch of transactions in order
    pub fn record_all<I>(&mut self, transactions: I, observer: &mut dyn SettlementObserver)
    where
        I: IntoIterator<Item = TransactionRecord>,
    {
        for transaction in transactions {
            self.record(&transaction.account, transaction.amount, observer);
        }
    }

    /// Current balances in first-appearance order
    pub fn balances(&self) -> &[AccountBalance] {
        &self.balances
    }

    /// Sum of all balances
    ///
    /// Conservation invariant: equals the sum of all raw transaction
    /// amounts fed in.
    pub fn total(&self) -> Decimal {
        self.balances.iter().map(|balance| balance.credit).sum()
    }

    /// Number of accounts seen so far
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// True if no account has been seen yet
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}
