//! Settler: greedy largest-magnitude matching
//!
//! Consumes a balance snapshot and produces an ordered list of
//! settlements that brings every balance to zero. The algorithm
//! repeatedly matches the single largest creditor against the single
//! largest debtor, settling `min(credit, |debt|)` so at least one side
//! reaches exactly zero per iteration. Each step is O(log N) through two
//! max-heaps; the whole run is O(N log N) and emits at most N−1
//! settlements for N non-zero accounts.
//!
//! This greedy matching keeps the settlement count low without solving
//! the NP-hard minimum-transaction-count problem; it is deterministic,
//! not optimal. Ties in magnitude are broken by lexically smaller label
//! first so identical input always yields an identical settlement list.
//!
//! The Settler is one-shot: `settle` consumes it, and a fresh computation
//! requires a fresh balance snapshot.

use crate::core::observer::SettlementObserver;
use crate::types::{AccountBalance, AccountLabel, ImbalanceSide, SettleError, Settlement};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Tolerance below which a balance counts as zero
///
/// Accumulation is exact decimal arithmetic, so residue can only come
/// from upstream data; anything at or below 1e-9 in magnitude is treated
/// as settled rather than compared against exact zero.
pub const ZERO_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 9);

/// True if `amount` is zero within [`ZERO_TOLERANCE`]
pub fn is_settled(amount: Decimal) -> bool {
    amount.abs() <= ZERO_TOLERANCE
}

/// One side of an outstanding balance, keyed for the priority queues
///
/// `remaining` is always a positive magnitude; whether it is credit or
/// debt is determined by which heap the party sits in.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Party {
    remaining: Decimal,
    label: AccountLabel,
}

impl Ord for Party {
    /// Larger magnitude wins; equal magnitudes fall back to lexically
    /// smaller label so heap pops are deterministic.
    fn cmp(&self, other: &Self) -> Ordering {
        self.remaining
            .cmp(&other.remaining)
            .then_with(|| other.label.cmp(&self.label))
    }
}

impl PartialOrd for Party {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of one settlement run
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementRun {
    /// Ordered settlements, in the order the matching loop emitted them
    pub settlements: Vec<Settlement>,

    /// Projected balances after all settlements are made
    ///
    /// Same accounts and order as the opening snapshot; every credit is
    /// zero within [`ZERO_TOLERANCE`].
    pub closing: Vec<AccountBalance>,
}

/// Greedy largest-debtor-pays-largest-creditor matcher
///
/// Built from a balance snapshot, run once with [`Settler::settle`].
#[derive(Debug)]
pub struct Settler {
    opening: Vec<AccountBalance>,
    creditors: BinaryHeap<Party>,
    debtors: BinaryHeap<Party>,
}

impl Settler {
    /// Partition a balance snapshot into creditor and debtor queues
    ///
    /// Accounts whose balance is zero within tolerance are excluded from
    /// matching entirely (they still appear in the closing projection).
    pub fn from_balances(balances: &[AccountBalance]) -> Self {
        let mut creditors = BinaryHeap::new();
        let mut debtors = BinaryHeap::new();

        for balance in balances {
            if is_settled(balance.credit) {
                continue;
            }
            let party = Party {
                remaining: balance.credit.abs(),
                label: balance.label.clone(),
            };
            if balance.credit.is_sign_positive() {
                creditors.push(party);
            } else {
                debtors.push(party);
            }
        }

        Settler {
            opening: balances.to_vec(),
            creditors,
            debtors,
        }
    }

    /// Run the matching loop to completion
    ///
    /// Emits one settlement per iteration until either queue is empty,
    /// notifying the observer of each. Terminates after at most N−1
    /// iterations because the side that reaches zero is never
    /// re-inserted.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::ConservationViolation`] if one queue still
    /// holds balances above tolerance when the other runs out, i.e. total
    /// credits did not equal total debits.
    pub fn settle(
        mut self,
        observer: &mut dyn SettlementObserver,
    ) -> Result<SettlementRun, SettleError> {
        let mut settlements = Vec::new();
        let mut closing = self.opening;

        let index: HashMap<AccountLabel, usize> = closing
            .iter()
            .enumerate()
            .map(|(position, balance)| (balance.label.clone(), position))
            .collect();

        loop {
            match (self.creditors.pop(), self.debtors.pop()) {
                (Some(mut creditor), Some(mut debtor)) => {
                    let amount = creditor.remaining.min(debtor.remaining);

                    observer.settlement_proposed(&debtor.label, &creditor.label, amount);
                    settlements.push(Settlement::new(
                        debtor.label.clone(),
                        creditor.label.clone(),
                        amount,
                    ));

                    // Project the payment onto the closing balances.
                    if let Some(&position) = index.get(&debtor.label) {
                        closing[position].credit += amount;
                    }
                    if let Some(&position) = index.get(&creditor.label) {
                        closing[position].credit -= amount;
                    }

                    creditor.remaining -= amount;
                    debtor.remaining -= amount;

                    // min() guarantees at least one side is now zero; the
                    // other keeps its place in the queue.
                    if !is_settled(creditor.remaining) {
                        self.creditors.push(creditor);
                    }
                    if !is_settled(debtor.remaining) {
                        self.debtors.push(debtor);
                    }
                }
                (Some(leftover), None) => {
                    return Err(imbalance(ImbalanceSide::Credit, leftover, self.creditors));
                }
                (None, Some(leftover)) => {
                    return Err(imbalance(ImbalanceSide::Debt, leftover, self.debtors));
                }
                (None, None) => break,
            }
        }

        Ok(SettlementRun {
            settlements,
            closing,
        })
    }
}

/// Build the conservation error from the queue that did not empty
fn imbalance(side: ImbalanceSide, first: Party, rest: BinaryHeap<Party>) -> SettleError {
    let mut total = first.remaining;
    let mut accounts = vec![first.label];

    // Largest leftover first, for a stable error message.
    for party in rest.into_sorted_vec().into_iter().rev() {
        total += party.remaining;
        accounts.push(party.label);
    }

    SettleError::conservation_violation(side, total, accounts)
}
