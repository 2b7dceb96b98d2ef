//! Group Settler Library
//! # Overview
//!
//! This library turns a list of signed transactions into a short list of
//! peer-to-peer settlements that zeroes out every account balance.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (balances, transactions, settlements, errors)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Running balance accumulation
//!   - [`core::settler`] - Greedy largest-magnitude settlement matching
//!   - [`core::observer`] - Injectable run-log hooks
//! - [`io`] - CSV input/output handling
//! - [`pipeline`] - End-to-end orchestration with atomic output
//!
//! # Algorithm
//!
//! Balances are partitioned into creditors and debtors and held in two
//! max-heaps keyed by magnitude (ties broken by lexically smaller
//! label). Each iteration matches the largest creditor against the
//! largest debtor for `min(credit, |debt|)`, so at least one side
//! reaches zero and the loop emits at most N−1 settlements for N
//! non-zero accounts. The result is deterministic and fast, not
//! guaranteed minimal — the minimum-transaction-count problem is NP-hard.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{
    is_settled, Ledger, LogObserver, NoopObserver, SettlementObserver, SettlementRun, Settler,
    ZERO_TOLERANCE,
};
pub use crate::io::{write_settlements_csv, TransactionReader};
pub use crate::types::{AccountBalance, AccountLabel, SettleError, Settlement, TransactionRecord};
