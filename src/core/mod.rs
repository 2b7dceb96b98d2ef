//! Core business logic module
//!
//! This module contains the two core components and their observer seam:
//! - `ledger` - Running balance accumulation
//! - `settler` - Greedy largest-magnitude settlement matching
//! - `observer` - Injectable hooks for the run log

pub mod ledger;
pub mod observer;
pub mod settler;

pub use ledger::Ledger;
pub use observer::{report_credits, LogObserver, NoopObserver, SettlementObserver};
pub use settler::{is_settled, SettlementRun, Settler, ZERO_TOLERANCE};
