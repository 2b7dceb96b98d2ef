//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account labels and balances
//! - `transaction`: Input transaction records
//! - `settlement`: Proposed settlement payments
//! - `error`: Error types for the settlement tool

pub mod account;
pub mod error;
pub mod settlement;
pub mod transaction;

pub use account::{AccountBalance, AccountLabel};
pub use error::{ImbalanceSide, SettleError};
pub use settlement::Settlement;
pub use transaction::TransactionRecord;
