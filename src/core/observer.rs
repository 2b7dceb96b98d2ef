//! Settlement observer hooks
//!
//! Logging of transactions, balances, and proposed settlements is a
//! presentational concern of the surrounding tool, not of the core
//! algorithm. The core notifies an injectable observer instead of holding
//! any global logging state; callers that want the human-readable run log
//! plug in [`LogObserver`], everything else (tests, benchmarks) uses
//! [`NoopObserver`].

use crate::types::AccountBalance;
use rust_decimal::Decimal;
use tracing::info;

/// Hooks the core notifies while ingesting and settling
///
/// All methods have empty default bodies, so implementors only override
/// the events they care about.
pub trait SettlementObserver {
    /// A transaction was recorded against an account
    fn transaction_recorded(&mut self, _account: &str, _amount: Decimal) {}

    /// An account's net balance was reported (before or after settlement)
    fn credit_reported(&mut self, _account: &str, _credit: Decimal) {}

    /// The matching loop emitted a settlement
    fn settlement_proposed(&mut self, _payer: &str, _payee: &str, _amount: Decimal) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SettlementObserver for NoopObserver {}

/// Observer that emits the run log through `tracing`
///
/// Mirrors the tool's original log lines: each transaction is reported
/// with its human-readable direction (paid vs. received), each balance as
/// a net worth, each settlement as a proposed payment.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SettlementObserver for LogObserver {
    fn transaction_recorded(&mut self, account: &str, amount: Decimal) {
        if amount.is_sign_positive() && !amount.is_zero() {
            info!(account, amount = %amount.normalize(), "paid into the pool");
        } else if amount.is_sign_negative() {
            info!(account, amount = %(-amount).normalize(), "received from the pool");
        }
    }

    fn credit_reported(&mut self, account: &str, credit: Decimal) {
        info!(account, credit = %credit.normalize(), "net balance");
    }

    fn settlement_proposed(&mut self, payer: &str, payee: &str, amount: Decimal) {
        info!(payer, payee, amount = %amount.normalize(), "should pay");
    }
}

/// Report every balance through the observer, largest credit first
///
/// Ordering is (credit descending, label ascending), matching the order a
/// human expects to read the balance summary in.
pub fn report_credits(balances: &[AccountBalance], observer: &mut dyn SettlementObserver) {
    let mut sorted: Vec<&AccountBalance> = balances.iter().collect();
    sorted.sort_by(|a, b| b.credit.cmp(&a.credit).then_with(|| a.label.cmp(&b.label)));

    for balance in sorted {
        observer.credit_reported(&balance.label, balance.credit);
    }
}
