//! Group Settler CLI
//!
//! Command-line interface for settling a group's shared expenses.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv settlements.csv
//! cargo run -- --quiet transactions.csv settlements.csv
//! RUST_LOG=debug cargo run -- transactions.csv settlements.csv
//! ```
//!
//! The program reads signed transactions from the input CSV, accumulates
//! them into per-account balances, computes the settlements that zero
//! those balances out, and writes them to the output CSV.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (bad input format, conservation violation, I/O failure)

use group_settler::cli;
use group_settler::core::{LogObserver, NoopObserver, SettlementObserver};
use group_settler::pipeline;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // The run log is an observer the core notifies; --quiet swaps it out.
    let mut log = LogObserver;
    let mut noop = NoopObserver;
    let observer: &mut dyn SettlementObserver = if args.quiet { &mut noop } else { &mut log };

    if let Err(e) = pipeline::run(&args.transaction_file, &args.settlement_file, observer) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
