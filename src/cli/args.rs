use clap::Parser;
use std::path::PathBuf;

/// Settle a group's shared expenses into a short list of payments
#[derive(Parser, Debug)]
#[command(name = "group-settler")]
#[command(
    about = "Compute who pays whom to zero out a group's transaction balances",
    long_about = None
)]
pub struct CliArgs {
    /// Input CSV of signed transactions (header: account,transaction)
    #[arg(value_name = "TRANSACTIONS", help = "Path to the input transaction CSV")]
    pub transaction_file: PathBuf,

    /// Output CSV of settlements (header: sender,receiver,settlement)
    #[arg(value_name = "SETTLEMENTS", help = "Path the settlement CSV is written to")]
    pub settlement_file: PathBuf,

    /// Suppress the per-transaction and per-settlement run log
    #[arg(long, short)]
    pub quiet: bool,
}
