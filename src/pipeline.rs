//! End-to-end settlement pipeline
//!
//! Orchestrates one full run: stream the input CSV into the Ledger,
//! settle the resulting balances, and commit the settlement CSV to disk.
//! The core components stay I/O-free; this module is the only place that
//! touches the filesystem.
//!
//! # Atomicity
//!
//! The output is written to a temporary file in the destination
//! directory and atomically renamed into place, so a failed run never
//! leaves a partial settlement file behind.

use crate::core::{report_credits, Ledger, SettlementObserver, SettlementRun, Settler};
use crate::io::{write_settlements_csv, TransactionReader};
use crate::types::SettleError;
use std::path::Path;
use tempfile::NamedTempFile;

/// Run the full pipeline from input path to output path
///
/// Any failure aborts the run: input format errors before settlement,
/// conservation violations after matching, I/O errors at either
/// boundary. On success the settlement run is returned for callers that
/// want to inspect or summarize it.
///
/// # Errors
///
/// See [`SettleError`]; every variant this tool can produce flows
/// through here.
pub fn run(
    input: &Path,
    output: &Path,
    observer: &mut dyn SettlementObserver,
) -> Result<SettlementRun, SettleError> {
    let reader = TransactionReader::new(input)?;

    let mut ledger = Ledger::new();
    for record in reader {
        let record = record?;
        ledger.record(&record.account, record.amount, observer);
    }

    // Balance summary before matching, largest credit first.
    report_credits(ledger.balances(), observer);

    let run = Settler::from_balances(ledger.balances()).settle(observer)?;

    // Projected balances if every settlement is made; all zero.
    report_credits(&run.closing, observer);

    commit_settlements(&run, output)?;

    Ok(run)
}

/// Write the settlement CSV atomically
fn commit_settlements(run: &SettlementRun, output: &Path) -> Result<(), SettleError> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    write_settlements_csv(&run.settlements, temp.as_file_mut())?;

    temp.persist(output).map_err(|e| SettleError::Io {
        message: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NoopObserver;
    use rust_decimal_macros::dec;
    use std::fs;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_run_produces_settlement_file() {
        let input = create_temp_csv("account,transaction\nA,10\nB,-10\n");
        let dir = tempdir().unwrap();
        let output = dir.path().join("settlements.csv");

        let run = run(input.path(), &output, &mut NoopObserver).unwrap();

        assert_eq!(run.settlements.len(), 1);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "sender,receiver,settlement\nB,A,10\n"
        );
    }

    #[test]
    fn test_run_returns_projected_zero_balances() {
        let input = create_temp_csv("account,transaction\nA,30\nB,-10\nC,-20\n");
        let dir = tempdir().unwrap();
        let output = dir.path().join("settlements.csv");

        let run = run(input.path(), &output, &mut NoopObserver).unwrap();

        assert!(run
            .closing
            .iter()
            .all(|balance| balance.credit == dec!(0)));
    }

    #[test]
    fn test_run_aborts_on_bad_amount_without_output() {
        let input = create_temp_csv("account,transaction\nA,10\nB,ten\n");
        let dir = tempdir().unwrap();
        let output = dir.path().join("settlements.csv");

        let result = run(input.path(), &output, &mut NoopObserver);

        assert!(matches!(result, Err(SettleError::InvalidAmount { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_aborts_on_conservation_violation_without_output() {
        let input = create_temp_csv("account,transaction\nA,10\n");
        let dir = tempdir().unwrap();
        let output = dir.path().join("settlements.csv");

        let result = run(input.path(), &output, &mut NoopObserver);

        assert!(matches!(
            result,
            Err(SettleError::ConservationViolation { .. })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_overwrites_existing_output() {
        let input = create_temp_csv("account,transaction\nA,5\nB,-5\n");
        let dir = tempdir().unwrap();
        let output = dir.path().join("settlements.csv");
        fs::write(&output, "stale contents").unwrap();

        run(input.path(), &output, &mut NoopObserver).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "sender,receiver,settlement\nB,A,5\n"
        );
    }
}
