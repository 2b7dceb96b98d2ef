//! CSV format handling for transaction input and settlement output
//!
//! This module centralizes all CSV format concerns:
//! - CsvRow structure for deserializing input rows
//! - Conversion from raw rows to domain types
//! - Settlement output serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{Settlement, SettleError, TransactionRecord};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Required input header, in column order
pub const INPUT_HEADER: [&str; 2] = ["account", "transaction"];

/// Output header, in column order
pub const OUTPUT_HEADER: [&str; 3] = ["sender", "receiver", "settlement"];

/// Raw input row as deserialized from CSV
///
/// The transaction field stays textual here so a bad number can be
/// reported with its original text and line number.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRow {
    pub account: String,
    pub transaction: String,
}

/// Convert a raw CSV row to a TransactionRecord
///
/// The account label is taken verbatim; the transaction field is trimmed
/// and parsed as an exact decimal. A non-numeric field is a fatal input
/// format error.
pub fn convert_csv_row(row: CsvRow, line: u64) -> Result<TransactionRecord, SettleError> {
    let amount = Decimal::from_str(row.transaction.trim())
        .map_err(|_| SettleError::invalid_amount(&row.account, &row.transaction, line))?;

    Ok(TransactionRecord {
        account: row.account,
        amount,
    })
}

/// Format a settlement amount for output
///
/// Plain decimal with no forced trailing zeros: `20.00` prints as `20`,
/// `0.50` as `0.5`.
pub fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// Write the settlement list as CSV
///
/// Emits the `sender,receiver,settlement` header followed by one row per
/// settlement, in the order the matching loop produced them.
pub fn write_settlements_csv(
    settlements: &[Settlement],
    output: &mut dyn Write,
) -> Result<(), SettleError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(OUTPUT_HEADER)?;

    for settlement in settlements {
        writer.write_record(&[
            settlement.payer.clone(),
            settlement.payee.clone(),
            format_amount(settlement.amount),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::integer("30", dec!(30))]
    #[case::negative("-10", dec!(-10))]
    #[case::fractional("12.5", dec!(12.5))]
    #[case::zero("0", dec!(0))]
    #[case::surrounding_whitespace("  7.25  ", dec!(7.25))]
    #[case::leading_plus("+3", dec!(3))]
    fn test_convert_csv_row_parses_amounts(#[case] text: &str, #[case] expected: Decimal) {
        let row = CsvRow {
            account: "Alice".to_string(),
            transaction: text.to_string(),
        };

        let record = convert_csv_row(row, 2).unwrap();
        assert_eq!(record.account, "Alice");
        assert_eq!(record.amount, expected);
    }

    #[rstest]
    #[case::words("ten")]
    #[case::empty("")]
    #[case::whitespace_only("   ")]
    #[case::double_dot("1.2.3")]
    #[case::not_a_number("NaN")]
    fn test_convert_csv_row_rejects_non_numeric(#[case] text: &str) {
        let row = CsvRow {
            account: "Alice".to_string(),
            transaction: text.to_string(),
        };

        let result = convert_csv_row(row, 5);
        match result {
            Err(SettleError::InvalidAmount { account, amount, line }) => {
                assert_eq!(account, "Alice");
                assert_eq!(amount, text);
                assert_eq!(line, 5);
            }
            other => panic!("expected InvalidAmount, got {:?}", other),
        }
    }

    #[rstest]
    #[case::whole(dec!(20.00), "20")]
    #[case::fraction(dec!(0.50), "0.5")]
    #[case::untouched(dec!(12.34), "12.34")]
    #[case::integer(dec!(7), "7")]
    fn test_format_amount_drops_trailing_zeros(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[rstest]
    #[case::empty(
        vec![],
        "sender,receiver,settlement\n"
    )]
    #[case::single(
        vec![Settlement::new("Bob", "Alice", dec!(10))],
        "sender,receiver,settlement\nBob,Alice,10\n"
    )]
    #[case::ordered_rows(
        vec![
            Settlement::new("Carol", "Alice", dec!(20)),
            Settlement::new("Bob", "Alice", dec!(10.5)),
        ],
        "sender,receiver,settlement\nCarol,Alice,20\nBob,Alice,10.5\n"
    )]
    fn test_write_settlements_csv(#[case] settlements: Vec<Settlement>, #[case] expected: &str) {
        let mut output = Vec::new();
        write_settlements_csv(&settlements, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_write_settlements_csv_quotes_labels_with_commas() {
        let settlements = vec![Settlement::new("Doe, John", "Alice", dec!(5))];
        let mut output = Vec::new();
        write_settlements_csv(&settlements, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "sender,receiver,settlement\n\"Doe, John\",Alice,5\n"
        );
    }
}
