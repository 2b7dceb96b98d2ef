//! Transaction input reader
//!
//! Streams transaction records from the input CSV file. The header is
//! validated up front: a file whose header is not literally
//! `account,transaction` is rejected before a single row is ingested.
//!
//! # Error Handling
//!
//! Unlike tools that skip bad rows and continue, every input error here
//! is fatal: the settlement output is only meaningful against a fully
//! ingested transaction list, so the caller aborts on the first `Err`
//! yielded by the iterator.
//!
//! # Memory
//!
//! Rows are read one at a time; memory usage is O(accounts), not
//! O(file size).

use crate::io::csv_format::{convert_csv_row, CsvRow, INPUT_HEADER};
use crate::types::{SettleError, TransactionRecord};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Streaming reader over the input transaction table
///
/// Implements `Iterator`, yielding one `TransactionRecord` per data row.
///
/// # Examples
///
/// ```no_run
/// use group_settler::io::TransactionReader;
/// use std::path::Path;
///
/// let reader = TransactionReader::new(Path::new("transactions.csv")).unwrap();
/// for record in reader {
///     let record = record.unwrap();
///     println!("{} moved {}", record.account, record.amount);
/// }
/// ```
#[derive(Debug)]
pub struct TransactionReader {
    reader: csv::Reader<File>,
    line: u64,
}

impl TransactionReader {
    /// Open the input file and validate its header
    ///
    /// # Errors
    ///
    /// - [`SettleError::FileNotFound`] if the path does not exist
    /// - [`SettleError::Io`] for any other open failure
    /// - [`SettleError::InvalidHeader`] if the header row is not exactly
    ///   `account,transaction`
    pub fn new(path: &Path) -> Result<Self, SettleError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SettleError::file_not_found(path)
            } else {
                SettleError::from(e)
            }
        })?;

        let mut reader = ReaderBuilder::new().from_reader(file);

        let headers = reader.headers()?;
        if headers.iter().ne(INPUT_HEADER.iter().copied()) {
            let found = headers.iter().collect::<Vec<_>>().join(",");
            return Err(SettleError::invalid_header(&found));
        }

        Ok(Self { reader, line: 1 })
    }
}

impl Iterator for TransactionReader {
    type Item = Result<TransactionRecord, SettleError>;

    /// Read and convert the next data row
    ///
    /// Line numbers in errors are 1-based file lines, counting the
    /// header as line 1.
    fn next(&mut self) -> Option<Self::Item> {
        let mut rows = self.reader.deserialize::<CsvRow>();

        match rows.next()? {
            Ok(row) => {
                self.line += 1;
                Some(convert_csv_row(row, self.line))
            }
            Err(e) => {
                self.line += 1;
                Some(Err(e.into()))
            }
        }
    }
}
