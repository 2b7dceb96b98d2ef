//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row conversion, output serialization)
//! - `reader` - Streaming transaction reader with strict header validation

pub mod csv_format;
pub mod reader;

pub use csv_format::{convert_csv_row, format_amount, write_settlements_csv, CsvRow};
pub use reader::TransactionReader;
