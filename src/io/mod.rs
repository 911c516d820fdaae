//! I/O module
//!
//! Handles CSV output for the demo driver.
//!
//! # Components
//!
//! - `csv_format` - CSV serialization of transaction history and balances

pub mod csv_format;

pub use csv_format::{write_balances_csv, write_transactions_csv, ExportError};
