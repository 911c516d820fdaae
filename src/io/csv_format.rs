//! CSV output for wallet state
//!
//! Serializes a user's transaction history and balance summary for the demo
//! driver. Transactions serialize directly; balances flatten the fiat and
//! token positions into one uniform row shape.

use crate::types::{Transaction, User};
use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;

/// Errors produced while writing CSV output
#[derive(Debug, Error)]
pub enum ExportError {
    /// I/O failure on the underlying writer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or formatting failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// One balance line: the fiat position or a token position
#[derive(Debug, Serialize)]
struct BalanceRow<'a> {
    asset: &'a str,
    name: &'a str,
    balance: Decimal,
    usd_value: Decimal,
}

/// Write the transaction log as CSV, newest first
///
/// Header: `id,type,status,amount,currency,timestamp,description,direction`.
pub fn write_transactions_csv<W: Write>(
    transactions: &[Transaction],
    output: W,
) -> Result<(), ExportError> {
    let mut writer = Writer::from_writer(output);
    for tx in transactions {
        writer.serialize(tx)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the balance summary as CSV: fiat first, then each token position
///
/// Header: `asset,name,balance,usd_value`. The fiat row values USD at par.
pub fn write_balances_csv<W: Write>(user: &User, output: W) -> Result<(), ExportError> {
    let mut writer = Writer::from_writer(output);

    writer.serialize(BalanceRow {
        asset: &user.fiat_balance.currency,
        name: "US Dollar",
        balance: user.fiat_balance.balance,
        usd_value: user.fiat_balance.balance,
    })?;

    for token in &user.token_balances {
        writer.serialize(BalanceRow {
            asset: &token.symbol,
            name: &token.name,
            balance: token.balance,
            usd_value: token.usd_value,
        })?;
    }

    writer.flush()?;
    Ok(())
}
