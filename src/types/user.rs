//! Balance and user types for the ramp ledger
//!
//! This module defines the user record and the fiat/token balance structures
//! the ledger owns. All amounts use [`Decimal`] with checked arithmetic at
//! the mutation sites; the types themselves are plain data.

use super::transaction::Transaction;
use rust_decimal::Decimal;

/// Fiat side of the wallet
///
/// Invariant: `balance >= 0` at all times; no operation may drive it
/// negative.
#[derive(Debug, Clone, PartialEq)]
pub struct FiatBalance {
    /// ISO currency code (e.g. `USD`)
    pub currency: String,

    /// Current balance in `currency` units
    pub balance: Decimal,

    /// Display glyph (e.g. `$`)
    pub symbol: String,
}

/// One token position in the wallet
///
/// Invariant: `usd_value` is always `balance * unit_price_usd(symbol)` and is
/// recomputed immediately after any balance mutation; it is never set
/// independently.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBalance {
    /// Token symbol, unique within the owning user
    pub symbol: String,

    /// Full token name (e.g. `Ethereum`)
    pub name: String,

    /// Current balance in token units
    pub balance: Decimal,

    /// USD valuation derived from `balance` and the fixed unit price
    pub usd_value: Decimal,

    /// Asset path for the token icon; opaque to the ledger
    pub icon: String,
}

/// One user's identity plus embedded ledger data
///
/// Exactly one instance exists per session and is owned exclusively by the
/// ledger; everything handed out across the API boundary is a clone.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Stable user identifier
    pub id: String,

    /// Login identifier
    pub email: String,

    /// On-chain receive address (opaque string)
    pub wallet_address: String,

    /// Fiat side of the wallet
    pub fiat_balance: FiatBalance,

    /// Token positions, ordered, unique by symbol
    pub token_balances: Vec<TokenBalance>,

    /// Transaction log, newest first
    pub transactions: Vec<Transaction>,
}

impl User {
    /// Look up a token position by symbol
    pub fn token(&self, symbol: &str) -> Option<&TokenBalance> {
        self.token_balances.iter().find(|t| t.symbol == symbol)
    }

    /// Look up a transaction by id
    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Total USD-equivalent value of the wallet
    ///
    /// Fiat balance plus the sum of all token `usd_value` fields. Used by
    /// conservation checks; display formatting lives with the UI.
    pub fn total_usd_value(&self) -> Decimal {
        self.token_balances
            .iter()
            .fold(self.fiat_balance.balance, |acc, t| acc + t.usd_value)
    }
}
