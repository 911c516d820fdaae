//! Error types for the ramp ledger
//!
//! This module defines all error outcomes a wallet operation can produce.
//! Every variant is caller-recoverable: the ledger is left unmodified on any
//! failure, and the surrounding UI surfaces the display message verbatim and
//! lets the user retry.
//!
//! # Error Categories
//!
//! - **Authentication**: malformed identifier, wrong one-time code, or a
//!   ledger operation attempted before the session was unlocked
//! - **Conversion**: non-positive amounts, unknown tokens, insufficient
//!   balances, missing bank details
//! - **Arithmetic**: overflow/underflow guards around balance math

use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Which side of the wallet a balance failure refers to
///
/// The fiat and token sides share one `InsufficientFunds` variant; the kind
/// selects the message the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceKind {
    Fiat,
    Token,
}

impl fmt::Display for BalanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceKind::Fiat => write!(f, "fiat"),
            BalanceKind::Token => write!(f, "token"),
        }
    }
}

/// Main error type for wallet operations
///
/// Display strings are the exact messages the demo UI shows; the variant
/// fields carry the context callers need programmatically.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalletError {
    /// Identifier failed the placeholder format check (contains no `@`)
    #[error("Invalid email format")]
    InvalidFormat {
        /// The identifier that was rejected
        identifier: String,
    },

    /// One-time code did not match the fixed demo code, or no code was
    /// requested yet
    #[error("Invalid OTP")]
    InvalidCode,

    /// A ledger operation was attempted before `verify_code` succeeded
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Amount was zero or negative
    #[error("Amount must be greater than 0")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Requested amount exceeds the available balance
    #[error("Insufficient {kind} balance")]
    InsufficientFunds {
        /// Whether the fiat or a token balance fell short
        kind: BalanceKind,
        /// Available balance
        available: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// Symbol does not name a token balance of this user
    #[error("Invalid token")]
    UnknownToken {
        /// The symbol that was not found
        symbol: String,
    },

    /// Bank account or routing code was empty
    #[error("Bank details are required")]
    MissingBankDetails,

    /// Balance addition would overflow
    ///
    /// Guard around checked Decimal math; the operation is rejected and the
    /// ledger left untouched.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Balance subtraction would underflow
    #[error("Arithmetic underflow in {operation}")]
    ArithmeticUnderflow {
        /// Operation that would underflow
        operation: String,
    },
}

// Helper functions for creating common errors

impl WalletError {
    /// Create an InvalidFormat error
    pub fn invalid_format(identifier: &str) -> Self {
        WalletError::InvalidFormat {
            identifier: identifier.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        WalletError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error for the fiat balance
    pub fn insufficient_fiat(available: Decimal, requested: Decimal) -> Self {
        WalletError::InsufficientFunds {
            kind: BalanceKind::Fiat,
            available,
            requested,
        }
    }

    /// Create an InsufficientFunds error for a token balance
    pub fn insufficient_token(available: Decimal, requested: Decimal) -> Self {
        WalletError::InsufficientFunds {
            kind: BalanceKind::Token,
            available,
            requested,
        }
    }

    /// Create an UnknownToken error
    pub fn unknown_token(symbol: &str) -> Self {
        WalletError::UnknownToken {
            symbol: symbol.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        WalletError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create an ArithmeticUnderflow error
    pub fn arithmetic_underflow(operation: &str) -> Self {
        WalletError::ArithmeticUnderflow {
            operation: operation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::invalid_format(
        WalletError::invalid_format("not-an-email"),
        "Invalid email format"
    )]
    #[case::invalid_code(WalletError::InvalidCode, "Invalid OTP")]
    #[case::not_authenticated(WalletError::NotAuthenticated, "Not authenticated")]
    #[case::invalid_amount(
        WalletError::invalid_amount(Decimal::ZERO),
        "Amount must be greater than 0"
    )]
    #[case::insufficient_fiat(
        WalletError::insufficient_fiat(Decimal::new(3000, 0), Decimal::new(5000, 0)),
        "Insufficient fiat balance"
    )]
    #[case::insufficient_token(
        WalletError::insufficient_token(Decimal::new(25, 1), Decimal::new(10, 0)),
        "Insufficient token balance"
    )]
    #[case::unknown_token(WalletError::unknown_token("DOGE"), "Invalid token")]
    #[case::missing_bank_details(
        WalletError::MissingBankDetails,
        "Bank details are required"
    )]
    #[case::overflow(
        WalletError::arithmetic_overflow("deposit"),
        "Arithmetic overflow in deposit"
    )]
    #[case::underflow(
        WalletError::arithmetic_underflow("withdraw"),
        "Arithmetic underflow in withdraw"
    )]
    fn test_error_display(#[case] error: WalletError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::fiat(
        WalletError::insufficient_fiat(Decimal::ONE, Decimal::TWO),
        BalanceKind::Fiat
    )]
    #[case::token(
        WalletError::insufficient_token(Decimal::ONE, Decimal::TWO),
        BalanceKind::Token
    )]
    fn test_insufficient_funds_kind(#[case] error: WalletError, #[case] expected: BalanceKind) {
        match error {
            WalletError::InsufficientFunds { kind, .. } => assert_eq!(kind, expected),
            other => panic!("Expected InsufficientFunds, got {:?}", other),
        }
    }
}
