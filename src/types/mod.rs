//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `user`: User identity and balance types
//! - `transaction`: Transaction log entries, receipts, and identifiers
//! - `error`: Error types for wallet operations

pub mod error;
pub mod transaction;
pub mod user;

pub use error::{BalanceKind, WalletError};
pub use transaction::{
    Direction, Receipt, Transaction, TransactionId, TransactionStatus, TransactionType,
};
pub use user::{FiatBalance, TokenBalance, User};
