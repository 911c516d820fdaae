//! Transaction-related types for the ramp ledger
//!
//! This module defines the transaction record kept in the per-user log,
//! together with its type, status, and direction discriminants, and the
//! receipt returned by mutating wallet operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction identifier
///
/// Opaque unique string of the form `tx-NNN`, assigned from a counter that
/// is monotonic for the lifetime of a ledger (it survives demo resets, so a
/// confirmation scheduled before a reset can never resolve to a transaction
/// created after it).
pub type TransactionId = String;

/// Transaction types supported by the wallet ledger
///
/// Deposits convert fiat into a token, withdrawals convert a token back into
/// fiat, and receives are externally-originated incoming transfers that are
/// credited once confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Fiat converted into a token balance
    ///
    /// Completes synchronously: the transaction is created already settled.
    Deposit,

    /// Token balance converted back into fiat
    ///
    /// Completes synchronously, like [`TransactionType::Deposit`].
    Withdraw,

    /// Externally-originated incoming transfer
    ///
    /// Created `pending` and later confirmed by the scheduler; balances are
    /// only credited at confirmation time.
    Receive,
}

/// Settlement status of a transaction
///
/// `Success` and `Failed` are terminal. The only permitted post-creation
/// transition is `Pending -> Success`, performed by the confirmation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Awaiting confirmation (receive transactions only)
    Pending,
    /// Settled; balances reflect the transaction
    Success,
    /// Terminally failed; balances are untouched
    Failed,
}

/// Direction of value flow relative to the wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// A single entry in the per-user transaction log
///
/// The log is ordered newest first; new transactions are prepended. Amounts
/// are denominated in `currency`, which is either the fiat ISO code (`USD`)
/// or a token symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// Unique identifier, assigned at creation
    pub id: TransactionId,

    /// What kind of operation produced this entry
    #[serde(rename = "type")]
    pub tx_type: TransactionType,

    /// Settlement status; see [`TransactionStatus`] for the lifecycle
    pub status: TransactionStatus,

    /// Amount in `currency` units
    pub amount: Decimal,

    /// Denomination of `amount` (fiat code or token symbol)
    pub currency: String,

    /// Creation time (UTC)
    pub timestamp: DateTime<Utc>,

    /// Human-readable summary surfaced by the UI
    pub description: String,

    /// Whether value flowed into or out of the wallet
    pub direction: Direction,
}

impl Transaction {
    /// Whether this transaction is still awaiting confirmation
    pub fn is_pending(&self) -> bool {
        self.status == TransactionStatus::Pending
    }
}

/// Result payload of a successful wallet operation
///
/// Mirrors the `{ success, message, transactionId? }` shape the surrounding
/// UI consumes; `success` is carried by `Result` instead of a flag. The
/// message is surfaced verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// Human-readable outcome message
    pub message: String,

    /// Identifier of the transaction created by the operation, if any
    ///
    /// `None` for authentication steps, which do not touch the log.
    pub transaction_id: Option<TransactionId>,
}

impl Receipt {
    /// Receipt for an operation that did not create a transaction
    pub fn message_only(message: impl Into<String>) -> Self {
        Receipt {
            message: message.into(),
            transaction_id: None,
        }
    }

    /// Receipt for an operation that appended a transaction to the log
    pub fn with_transaction(message: impl Into<String>, id: TransactionId) -> Self {
        Receipt {
            message: message.into(),
            transaction_id: Some(id),
        }
    }
}
