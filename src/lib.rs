//! Ramp Ledger Library
//! # Overview
//!
//! This library provides an in-memory simulation of a custodial fiat/crypto
//! on-off ramp wallet: two-step authentication, fiat<->token conversion, and
//! asynchronous confirmation of simulated incoming transfers, with balances
//! and the transaction log kept mutually consistent.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (User, balances, Transaction, errors)
//! - [`cli`] - CLI arguments parsing for the demo driver
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Authoritative balance and transaction state
//!   - [`core::auth`] - Login state machine gating ledger access
//!   - [`core::scheduler`] - Delayed confirmation of incoming transfers
//!   - [`core::session`] - Session facade combining the above
//! - [`io`] - CSV output of transaction history and balances
//!
//! # Wallet Operations
//!
//! A session supports six operations once authenticated:
//!
//! - **Deposit**: Convert fiat into the target token at a fixed rate
//! - **Withdraw**: Convert a token back into fiat at its fixed unit price
//! - **Receive**: Simulated external transfer, pending until confirmed
//! - **Snapshot**: Read-only copy of balances and the transaction log
//! - **Reset**: Restore the seeded demo fixture
//! - **Incoming trigger**: Create a pending receive and schedule settlement
//!
//! # Invariants
//!
//! - The fiat balance never goes negative; failed operations mutate nothing
//! - Every token's USD value is recomputed from its balance after each move
//! - `pending -> success` is the only post-creation status transition and
//!   only the confirmation path performs it
//! - Total USD value drifts only by the documented deposit-rate spread

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{
    AuthFlow, AuthStage, ConfirmationScheduler, DemoConfig, LatencyProfile, Ledger, SessionId,
    SessionRegistry, Sequence, WalletSession,
};
pub use crate::io::{write_balances_csv, write_transactions_csv, ExportError};
pub use crate::types::{
    BalanceKind, Direction, FiatBalance, Receipt, TokenBalance, Transaction, TransactionId,
    TransactionStatus, TransactionType, User, WalletError,
};
