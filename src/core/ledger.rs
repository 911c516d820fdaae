//! Ledger state and conversion operations
//!
//! This module provides the `Ledger` struct, the authoritative, exclusive
//! owner of one user's identity, fiat balance, token balances, and
//! transaction log.
//!
//! The Ledger is responsible for:
//! - Seeding and restoring the fixed demo state
//! - Converting fiat into tokens (deposit) and tokens into fiat (withdraw)
//! - Creating simulated incoming transfers and applying their confirmations
//! - Handing out defensive snapshots; callers never hold mutable aliases
//!
//! Every mutation computes all new balances with checked arithmetic before
//! committing any of them, so a failed operation leaves the state untouched.

use crate::core::rates::{unit_price_usd, usd_to_eth_rate, DEPOSIT_TARGET, SUPPORTED_TOKENS};
use crate::core::sequence::Sequence;
use crate::types::{
    Direction, FiatBalance, Receipt, TokenBalance, Transaction, TransactionId,
    TransactionStatus, TransactionType, User, WalletError,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Fixture identity of the demo user
pub const DEMO_USER_ID: &str = "user-001";
/// Fixture login identifier
pub const DEMO_EMAIL: &str = "demo@example.com";
/// Fixture receive address
pub const DEMO_WALLET_ADDRESS: &str = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";

/// Build the seeded demo user
///
/// Starting balances: $3000 fiat, 2.5 ETH, 1000 USDT, 500 USDC, plus one
/// settled deposit and one settled withdrawal already in the log (dated one
/// and two days before `now`).
fn initial_user(now: DateTime<Utc>) -> User {
    User {
        id: DEMO_USER_ID.to_string(),
        email: DEMO_EMAIL.to_string(),
        wallet_address: DEMO_WALLET_ADDRESS.to_string(),
        fiat_balance: FiatBalance {
            currency: "USD".to_string(),
            balance: Decimal::new(3000, 0),
            symbol: "$".to_string(),
        },
        token_balances: vec![
            TokenBalance {
                symbol: "ETH".to_string(),
                name: "Ethereum".to_string(),
                balance: Decimal::new(25, 1),
                usd_value: Decimal::new(4500, 0),
                icon: "/icons/eth.svg".to_string(),
            },
            TokenBalance {
                symbol: "USDT".to_string(),
                name: "Tether".to_string(),
                balance: Decimal::new(1000, 0),
                usd_value: Decimal::new(1000, 0),
                icon: "/icons/usdt.svg".to_string(),
            },
            TokenBalance {
                symbol: "USDC".to_string(),
                name: "USD Coin".to_string(),
                balance: Decimal::new(500, 0),
                usd_value: Decimal::new(500, 0),
                icon: "/icons/usdc.svg".to_string(),
            },
        ],
        transactions: vec![
            Transaction {
                id: "tx-001".to_string(),
                tx_type: TransactionType::Deposit,
                status: TransactionStatus::Success,
                amount: Decimal::new(1000, 0),
                currency: "USD".to_string(),
                timestamp: now - chrono::Duration::days(1),
                description: "Fiat deposit converted to ETH".to_string(),
                direction: Direction::Incoming,
            },
            Transaction {
                id: "tx-002".to_string(),
                tx_type: TransactionType::Withdraw,
                status: TransactionStatus::Success,
                amount: Decimal::new(500, 0),
                currency: "USDT".to_string(),
                timestamp: now - chrono::Duration::days(2),
                description: "USDT withdrawal to bank account".to_string(),
                direction: Direction::Outgoing,
            },
        ],
    }
}

/// USD valuation of `balance` units of `symbol` at the fixed unit price
fn revalued(symbol: &str, balance: Decimal) -> Result<Decimal, WalletError> {
    let price = unit_price_usd(symbol).ok_or_else(|| WalletError::unknown_token(symbol))?;
    balance
        .checked_mul(price)
        .ok_or_else(|| WalletError::arithmetic_overflow("revalue"))
}

/// Authoritative state of one user's wallet
///
/// Owns the user record, the deterministic sequence generator feeding the
/// simulated incoming transfers, and the transaction-id counter. All reads
/// leave through [`Ledger::snapshot`]; all writes go through the operation
/// methods, which either apply fully or not at all.
pub struct Ledger {
    user: User,
    sequence: Sequence,
    /// Monotonic id counter; deliberately not reset by
    /// [`Ledger::reset_to_initial`] so a confirmation scheduled before a
    /// reset can never collide with a post-reset transaction.
    next_tx: u64,
}

impl Ledger {
    /// Create a ledger seeded with the demo fixture
    ///
    /// `seed` drives the amount/token draws of simulated incoming
    /// transfers. The seeded log already contains `tx-001` and `tx-002`, so
    /// generated ids start at `tx-003`.
    pub fn new(seed: u64) -> Self {
        Ledger {
            user: initial_user(Utc::now()),
            sequence: Sequence::new(seed),
            next_tx: 3,
        }
    }

    /// Defensive copy of the current user state
    ///
    /// Callers cannot mutate the ledger through the snapshot.
    pub fn snapshot(&self) -> User {
        self.user.clone()
    }

    /// Restore the fixed demo state and replay the sequence from its seed
    ///
    /// The transaction-id counter is left untouched (see [`Ledger`]).
    pub fn reset_to_initial(&mut self) {
        self.user = initial_user(Utc::now());
        self.sequence.reset();
    }

    /// Convert fiat into the deposit target token
    ///
    /// Debits the fiat balance by `amount`, credits ETH at the fixed
    /// USD->ETH rate, recomputes the token's USD value, and records a
    /// settled deposit transaction at the head of the log.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0`
    /// - `InsufficientFunds` if `amount` exceeds the fiat balance
    ///
    /// No state is mutated on any failure.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Receipt, WalletError> {
        if amount <= Decimal::ZERO {
            return Err(WalletError::invalid_amount(amount));
        }

        let fiat_available = self.user.fiat_balance.balance;
        if amount > fiat_available {
            return Err(WalletError::insufficient_fiat(fiat_available, amount));
        }

        let token_amount = amount
            .checked_mul(usd_to_eth_rate())
            .ok_or_else(|| WalletError::arithmetic_overflow("deposit"))?;

        let token_index = self.token_index(DEPOSIT_TARGET)?;

        // Compute every new balance before committing any of them.
        let new_fiat = fiat_available
            .checked_sub(amount)
            .ok_or_else(|| WalletError::arithmetic_underflow("deposit"))?;
        let new_balance = self.user.token_balances[token_index]
            .balance
            .checked_add(token_amount)
            .ok_or_else(|| WalletError::arithmetic_overflow("deposit"))?;
        let new_usd_value = revalued(DEPOSIT_TARGET, new_balance)?;

        self.user.fiat_balance.balance = new_fiat;
        let token = &mut self.user.token_balances[token_index];
        token.balance = new_balance;
        token.usd_value = new_usd_value;

        let id = self.next_tx_id();
        let currency = self.user.fiat_balance.currency.clone();
        self.user.transactions.insert(
            0,
            Transaction {
                id: id.clone(),
                tx_type: TransactionType::Deposit,
                status: TransactionStatus::Success,
                amount,
                currency,
                timestamp: Utc::now(),
                description: format!("Fiat deposit converted to {token_amount:.4} {DEPOSIT_TARGET}"),
                direction: Direction::Incoming,
            },
        );

        Ok(Receipt::with_transaction(
            format!("Successfully converted ${amount} to {token_amount:.4} {DEPOSIT_TARGET}"),
            id,
        ))
    }

    /// Convert a token balance back into fiat
    ///
    /// Debits `amount` units of `token_symbol`, recomputes the token's USD
    /// value, credits the fiat balance at the token's fixed unit price, and
    /// records a settled withdrawal transaction at the head of the log.
    ///
    /// # Errors
    ///
    /// Preconditions are checked in order; the first failure wins:
    ///
    /// - `InvalidAmount` if `amount <= 0`
    /// - `UnknownToken` if `token_symbol` names no token balance
    /// - `InsufficientFunds` if `amount` exceeds the token balance
    /// - `MissingBankDetails` if either bank field is empty
    ///
    /// No state is mutated on any failure.
    pub fn withdraw(
        &mut self,
        token_symbol: &str,
        amount: Decimal,
        bank_account: &str,
        routing_code: &str,
    ) -> Result<Receipt, WalletError> {
        if amount <= Decimal::ZERO {
            return Err(WalletError::invalid_amount(amount));
        }

        let token_index = self.token_index(token_symbol)?;

        let token_available = self.user.token_balances[token_index].balance;
        if amount > token_available {
            return Err(WalletError::insufficient_token(token_available, amount));
        }

        if bank_account.is_empty() || routing_code.is_empty() {
            return Err(WalletError::MissingBankDetails);
        }

        let price =
            unit_price_usd(token_symbol).ok_or_else(|| WalletError::unknown_token(token_symbol))?;
        let usd_amount = amount
            .checked_mul(price)
            .ok_or_else(|| WalletError::arithmetic_overflow("withdraw"))?;

        let new_balance = token_available
            .checked_sub(amount)
            .ok_or_else(|| WalletError::arithmetic_underflow("withdraw"))?;
        let new_usd_value = revalued(token_symbol, new_balance)?;
        let new_fiat = self
            .user
            .fiat_balance
            .balance
            .checked_add(usd_amount)
            .ok_or_else(|| WalletError::arithmetic_overflow("withdraw"))?;

        let token = &mut self.user.token_balances[token_index];
        token.balance = new_balance;
        token.usd_value = new_usd_value;
        self.user.fiat_balance.balance = new_fiat;

        let id = self.next_tx_id();
        self.user.transactions.insert(
            0,
            Transaction {
                id: id.clone(),
                tx_type: TransactionType::Withdraw,
                status: TransactionStatus::Success,
                amount,
                currency: token_symbol.to_string(),
                timestamp: Utc::now(),
                description: format!("{amount} {token_symbol} withdrawn to bank account"),
                direction: Direction::Outgoing,
            },
        );

        Ok(Receipt::with_transaction(
            format!("Successfully converted {amount} {token_symbol} to ${usd_amount:.2}"),
            id,
        ))
    }

    /// Create a simulated externally-originated incoming transfer
    ///
    /// Draws the amount (10..=109) and token (uniform over the supported
    /// set) from the sequence generator, prepends a pending receive
    /// transaction, and returns a copy of it. Balances are untouched until
    /// [`Ledger::confirm_incoming`] runs.
    pub fn generate_incoming(&mut self) -> Transaction {
        let amount = Decimal::from(self.sequence.next_below(100) + 10);
        let token_index = self.sequence.next_below(SUPPORTED_TOKENS.len() as u64) as usize;
        let symbol = SUPPORTED_TOKENS[token_index];

        let id = self.next_tx_id();
        let tx = Transaction {
            id,
            tx_type: TransactionType::Receive,
            status: TransactionStatus::Pending,
            amount,
            currency: symbol.to_string(),
            timestamp: Utc::now(),
            description: format!("Incoming {amount} {symbol}"),
            direction: Direction::Incoming,
        };

        self.user.transactions.insert(0, tx.clone());
        tx
    }

    /// Apply the delayed confirmation of an incoming transfer
    ///
    /// Looks the transaction up by id. If it is still present and pending,
    /// marks it successful and credits the token balance by the transaction
    /// amount (USD value recomputed); returns `true`. In every other case
    /// (transaction gone after a reset, already settled, or the credit
    /// would not apply cleanly) this is a no-op returning `false`; it never
    /// recreates the transaction or resurrects stale state.
    pub fn confirm_incoming(&mut self, id: &str) -> bool {
        let position = match self.user.transactions.iter().position(|t| t.id == id) {
            Some(position) => position,
            None => return false,
        };
        if self.user.transactions[position].status != TransactionStatus::Pending {
            return false;
        }

        let amount = self.user.transactions[position].amount;
        let currency = self.user.transactions[position].currency.clone();

        let token_index = match self.token_index(&currency) {
            Ok(index) => index,
            Err(_) => return false,
        };
        let new_balance = match self.user.token_balances[token_index]
            .balance
            .checked_add(amount)
        {
            Some(balance) => balance,
            None => return false,
        };
        let new_usd_value = match revalued(&currency, new_balance) {
            Ok(value) => value,
            Err(_) => return false,
        };

        let token = &mut self.user.token_balances[token_index];
        token.balance = new_balance;
        token.usd_value = new_usd_value;
        self.user.transactions[position].status = TransactionStatus::Success;
        true
    }

    fn token_index(&self, symbol: &str) -> Result<usize, WalletError> {
        self.user
            .token_balances
            .iter()
            .position(|t| t.symbol == symbol)
            .ok_or_else(|| WalletError::unknown_token(symbol))
    }

    fn next_tx_id(&mut self) -> TransactionId {
        let id = format!("tx-{:03}", self.next_tx);
        self.next_tx += 1;
        id
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Sequence::DEFAULT_SEED)
    }
}
