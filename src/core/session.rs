//! Wallet session facade
//!
//! `WalletSession` ties the pieces together for one demo session: the
//! authentication flow gates access, the ledger owns the state, and the
//! confirmation scheduler settles simulated incoming transfers. This is the
//! surface the (out-of-scope) UI talks to.
//!
//! Every ledger mutation runs under the session's single ledger lock, so
//! deposits, withdrawals, confirmations, and resets serialize per user.
//! The optional simulated API latency reproduces the pacing of the demo
//! front end and is zeroed by [`DemoConfig::instant`].

use crate::core::auth::AuthFlow;
use crate::core::config::{DemoConfig, LatencyProfile};
use crate::core::ledger::Ledger;
use crate::core::scheduler::ConfirmationScheduler;
use crate::types::{Receipt, Transaction, User, WalletError};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// One authenticated demo session over one user's ledger
pub struct WalletSession {
    auth: Mutex<AuthFlow>,
    ledger: Arc<Mutex<Ledger>>,
    scheduler: ConfirmationScheduler,
    latency: LatencyProfile,
}

impl WalletSession {
    /// Create a session from its configuration
    ///
    /// The ledger starts at the seeded demo fixture; the session starts
    /// anonymous.
    pub fn new(config: DemoConfig) -> Self {
        WalletSession {
            auth: Mutex::new(AuthFlow::new(config.demo_code.clone())),
            ledger: Arc::new(Mutex::new(Ledger::new(config.seed))),
            scheduler: ConfirmationScheduler::new(
                config.confirm_delay_min,
                config.confirm_delay_max,
                config.jitter_seed,
            ),
            latency: config.latency,
        }
    }

    /// Submit a login identifier and issue the one-time code
    pub async fn request_code(&self, identifier: &str) -> Result<Receipt, WalletError> {
        self.pause(self.latency.login).await;
        let message = self.auth.lock().await.request_code(identifier)?;
        Ok(Receipt::message_only(message))
    }

    /// Verify the one-time code; success unlocks the ledger
    pub async fn verify_code(&self, code: &str) -> Result<Receipt, WalletError> {
        self.pause(self.latency.verify).await;
        let message = self.auth.lock().await.verify_code(code)?;
        Ok(Receipt::message_only(message))
    }

    /// Read-only snapshot of balances and transactions
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` before a successful `verify_code`.
    pub async fn user(&self) -> Result<User, WalletError> {
        self.ensure_authenticated().await?;
        self.pause(self.latency.fetch_user).await;
        Ok(self.ledger.lock().await.snapshot())
    }

    /// Convert fiat into the deposit target token
    ///
    /// See [`Ledger::deposit`] for the precondition and effect details.
    pub async fn deposit(&self, amount_usd: Decimal) -> Result<Receipt, WalletError> {
        self.ensure_authenticated().await?;
        self.pause(self.latency.deposit).await;
        self.ledger.lock().await.deposit(amount_usd)
    }

    /// Convert a token balance back into fiat
    ///
    /// See [`Ledger::withdraw`] for the precondition ordering.
    pub async fn withdraw(
        &self,
        token_symbol: &str,
        amount: Decimal,
        bank_account: &str,
        routing_code: &str,
    ) -> Result<Receipt, WalletError> {
        self.ensure_authenticated().await?;
        self.pause(self.latency.withdraw).await;
        self.ledger
            .lock()
            .await
            .withdraw(token_symbol, amount, bank_account, routing_code)
    }

    /// Trigger a simulated external transfer
    ///
    /// Returns the pending transaction immediately and schedules its
    /// confirmation.
    pub async fn generate_incoming(&self) -> Result<Transaction, WalletError> {
        self.ensure_authenticated().await?;
        let tx = self.ledger.lock().await.generate_incoming();
        self.scheduler
            .schedule(Arc::clone(&self.ledger), tx.id.clone())
            .await;
        Ok(tx)
    }

    /// Restore the demo fixture
    ///
    /// Outstanding confirmations are aborted; one that already slipped past
    /// the abort would no-op on its id lookup anyway. Not gated by
    /// authentication: this is the demo-harness control, not a user ledger
    /// operation.
    pub async fn reset_to_initial(&self) {
        self.pause(self.latency.reset).await;
        self.scheduler.cancel_all();
        self.ledger.lock().await.reset_to_initial();
    }

    /// Whether `verify_code` has succeeded for this session
    pub async fn is_authenticated(&self) -> bool {
        self.auth.lock().await.is_authenticated()
    }

    /// Number of incoming transfers not yet confirmed
    pub fn pending_confirmations(&self) -> usize {
        self.scheduler.pending()
    }

    async fn ensure_authenticated(&self) -> Result<(), WalletError> {
        if self.auth.lock().await.is_authenticated() {
            Ok(())
        } else {
            Err(WalletError::NotAuthenticated)
        }
    }

    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
