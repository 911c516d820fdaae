//! Asynchronous confirmation scheduler
//!
//! Simulates the settlement of externally-originated incoming transfers.
//! Each pending receive transaction gets one delayed task, keyed by its
//! transaction id. When the delay elapses the task re-acquires the ledger
//! lock and applies the confirmation by id lookup, never by a captured
//! position, so a ledger reset in the meantime turns the confirmation into
//! a no-op instead of resurrecting stale state.
//!
//! Delays are drawn from a dedicated jitter generator, independent of the
//! stream feeding amounts and token choices.

use crate::core::ledger::Ledger;
use crate::core::sequence::Sequence;
use crate::types::TransactionId;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Schedules one delayed confirmation task per pending incoming transfer
///
/// Dropping the scheduler aborts every outstanding task; the id lookup at
/// fire time already guarantees no stale effect, aborting just avoids
/// useless wakeups.
pub struct ConfirmationScheduler {
    delay_min: Duration,
    delay_spread: Duration,
    jitter: Mutex<Sequence>,
    tasks: Arc<DashMap<TransactionId, JoinHandle<()>>>,
}

impl ConfirmationScheduler {
    /// Create a scheduler confirming within `[delay_min, delay_max)`
    ///
    /// Inverted bounds degrade to a fixed delay of `delay_min`.
    /// `jitter_seed` seeds the delay draws.
    pub fn new(delay_min: Duration, delay_max: Duration, jitter_seed: u64) -> Self {
        ConfirmationScheduler {
            delay_min,
            delay_spread: delay_max.saturating_sub(delay_min),
            jitter: Mutex::new(Sequence::new(jitter_seed)),
            tasks: Arc::new(DashMap::new()),
        }
    }

    /// Schedule the confirmation of a pending incoming transaction
    ///
    /// After a randomized delay the task locks the ledger and applies
    /// [`Ledger::confirm_incoming`] for `tx_id`. The task unregisters
    /// itself once it has run.
    pub async fn schedule(&self, ledger: Arc<Mutex<Ledger>>, tx_id: TransactionId) {
        let delay = self.draw_delay().await;
        let tasks = Arc::clone(&self.tasks);
        let key = tx_id.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            {
                let mut ledger = ledger.lock().await;
                // No-op when the transaction vanished (ledger reset) or is
                // already settled.
                ledger.confirm_incoming(&key);
            }
            tasks.remove(&key);
        });

        self.tasks.insert(tx_id, handle);
    }

    /// Abort every outstanding confirmation task
    ///
    /// Called on ledger reset; pending transactions are gone from the log
    /// anyway, so their confirmations would no-op.
    pub fn cancel_all(&self) {
        self.tasks.retain(|_, handle| {
            handle.abort();
            false
        });
    }

    /// Number of confirmations not yet applied
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    async fn draw_delay(&self) -> Duration {
        let roll = self.jitter.lock().await.next();
        self.delay_min + self.delay_spread.mul_f64(roll)
    }
}

impl Drop for ConfirmationScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
