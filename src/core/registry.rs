//! Session registry
//!
//! Keeps the live demo sessions of a process, keyed by an opaque session
//! id. Each session owns its own ledger, so multiple sessions coexist
//! without any process-wide singleton state. The map is concurrent; session
//! internals do their own locking.

use crate::core::config::DemoConfig;
use crate::core::session::WalletSession;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Opaque session identifier
pub type SessionId = String;

/// Concurrent map of live wallet sessions
pub struct SessionRegistry {
    sessions: DashMap<SessionId, Arc<WalletSession>>,
    next_id: AtomicU64,
}

impl SessionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        SessionRegistry {
            sessions: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create and register a new session
    ///
    /// Returns the assigned id together with a handle to the session.
    pub fn create(&self, config: DemoConfig) -> (SessionId, Arc<WalletSession>) {
        let id = format!("session-{:04}", self.next_id.fetch_add(1, Ordering::Relaxed));
        let session = Arc::new(WalletSession::new(config));
        self.sessions.insert(id.clone(), Arc::clone(&session));
        (id, session)
    }

    /// Look up a live session
    pub fn get(&self, id: &str) -> Option<Arc<WalletSession>> {
        self.sessions.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Drop a session from the registry
    ///
    /// The session (and any meaning its pending confirmations had) goes
    /// away once the last outside handle is released. Returns whether the
    /// id was present.
    pub fn remove(&self, id: &str) -> bool {
        self.sessions.remove(id).is_some()
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are registered
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
