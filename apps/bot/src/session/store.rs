//! In-memory session store.
//!
//! Maps opaque session ids to AI player instances. Sessions live until
//! explicitly deleted or the process exits; there is no eviction, TTL,
//! or capacity bound.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rand::rngs::OsRng;
use rand::Rng;

use crate::ai::AiPlayer;

/// 128 bits from the OS CSPRNG, lowercase hex, 32 chars.
fn new_session_id() -> String {
    format!("{:032x}", OsRng.gen::<u128>())
}

#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<dyn AiPlayer>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player under a fresh session id and return the id.
    /// Re-draws on collision so a live id is never reused.
    pub fn create(&self, player: Arc<dyn AiPlayer>) -> String {
        let mut sessions = self.sessions.write();
        let mut id = new_session_id();
        while sessions.contains_key(&id) {
            id = new_session_id();
        }
        sessions.insert(id.clone(), player);
        id
    }

    pub fn lookup(&self, session_id: &str) -> Option<Arc<dyn AiPlayer>> {
        self.sessions.read().get(session_id).cloned()
    }

    /// Remove a session. Idempotent: returns whether it existed.
    pub fn delete(&self, session_id: &str) -> bool {
        self.sessions.write().remove(session_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}
