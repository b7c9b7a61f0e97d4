use std::sync::Arc;

use crate::session::SessionStore;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// The one shared mutable resource: the session map
    pub sessions: Arc<SessionStore>,
    /// Which AI player kind new sessions get (see `ai::create_ai`)
    pub ai_kind: String,
    /// Optional RNG seed handed to every new player, for reproducible runs
    pub ai_seed: Option<u64>,
}

impl AppState {
    pub fn new(ai_kind: impl Into<String>, ai_seed: Option<u64>) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new()),
            ai_kind: ai_kind.into(),
            ai_seed,
        }
    }
}
