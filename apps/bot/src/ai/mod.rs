//! AI player module - the pluggable decision-making unit.
//!
//! One [`AiPlayer`] instance is created per game session. The shipped
//! implementation is [`RandomPlayer`]; alternative players (rule-based,
//! search-based) slot in behind the same trait via [`create_ai`].

use std::sync::Arc;

mod random;
mod trait_def;

pub use random::{RandomPlayer, CUT_MAX, CUT_MIN};
pub use trait_def::{AiError, AiPlayer};

/// Create an AI player from its kind string.
///
/// Currently supports:
/// - "random": RandomPlayer, optionally seeded
///
/// Returns None if the kind is unrecognized; bootstrap validates the
/// configured kind before the server starts serving.
pub fn create_ai(kind: &str, match_id: &str, seed: Option<u64>) -> Option<Arc<dyn AiPlayer>> {
    match kind {
        "random" => Some(Arc::new(RandomPlayer::new(match_id, seed))),
        _ => None,
    }
}
