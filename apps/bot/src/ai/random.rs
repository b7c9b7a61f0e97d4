//! Random AI player - makes uniformly random legal choices.
//!
//! [`RandomPlayer`] is the reference implementation of
//! [`AiPlayer`](super::AiPlayer) and the template for custom players:
//! thread-safe interior mutability for the RNG, optional seeding for
//! reproducible tests, and no panics on bad input.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::{
    Card, ChooseCardContext, ChooseCutContext, ChooseNegotiationActionContext, CutResult,
    NegotiationActionChoice,
};

/// Lowest legal cut position.
pub const CUT_MIN: u8 = 6;
/// Highest legal cut position.
pub const CUT_MAX: u8 = 26;

/// AI that makes random legal choices.
///
/// The RNG lives behind a `Mutex` because trait methods take `&self`;
/// decision calls are sequential per session, so the lock is never
/// contended.
pub struct RandomPlayer {
    match_id: String,
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    /// Create a player for `match_id`. `Some(seed)` gives reproducible
    /// choices for tests; `None` seeds from system entropy.
    pub fn new(match_id: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            match_id: match_id.into(),
            rng: Mutex::new(rng),
        }
    }

    fn rng(&self) -> Result<std::sync::MutexGuard<'_, StdRng>, AiError> {
        self.rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))
    }
}

impl AiPlayer for RandomPlayer {
    fn match_id(&self) -> &str {
        &self.match_id
    }

    fn choose_cut(&self, _ctx: &ChooseCutContext) -> Result<CutResult, AiError> {
        // Deck size is ignored: the legal band is fixed by the rules.
        let mut rng = self.rng()?;
        Ok(CutResult {
            position: rng.gen_range(CUT_MIN..=CUT_MAX),
            from_top: rng.gen(),
        })
    }

    fn choose_negotiation_action(
        &self,
        ctx: &ChooseNegotiationActionContext,
    ) -> Result<NegotiationActionChoice, AiError> {
        let mut rng = self.rng()?;
        ctx.valid_actions
            .choose(&mut *rng)
            .cloned()
            .ok_or(AiError::NoLegalOptions("validActions"))
    }

    fn choose_card(&self, ctx: &ChooseCardContext) -> Result<Card, AiError> {
        let mut rng = self.rng()?;
        ctx.valid_plays
            .choose(&mut *rng)
            .copied()
            .ok_or(AiError::NoLegalOptions("validPlays"))
    }
}
