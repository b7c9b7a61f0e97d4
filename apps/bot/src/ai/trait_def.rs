//! AI player trait definition.

use std::fmt;

use crate::domain::{
    Card, CardPlayedContext, ChooseCardContext, ChooseCutContext, ChooseNegotiationActionContext,
    CutResult, DealEndedContext, DealStartedContext, MatchEndedContext, NegotiationActionChoice,
    TrickCompletedContext,
};
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Errors that can occur during AI decision-making.
#[derive(Debug)]
pub enum AiError {
    /// The server supplied an empty legal-option set. Game rules
    /// guarantee at least one legal option at every decision point, so
    /// this is a caller contract violation.
    NoLegalOptions(&'static str),
    /// AI encountered an internal error
    Internal(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::NoLegalOptions(what) => write!(f, "no legal options in {what}"),
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(ErrorCode::AiError, format!("AI error: {err}"))
    }
}

/// Trait for AI players. One instance per game session.
///
/// Decision methods must pick from the legal options the server supplies
/// in the context; inventing options outside that set is a contract
/// violation. Notification handlers default to no-ops — an
/// implementation overrides the ones it wants, typically to maintain
/// learned state (cards seen, bidding tendencies) across calls within a
/// session. They return nothing and must not abort the caller.
///
/// Instances are shared through the session store, hence `Send + Sync`;
/// the protocol serializes decision calls per session, so a `Mutex`
/// around any mutable state is contention-free in practice.
pub trait AiPlayer: Send + Sync {
    /// The match this instance was created for.
    fn match_id(&self) -> &str;

    /// Where to cut the deck before a deal. Position must be in 6..=26.
    fn choose_cut(&self, ctx: &ChooseCutContext) -> Result<CutResult, AiError>;

    /// Pick one action from `ctx.valid_actions`.
    fn choose_negotiation_action(
        &self,
        ctx: &ChooseNegotiationActionContext,
    ) -> Result<NegotiationActionChoice, AiError>;

    /// Pick one card from `ctx.valid_plays`.
    fn choose_card(&self, ctx: &ChooseCardContext) -> Result<Card, AiError>;

    /// A new deal has begun.
    fn on_deal_started(&self, _ctx: &DealStartedContext) {}

    /// Any player (including this bot) played a card.
    fn on_card_played(&self, _ctx: &CardPlayedContext) {}

    /// A trick finished, with its winner.
    fn on_trick_completed(&self, _ctx: &TrickCompletedContext) {}

    /// A deal finished, with scoring results.
    fn on_deal_ended(&self, _ctx: &DealEndedContext) {}

    /// The match is over.
    fn on_match_ended(&self, _ctx: &MatchEndedContext) {}
}
