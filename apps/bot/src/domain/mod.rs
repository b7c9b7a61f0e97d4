//! Domain layer: the Giretra wire vocabulary.
//!
//! Value types only — the external game server owns all rules and
//! scoring; nothing in here validates play.

pub mod cards;
pub mod contexts;
pub mod modes;
pub mod negotiation;
pub mod players;
pub mod state;

#[cfg(test)]
mod tests_wire_format;

// Re-exports for ergonomics
pub use cards::{Card, Rank, Suit};
pub use contexts::{
    CardPlayedContext, ChooseCardContext, ChooseCutContext, ChooseNegotiationActionContext,
    CutResult, DealEndedContext, DealStartedContext, MatchEndedContext, TrickCompletedContext,
};
pub use modes::{GameMode, Multiplier};
pub use negotiation::{
    NegotiationAction, NegotiationActionChoice, NegotiationActionType, NegotiationState,
};
pub use players::{PlayedCard, PlayerPosition, Team};
pub use state::{DealResult, HandState, MatchState, TrickState};
