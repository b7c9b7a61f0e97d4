//! Per-call contexts handed to the AI player, and the cut result.
//!
//! One context type per decision point and per notification event. The
//! player must treat these as immutable inputs; any learning it wants to
//! do across calls is its own business.

use serde::{Deserialize, Serialize};

use super::cards::Card;
use super::negotiation::{NegotiationActionChoice, NegotiationState};
use super::players::PlayerPosition;
use super::state::{DealResult, HandState, MatchState, TrickState};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChooseCutContext {
    pub deck_size: u32,
    pub match_state: MatchState,
}

/// Where to cut the deck before a deal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutResult {
    pub position: u8,
    pub from_top: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChooseNegotiationActionContext {
    pub hand: Vec<Card>,
    pub negotiation_state: NegotiationState,
    pub match_state: MatchState,
    pub valid_actions: Vec<NegotiationActionChoice>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChooseCardContext {
    pub hand: Vec<Card>,
    pub hand_state: HandState,
    pub match_state: MatchState,
    pub valid_plays: Vec<Card>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DealStartedContext {
    pub match_state: MatchState,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardPlayedContext {
    pub player: PlayerPosition,
    pub card: Card,
    pub hand_state: HandState,
    pub match_state: MatchState,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrickCompletedContext {
    pub completed_trick: TrickState,
    pub winner: PlayerPosition,
    pub hand_state: HandState,
    pub match_state: MatchState,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DealEndedContext {
    pub result: DealResult,
    pub hand_state: HandState,
    pub match_state: MatchState,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchEndedContext {
    pub match_state: MatchState,
}
