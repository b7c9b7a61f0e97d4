//! Negotiation (bidding) actions and state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::modes::GameMode;
use super::players::{PlayerPosition, Team};

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NegotiationActionType {
    #[default]
    Announcement,
    Accept,
    Double,
    Redouble,
}

/// An action as it appears in the negotiation history. `player` is
/// absent on actions the server echoes back as choices.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NegotiationAction {
    #[serde(rename = "type")]
    pub kind: NegotiationActionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<GameMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_mode: Option<GameMode>,
}

/// A selectable action. Same shape as [`NegotiationAction`] minus the
/// player: the server already knows which seat is answering.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NegotiationActionChoice {
    #[serde(rename = "type")]
    pub kind: NegotiationActionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<GameMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_mode: Option<GameMode>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NegotiationState {
    pub dealer: PlayerPosition,
    pub current_player: PlayerPosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_bid: Option<GameMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_bidder: Option<PlayerPosition>,
    pub consecutive_accepts: u32,
    pub has_double_occurred: bool,
    pub actions: Vec<NegotiationAction>,
    pub doubled_modes: HashMap<GameMode, u32>,
    pub redoubled_modes: Vec<GameMode>,
    pub team_colour_announcements: HashMap<Team, GameMode>,
}
