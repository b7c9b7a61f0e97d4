//! Read-only state snapshots the server attaches to every call.
//!
//! These mirror what the game server sends; the server is the sole
//! source of truth and nothing here persists between calls. Absent
//! fields decode to their zero values, matching the launcher contract.

use serde::{Deserialize, Serialize};

use super::modes::{GameMode, Multiplier};
use super::players::{PlayedCard, PlayerPosition, Team};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrickState {
    pub leader: PlayerPosition,
    pub trick_number: u32,
    pub played_cards: Vec<PlayedCard>,
    pub is_complete: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HandState {
    pub game_mode: GameMode,
    pub team1_card_points: i32,
    pub team2_card_points: i32,
    pub team1_tricks_won: u32,
    pub team2_tricks_won: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_trick: Option<TrickState>,
    pub completed_tricks: Vec<TrickState>,
}

/// Scoring outcome of one finished deal.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DealResult {
    pub game_mode: GameMode,
    pub multiplier: Multiplier,
    pub announcer_team: Team,
    pub team1_card_points: i32,
    pub team2_card_points: i32,
    pub team1_match_points: i32,
    pub team2_match_points: i32,
    pub was_sweep: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweeping_team: Option<Team>,
    pub is_instant_win: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchState {
    pub target_score: i32,
    pub team1_match_points: i32,
    pub team2_match_points: i32,
    pub current_dealer: PlayerPosition,
    pub is_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Team>,
    pub completed_deals: Vec<DealResult>,
}
