//! Seats and teams. Seating is fixed clockwise and the bot always sits
//! at bottom; top is the partner, left and right the opponents.

use serde::{Deserialize, Serialize};

use super::cards::Card;

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayerPosition {
    #[default]
    Bottom,
    Left,
    Top,
    Right,
}

impl PlayerPosition {
    /// The team a seat belongs to: bottom/top vs left/right.
    pub fn team(self) -> Team {
        match self {
            PlayerPosition::Bottom | PlayerPosition::Top => Team::Team1,
            PlayerPosition::Left | PlayerPosition::Right => Team::Team2,
        }
    }
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Team {
    #[default]
    Team1,
    Team2,
}

/// One card as it landed on the table.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayedCard {
    pub player: PlayerPosition,
    pub card: Card,
}
