//! Game modes and multipliers.

use serde::{Deserialize, Serialize};

/// The six game modes. Declaration order is bid order, low to high:
/// the four colour modes, then no-trumps, then all-trumps.
#[derive(
    Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum GameMode {
    #[default]
    ColourClubs,
    ColourDiamonds,
    ColourHearts,
    ColourSpades,
    NoTrumps,
    AllTrumps,
}

impl GameMode {
    /// True for the four suit-colour modes.
    pub fn is_colour(self) -> bool {
        !matches!(self, GameMode::NoTrumps | GameMode::AllTrumps)
    }
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Multiplier {
    #[default]
    Normal,
    Doubled,
    Redoubled,
}
