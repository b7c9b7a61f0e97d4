//! Wire-format tests: field spellings and enum values must match what
//! the game server sends, byte for byte.

use serde_json::json;

use super::cards::{Card, Rank, Suit};
use super::contexts::{ChooseCardContext, CutResult, DealStartedContext};
use super::modes::{GameMode, Multiplier};
use super::negotiation::{NegotiationActionChoice, NegotiationActionType, NegotiationState};
use super::players::{PlayerPosition, Team};
use super::state::{HandState, MatchState, TrickState};

#[test]
fn card_uses_lowercase_rank_and_suit() {
    let card = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(
        serde_json::to_value(card).unwrap(),
        json!({"rank": "ace", "suit": "spades"})
    );
    let decoded: Card = serde_json::from_value(json!({"rank": "ten", "suit": "diamonds"})).unwrap();
    assert_eq!(decoded, Card::new(Rank::Ten, Suit::Diamonds));
}

#[test]
fn deck_has_32_distinct_cards() {
    let deck = Card::deck();
    assert_eq!(deck.len(), 32);
    let mut unique = deck.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 32);
}

#[test]
fn game_modes_spell_like_the_server() {
    let spellings = [
        (GameMode::ColourClubs, "colourClubs"),
        (GameMode::ColourDiamonds, "colourDiamonds"),
        (GameMode::ColourHearts, "colourHearts"),
        (GameMode::ColourSpades, "colourSpades"),
        (GameMode::NoTrumps, "noTrumps"),
        (GameMode::AllTrumps, "allTrumps"),
    ];
    for (mode, expected) in spellings {
        assert_eq!(serde_json::to_value(mode).unwrap(), json!(expected));
    }
}

#[test]
fn game_modes_order_low_to_high() {
    assert!(GameMode::ColourSpades < GameMode::NoTrumps);
    assert!(GameMode::NoTrumps < GameMode::AllTrumps);
    assert!(GameMode::ColourClubs.is_colour());
    assert!(!GameMode::AllTrumps.is_colour());
}

#[test]
fn positions_teams_multipliers() {
    assert_eq!(
        serde_json::to_value(PlayerPosition::Bottom).unwrap(),
        json!("bottom")
    );
    assert_eq!(serde_json::to_value(Team::Team2).unwrap(), json!("team2"));
    assert_eq!(
        serde_json::to_value(Multiplier::Redoubled).unwrap(),
        json!("redoubled")
    );
    assert_eq!(PlayerPosition::Top.team(), Team::Team1);
    assert_eq!(PlayerPosition::Right.team(), Team::Team2);
}

#[test]
fn negotiation_choice_uses_type_field_and_omits_empty_modes() {
    let accept = NegotiationActionChoice {
        kind: NegotiationActionType::Accept,
        mode: None,
        target_mode: None,
    };
    assert_eq!(serde_json::to_value(&accept).unwrap(), json!({"type": "accept"}));

    let announce = NegotiationActionChoice {
        kind: NegotiationActionType::Announcement,
        mode: Some(GameMode::AllTrumps),
        target_mode: None,
    };
    assert_eq!(
        serde_json::to_value(&announce).unwrap(),
        json!({"type": "announcement", "mode": "allTrumps"})
    );
}

#[test]
fn negotiation_state_decodes_mode_keyed_maps() {
    let state: NegotiationState = serde_json::from_value(json!({
        "dealer": "left",
        "currentPlayer": "bottom",
        "currentBid": "colourHearts",
        "currentBidder": "top",
        "consecutiveAccepts": 2,
        "hasDoubleOccurred": true,
        "doubledModes": {"colourHearts": 1},
        "redoubledModes": ["noTrumps"],
        "teamColourAnnouncements": {"team1": "colourHearts"}
    }))
    .unwrap();
    assert_eq!(state.dealer, PlayerPosition::Left);
    assert_eq!(state.current_bid, Some(GameMode::ColourHearts));
    assert_eq!(state.doubled_modes.get(&GameMode::ColourHearts), Some(&1));
    assert_eq!(
        state.team_colour_announcements.get(&Team::Team1),
        Some(&GameMode::ColourHearts)
    );
    assert!(state.actions.is_empty());
}

#[test]
fn absent_snapshot_fields_decode_to_zero_values() {
    // The launcher contract treats every field as optional; missing
    // fields land on their zero values, as in the original decoder.
    let m: MatchState = serde_json::from_value(json!({})).unwrap();
    assert_eq!(m.target_score, 0);
    assert_eq!(m.current_dealer, PlayerPosition::Bottom);
    assert!(m.winner.is_none());
    assert!(m.completed_deals.is_empty());

    let h: HandState = serde_json::from_value(json!({"gameMode": "noTrumps"})).unwrap();
    assert_eq!(h.game_mode, GameMode::NoTrumps);
    assert!(h.current_trick.is_none());

    let ctx: DealStartedContext = serde_json::from_value(json!({})).unwrap();
    assert_eq!(ctx.match_state, MatchState::default());
}

#[test]
fn unknown_fields_are_ignored() {
    let t: TrickState = serde_json::from_value(json!({
        "leader": "right",
        "trickNumber": 3,
        "futureField": {"anything": true}
    }))
    .unwrap();
    assert_eq!(t.leader, PlayerPosition::Right);
    assert_eq!(t.trick_number, 3);
}

#[test]
fn choose_card_context_round_trips() {
    let ctx: ChooseCardContext = serde_json::from_value(json!({
        "hand": [{"rank": "seven", "suit": "clubs"}],
        "handState": {"gameMode": "allTrumps"},
        "matchState": {"targetScore": 151, "currentDealer": "left"},
        "validPlays": [{"rank": "seven", "suit": "clubs"}]
    }))
    .unwrap();
    assert_eq!(ctx.valid_plays, vec![Card::new(Rank::Seven, Suit::Clubs)]);
    assert_eq!(ctx.match_state.target_score, 151);
}

#[test]
fn cut_result_encodes_camel_case() {
    let cut = CutResult {
        position: 14,
        from_top: true,
    };
    assert_eq!(
        serde_json::to_value(cut).unwrap(),
        json!({"position": 14, "fromTop": true})
    );
}
