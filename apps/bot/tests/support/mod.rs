#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, Error as ActixError};
use serde_json::{json, Value};

pub use giretra_bot::test_support::{create_test_app, seeded_state, test_state};

/// A plausible mid-match state snapshot.
pub fn match_state() -> Value {
    json!({
        "targetScore": 151,
        "team1MatchPoints": 24,
        "team2MatchPoints": 8,
        "currentDealer": "left",
        "isComplete": false,
        "completedDeals": []
    })
}

pub fn hand_state() -> Value {
    json!({
        "gameMode": "allTrumps",
        "team1CardPoints": 0,
        "team2CardPoints": 0,
        "team1TricksWon": 0,
        "team2TricksWon": 0,
        "completedTricks": []
    })
}

pub fn choose_card_body(valid_plays: Value) -> Value {
    json!({
        "hand": valid_plays.clone(),
        "handState": hand_state(),
        "matchState": match_state(),
        "validPlays": valid_plays
    })
}

pub fn choose_cut_body() -> Value {
    json!({
        "deckSize": 32,
        "matchState": match_state()
    })
}

pub fn negotiation_body(valid_actions: Value) -> Value {
    json!({
        "hand": [{"rank": "ace", "suit": "spades"}, {"rank": "nine", "suit": "hearts"}],
        "negotiationState": {
            "dealer": "left",
            "currentPlayer": "bottom",
            "consecutiveAccepts": 0,
            "hasDoubleOccurred": false,
            "actions": [],
            "doubledModes": {},
            "redoubledModes": [],
            "teamColourAnnouncements": {}
        },
        "matchState": match_state(),
        "validActions": valid_actions
    })
}

pub fn deal_result() -> Value {
    json!({
        "gameMode": "colourHearts",
        "multiplier": "doubled",
        "announcerTeam": "team1",
        "team1CardPoints": 98,
        "team2CardPoints": 64,
        "team1MatchPoints": 20,
        "team2MatchPoints": 0,
        "wasSweep": false,
        "isInstantWin": false
    })
}

/// POST /api/sessions and return the fresh session id.
pub async fn create_session<S>(app: &S, match_id: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError>,
{
    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .set_json(json!({"matchId": match_id}))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201, "session create should be 201");
    let body: Value = test::read_body_json(resp).await;
    body["sessionId"]
        .as_str()
        .expect("sessionId in create response")
        .to_string()
}

/// A well-formed id that no session has (ids are random 128-bit values).
pub const UNKNOWN_SESSION_ID: &str = "0123456789abcdef0123456789abcdef";
