//! Session lifecycle: create, decide, notify, delete, and the status
//! codes around unknown ids and malformed bodies.

mod support;

use actix_web::test;
use serde_json::{json, Value};
use support::{
    choose_card_body, create_session, create_test_app, match_state, test_state,
    UNKNOWN_SESSION_ID,
};

#[actix_web::test]
async fn end_to_end_scenario() {
    let app = create_test_app(test_state()).await;

    // Create: 201 with a 32-char hex session id.
    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .set_json(json!({"matchId": "m1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let body: Value = test::read_body_json(resp).await;
    let session_id = body["sessionId"].as_str().unwrap().to_string();
    assert_eq!(session_id.len(), 32);
    assert!(session_id.chars().all(|c| c.is_ascii_hexdigit()));

    // Singleton play is forced.
    let req = test::TestRequest::post()
        .uri(&format!("/api/sessions/{session_id}/choose-card"))
        .set_json(choose_card_body(json!([{"rank": "ace", "suit": "spades"}])))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let card: Value = test::read_body_json(resp).await;
    assert_eq!(card, json!({"rank": "ace", "suit": "spades"}));

    // Notification: 200, empty body.
    let req = test::TestRequest::post()
        .uri(&format!("/api/sessions/{session_id}/notify/deal-started"))
        .set_json(json!({"matchState": match_state()}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());

    // Delete: 204; the session is gone afterwards.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/sessions/{session_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);

    let req = test::TestRequest::post()
        .uri(&format!("/api/sessions/{session_id}/choose-card"))
        .set_json(choose_card_body(json!([{"rank": "ace", "suit": "spades"}])))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn session_ids_are_distinct() {
    let app = create_test_app(test_state()).await;
    let a = create_session(&app, "m1").await;
    let b = create_session(&app, "m1").await;
    assert_ne!(a, b);
}

#[actix_web::test]
async fn delete_is_idempotent() {
    let state = test_state();
    let app = create_test_app(state.clone()).await;
    let session_id = create_session(&app, "m1").await;

    for _ in 0..2 {
        let req = test::TestRequest::delete()
            .uri(&format!("/api/sessions/{session_id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 204);
    }
    assert!(state.sessions.is_empty());
}

#[actix_web::test]
async fn delete_of_unknown_session_is_204() {
    let app = create_test_app(test_state()).await;
    let req = test::TestRequest::delete()
        .uri(&format!("/api/sessions/{UNKNOWN_SESSION_ID}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);
}

#[actix_web::test]
async fn decision_against_unknown_session_is_404_without_side_effects() {
    let state = test_state();
    let app = create_test_app(state.clone()).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/sessions/{UNKNOWN_SESSION_ID}/choose-card"))
        .set_json(choose_card_body(json!([{"rank": "ace", "suit": "spades"}])))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "SESSION_NOT_FOUND");
    assert!(state.sessions.is_empty(), "a 404 must not create a session");
}

#[actix_web::test]
async fn create_with_malformed_body_is_400() {
    let state = test_state();
    let app = create_test_app(state.clone()).await;

    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"matchId": "#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["detail"].as_str().unwrap().contains("Invalid JSON"));
    assert!(state.sessions.is_empty(), "a 400 must not create a session");
}

#[actix_web::test]
async fn create_tolerates_absent_fields() {
    // The launcher contract treats every body field as optional.
    let app = create_test_app(test_state()).await;
    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
}
