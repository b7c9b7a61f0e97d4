//! Session-scoped HTTP routes: lifecycle, decisions, notifications.

use actix_web::{web, HttpResponse};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ai;
use crate::domain::{
    Card, CardPlayedContext, ChooseCardContext, ChooseCutContext, ChooseNegotiationActionContext,
    CutResult, DealEndedContext, DealStartedContext, MatchEndedContext, NegotiationActionChoice,
    PlayerPosition, TrickCompletedContext,
};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::validated_json::classify_json_error;
use crate::extractors::{SessionPlayer, ValidatedJson};
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CreateSessionRequest {
    match_id: String,
    position: Option<PlayerPosition>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionResponse {
    session_id: String,
}

/// POST /api/sessions
///
/// Allocates a fresh AI player for the match and returns its session id.
async fn create_session(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateSessionRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();

    let player = ai::create_ai(&app_state.ai_kind, &req.match_id, app_state.ai_seed)
        .ok_or_else(|| AppError::config(format!("unknown AI kind: {}", app_state.ai_kind)))?;

    let session_id = app_state.sessions.create(player);
    info!(
        session_id = %session_id,
        match_id = %req.match_id,
        position = ?req.position,
        "session created"
    );

    Ok(HttpResponse::Created().json(CreateSessionResponse { session_id }))
}

/// DELETE /api/sessions/{session_id}
///
/// Always 204, even for unknown ids.
async fn delete_session(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let session_id = path.into_inner();
    let existed = app_state.sessions.delete(&session_id);
    info!(session_id = %session_id, existed, "session deleted");
    HttpResponse::NoContent().finish()
}

/// POST /api/sessions/{session_id}/choose-cut
async fn choose_cut(
    player: SessionPlayer,
    body: ValidatedJson<ChooseCutContext>,
) -> Result<web::Json<CutResult>, AppError> {
    let cut = player.choose_cut(&body)?;
    Ok(web::Json(cut))
}

/// POST /api/sessions/{session_id}/choose-negotiation-action
async fn choose_negotiation_action(
    player: SessionPlayer,
    body: ValidatedJson<ChooseNegotiationActionContext>,
) -> Result<web::Json<NegotiationActionChoice>, AppError> {
    let action = player.choose_negotiation_action(&body)?;
    Ok(web::Json(action))
}

/// POST /api/sessions/{session_id}/choose-card
async fn choose_card(
    player: SessionPlayer,
    body: ValidatedJson<ChooseCardContext>,
) -> Result<web::Json<Card>, AppError> {
    let card = player.choose_card(&body)?;
    debug!(card = %card, "card chosen");
    Ok(web::Json(card))
}

fn decode_event<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::bad_request(ErrorCode::BadRequest, classify_json_error(&e)))
}

/// POST /api/sessions/{session_id}/notify/{event_name}
///
/// Fire-and-forget notifications. Unrecognized event names are accepted
/// and ignored so new server-side events don't break older bots.
async fn notify(
    player: SessionPlayer,
    path: web::Path<(String, String)>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let (_session_id, event_name) = path.into_inner();

    match event_name.as_str() {
        "deal-started" => player.on_deal_started(&decode_event::<DealStartedContext>(&body)?),
        "card-played" => player.on_card_played(&decode_event::<CardPlayedContext>(&body)?),
        "trick-completed" => {
            player.on_trick_completed(&decode_event::<TrickCompletedContext>(&body)?)
        }
        "deal-ended" => player.on_deal_ended(&decode_event::<DealEndedContext>(&body)?),
        "match-ended" => player.on_match_ended(&decode_event::<MatchEndedContext>(&body)?),
        other => debug!(event = other, "ignoring unrecognized notification event"),
    }

    Ok(HttpResponse::Ok().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/sessions").route(web::post().to(create_session)));
    cfg.service(
        web::resource("/api/sessions/{session_id}").route(web::delete().to(delete_session)),
    );
    cfg.service(
        web::resource("/api/sessions/{session_id}/choose-cut").route(web::post().to(choose_cut)),
    );
    cfg.service(
        web::resource("/api/sessions/{session_id}/choose-negotiation-action")
            .route(web::post().to(choose_negotiation_action)),
    );
    cfg.service(
        web::resource("/api/sessions/{session_id}/choose-card").route(web::post().to(choose_card)),
    );
    cfg.service(
        web::resource("/api/sessions/{session_id}/notify/{event_name}")
            .route(web::post().to(notify)),
    );
}
