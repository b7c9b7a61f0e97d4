use std::future::{ready, Ready};
use std::ops::Deref;
use std::sync::Arc;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::ai::AiPlayer;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

/// The AI player behind the `{session_id}` route segment.
///
/// Resolves synchronously against the session store, so an unknown
/// session turns into a 404 before any body bytes are decoded.
pub struct SessionPlayer(pub Arc<dyn AiPlayer>);

impl SessionPlayer {
    fn resolve(req: &HttpRequest) -> Result<Self, AppError> {
        let session_id = req.match_info().get("session_id").ok_or_else(|| {
            AppError::bad_request(ErrorCode::BadRequest, "Missing session_id parameter")
        })?;

        let app_state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
            AppError::internal(ErrorCode::InternalError, "AppState not available")
        })?;

        app_state
            .sessions
            .lookup(session_id)
            .map(SessionPlayer)
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::SessionNotFound,
                    format!("Session {session_id} not found"),
                )
            })
    }
}

impl Deref for SessionPlayer {
    type Target = dyn AiPlayer;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl FromRequest for SessionPlayer {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::resolve(req))
    }
}
