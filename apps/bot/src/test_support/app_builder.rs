//! Test service builder: given an AppState, build an initialized actix
//! test service running the production routes.

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{web, App, Error as ActixError};

use crate::middleware::{RequestTrace, TraceSpan};
use crate::state::app_state::AppState;

/// An AppState with the shipped random player, deterministically seeded
/// so decision tests are reproducible.
pub fn seeded_state(seed: u64) -> AppState {
    AppState::new("random", Some(seed))
}

/// An AppState as production configures it (random player, OS entropy).
pub fn test_state() -> AppState {
    AppState::new("random", None)
}

/// Build and initialize the actix test service over the prod routes,
/// with the prod middleware stack.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    super::logging::init();
    actix_web::test::init_service(
        App::new()
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(crate::routes::configure),
    )
    .await
}
