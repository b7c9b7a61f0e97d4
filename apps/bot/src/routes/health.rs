use actix_web::{web, HttpResponse};

/// GET /health — liveness probe for the launcher. No body.
async fn health() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
