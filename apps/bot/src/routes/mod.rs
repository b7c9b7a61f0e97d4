use actix_web::web;

pub mod health;
pub mod sessions;

/// Configure application routes.
///
/// Used by `main.rs` and, unchanged, by the test harness so endpoint
/// behavior can be exercised exactly as deployed.
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    sessions::configure_routes(cfg);
}
