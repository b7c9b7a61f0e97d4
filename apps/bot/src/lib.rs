#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;
pub mod test_support;
pub mod trace_ctx;
pub mod watchdog;

// Re-exports for public API
pub use ai::{AiError, AiPlayer, RandomPlayer};
pub use config::AppConfig;
pub use error::AppError;
pub use errors::ErrorCode;
pub use extractors::{SessionPlayer, ValidatedJson};
pub use middleware::{RequestTrace, TraceSpan};
pub use session::SessionStore;
pub use state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}
