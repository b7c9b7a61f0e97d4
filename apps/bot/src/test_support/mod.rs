//! Helpers shared by unit and integration tests.

pub mod app_builder;
pub mod logging;

pub use app_builder::{create_test_app, seeded_state, test_state};
