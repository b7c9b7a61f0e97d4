//! Environment-driven configuration.
//!
//! The launcher contract sets `PORT` and `LAUNCHER_PID`; the rest are
//! operator knobs. Invalid values are configuration errors, reported at
//! startup.

use std::env;

use crate::error::AppError;

pub const DEFAULT_PORT: u16 = 5063;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_AI_KIND: &str = "random";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listen address; the launcher talks to us over loopback.
    pub host: String,
    pub port: u16,
    /// When set, the watchdog exits this process once that pid is gone.
    pub launcher_pid: Option<u32>,
    /// AI player kind for new sessions (see `ai::create_ai`).
    pub ai_kind: String,
    /// Optional fixed seed for reproducible runs.
    pub ai_seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BOT_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("PORT must be a valid port number, got {raw:?}"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let launcher_pid = match env::var("LAUNCHER_PID") {
            Ok(raw) => Some(raw.parse::<u32>().map_err(|_| {
                AppError::config(format!("LAUNCHER_PID must be a pid, got {raw:?}"))
            })?),
            Err(_) => None,
        };

        let ai_kind = env::var("BOT_AI").unwrap_or_else(|_| DEFAULT_AI_KIND.to_string());

        let ai_seed = match env::var("BOT_AI_SEED") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|_| {
                AppError::config(format!("BOT_AI_SEED must be a u64, got {raw:?}"))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            host,
            port,
            launcher_pid,
            ai_kind,
            ai_seed,
        })
    }
}
