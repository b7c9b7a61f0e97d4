//! Error codes for the bot API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. All
//! codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Request body could not be decoded
    BadRequest,
    /// No session with the given id
    SessionNotFound,
    /// AI player failed to produce a decision
    AiError,
    /// Invalid configuration at startup
    ConfigError,
    /// Catch-all internal error
    InternalError,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 5] = [
        ErrorCode::BadRequest,
        ErrorCode::SessionNotFound,
        ErrorCode::AiError,
        ErrorCode::ConfigError,
        ErrorCode::InternalError,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::AiError => "AI_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
