//! Error codes for the scoreboard API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the scoreboard API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Player name missing or blank after trimming
    InvalidPlayerName,
    /// Score not coercible to an integer
    InvalidScore,
    /// Threshold not a positive integer
    InvalidThreshold,
    /// Unreadable or malformed request body
    BadRequest,

    // Conflicts
    /// Player name already taken
    DuplicatePlayer,

    // Resource Not Found
    /// Player not found
    PlayerNotFound,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::InvalidScore => "INVALID_SCORE",
            Self::InvalidThreshold => "INVALID_THRESHOLD",
            Self::BadRequest => "BAD_REQUEST",

            Self::DuplicatePlayer => "DUPLICATE_PLAYER",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
