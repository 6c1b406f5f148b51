//! Club and player error types.

use thiserror::Error;

/// Errors raised by player validation and the club store.
#[derive(Debug, Error)]
pub enum ClubError {
    /// Malformed email address
    #[error("invalid email address {0:?}")]
    InvalidEmail(String),

    /// Chess ID does not match two letters followed by five digits
    #[error("invalid chess ID {0:?}, expected two letters followed by five digits")]
    InvalidChessId(String),

    /// Birthday is malformed or in the future
    #[error("invalid birthday {0:?}, expected a past dd-mm-yyyy date")]
    InvalidBirthday(String),

    /// Chess ID already registered in the club
    #[error("chess ID {0} is already registered in this club")]
    ChessIdTaken(String),

    /// No club at the given store index
    #[error("no club at index {0}")]
    UnknownClub(usize),

    /// I/O error from the store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ClubResult<T> = Result<T, ClubError>;
