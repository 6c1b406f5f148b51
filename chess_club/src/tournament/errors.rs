//! Tournament error types.

use chrono::NaiveDate;
use thiserror::Error;

use super::models::PlayerId;

/// Errors raised by tournament construction, pairing, result recording, and
/// the file-backed store.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Construction with an end date preceding the start date
    #[error("end date {end} precedes start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    /// Construction with a zero round count
    #[error("number of rounds must be greater than zero")]
    NoRounds,

    /// A player cannot be paired against themselves
    #[error("{0} cannot be paired against themselves")]
    InvalidPairing(PlayerId),

    /// Pairing requires an even player count
    #[error("cannot pair an odd number of players ({0})")]
    OddPlayers(usize),

    /// Pairing requires at least two players
    #[error("need at least 2 players to pair, have {0}")]
    InsufficientPlayers(usize),

    /// Recorded winner is not part of the match
    #[error("winner {winner} is not part of the {player_one} vs {player_two} match")]
    InvalidWinner {
        winner: PlayerId,
        player_one: PlayerId,
        player_two: PlayerId,
    },

    /// Round or match index out of range (1-indexed lookups)
    #[error("no match {match_number} in round {round_number}")]
    NotFound {
        round_number: usize,
        match_number: usize,
    },

    /// Registration attempted after rounds were generated
    #[error("registration is closed once rounds have been generated")]
    RegistrationClosed,

    /// A persisted date field failed to parse
    #[error("invalid date {0:?}, expected dd-mm-yyyy")]
    InvalidDate(String),

    /// No tournament at the given store index
    #[error("no tournament at index {0}")]
    UnknownTournament(usize),

    /// I/O error from the store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type TournamentResult<T> = Result<T, TournamentError>;
