//! # Chess Club
//!
//! A local chess-tournament record-keeper: clubs, players, tournaments,
//! rounds, and match results, persisted as JSON files on disk.
//!
//! The heart of the library is the tournament state machine and its pairing
//! engine: round one pairs a random shuffle of the registered players, later
//! rounds pair by current standings while avoiding repeat opponents whenever
//! possible.
//!
//! ## Core Modules
//!
//! - [`tournament`]: match/round models, the pairing engine, the tournament
//!   state machine, and the file-backed tournament store
//! - [`club`]: club and player registry with entry validation
//! - [`report`]: summaries, points tables, and text report export
//!
//! ## Example
//!
//! ```
//! use chess_club::{AdvanceOutcome, Tournament};
//! use chrono::NaiveDate;
//!
//! # fn main() -> chess_club::TournamentResult<()> {
//! let date = NaiveDate::from_ymd_opt(2026, 6, 6).unwrap();
//! let mut tournament = Tournament::new("Spring Open", "Lyon", date, date, 1)?;
//! tournament.register_player("AB12345")?;
//! tournament.register_player("CD67890")?;
//!
//! let outcome = tournament.advance_round(&mut rand::rng())?;
//! assert_eq!(outcome, AdvanceOutcome::NewRound(1));
//! # Ok(())
//! # }
//! ```

/// Club and player registry.
pub mod club;
pub use club::{ChessClub, ClubError, ClubManager, ClubResult, Player};

/// Report/query layer over tournament data.
pub mod report;
pub use report::{PointsRow, TournamentSummary};

/// Tournament models, pairing engine, state machine, and store.
pub mod tournament;
pub use tournament::{
    AdvanceOutcome, FinishOutcome, Match, Round, Standing, Tournament, TournamentError,
    TournamentManager, TournamentResult,
};

/// Textual date format used at every persistence and display boundary.
pub const DATE_FORMAT: &str = "%d-%m-%Y";
