//! Tournament module: models, pairing engine, state machine, and store.
//!
//! A tournament runs round by round. Round one pairs a random shuffle of the
//! registered players; each later round pairs by current standings while
//! avoiding opponents who already faced each other, repeating a pairing only
//! when nothing else is left. Results feed the standings (win 1, draw 0.5),
//! and the tournament completes once the configured number of rounds has
//! been generated and fully resolved.
//!
//! ## Example
//!
//! ```
//! use chess_club::tournament::{AdvanceOutcome, Tournament};
//! use chrono::NaiveDate;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> chess_club::TournamentResult<()> {
//! let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
//! let mut tournament = Tournament::new("Club Masters", "Nantes", date, date, 2)?;
//! for id in ["AB11111", "CD22222", "EF33333", "GH44444"] {
//!     tournament.register_player(id)?;
//! }
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! assert_eq!(tournament.advance_round(&mut rng)?, AdvanceOutcome::NewRound(1));
//! // The round is still open, so advancing again is a no-op.
//! assert_eq!(tournament.advance_round(&mut rng)?, AdvanceOutcome::RoundInProgress);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod manager;
pub mod models;
pub mod pairing;
pub mod state_machine;

pub use errors::{TournamentError, TournamentResult};
pub use manager::TournamentManager;
pub use models::{Match, MatchRecord, PlayerId, Round, Standing, TournamentRecord};
pub use state_machine::{AdvanceOutcome, FinishOutcome, Tournament};
