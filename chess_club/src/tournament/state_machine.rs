//! Tournament state machine: registration, round advancement, result
//! recording, standings, and completion.
//!
//! A tournament moves from "not started" (no rounds) through one generated
//! round at a time to "completed". [`Tournament::advance_round`] is the
//! single entry point that both starts and advances it.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::{debug, info};
use rand::Rng;

use super::errors::{TournamentError, TournamentResult};
use super::models::{
    DatesRecord, Match, PlayerId, Round, Standing, TournamentRecord, format_date, parse_date,
};
use super::pairing;

/// Outcome of an [`Tournament::advance_round`] call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AdvanceOutcome {
    /// Tournament was already completed; nothing changed.
    AlreadyCompleted,
    /// Current round still has open matches; nothing changed.
    RoundInProgress,
    /// The final round was complete; the tournament is now finished.
    Completed,
    /// A new round was generated (1-indexed round number).
    NewRound(usize),
}

/// Outcome of an explicit [`Tournament::finish`] check. Every variant
/// carries the standings at the time of the call.
#[derive(Clone, Debug, PartialEq)]
pub enum FinishOutcome {
    AlreadyCompleted { standings: Vec<Standing> },
    RoundsPending { standings: Vec<Standing> },
    LastRoundIncomplete { standings: Vec<Standing> },
    Finished { winner: Option<PlayerId>, standings: Vec<Standing> },
}

/// A tournament: registered players, generated rounds, and results.
#[derive(Clone, Debug)]
pub struct Tournament {
    pub name: String,
    pub venue: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_rounds: u32,
    players: Vec<PlayerId>,
    rounds: Vec<Round>,
    current_round_index: usize,
    completed: bool,
}

impl Tournament {
    /// Create an empty tournament with validated dates and round count.
    pub fn new(
        name: impl Into<String>,
        venue: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        number_of_rounds: u32,
    ) -> TournamentResult<Self> {
        if end_date < start_date {
            return Err(TournamentError::EndBeforeStart {
                start: start_date,
                end: end_date,
            });
        }
        if number_of_rounds == 0 {
            return Err(TournamentError::NoRounds);
        }
        Ok(Self {
            name: name.into(),
            venue: venue.into(),
            start_date,
            end_date,
            number_of_rounds,
            players: Vec::new(),
            rounds: Vec::new(),
            current_round_index: 0,
            completed: false,
        })
    }

    /// Register a player. Registering the same ID twice is a no-op;
    /// registering once any round exists is rejected.
    pub fn register_player(&mut self, player_id: impl Into<PlayerId>) -> TournamentResult<()> {
        if !self.rounds.is_empty() {
            return Err(TournamentError::RegistrationClosed);
        }
        let player_id = player_id.into();
        if !self.players.contains(&player_id) {
            self.players.push(player_id);
        }
        Ok(())
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// 0 while not started, then the 1-indexed number of the latest round.
    pub fn current_round_index(&self) -> usize {
        self.current_round_index
    }

    pub fn current_round(&self) -> Option<&Round> {
        let index = self.current_round_index.checked_sub(1)?;
        self.rounds.get(index)
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Start or advance the tournament.
    ///
    /// Generates round one from a random shuffle, later rounds from the
    /// standings order against the full pairing history. A round must be
    /// fully resolved before the next one is generated; once the configured
    /// number of rounds is resolved, the tournament completes instead.
    pub fn advance_round<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> TournamentResult<AdvanceOutcome> {
        if self.completed {
            return Ok(AdvanceOutcome::AlreadyCompleted);
        }

        if self.rounds.is_empty() {
            let round = pairing::first_round(&self.players, rng)?;
            self.rounds.push(round);
            self.current_round_index = 1;
            info!("tournament {}: generated round 1", self.name);
            return Ok(AdvanceOutcome::NewRound(1));
        }

        if let Some(current) = self.current_round() {
            if !current.is_complete() {
                return Ok(AdvanceOutcome::RoundInProgress);
            }
        }

        if self.rounds.len() >= self.number_of_rounds as usize {
            self.completed = true;
            info!("tournament {}: all rounds resolved, completed", self.name);
            return Ok(AdvanceOutcome::Completed);
        }

        let order: Vec<PlayerId> = self
            .standings()
            .into_iter()
            .map(|standing| standing.player_id)
            .collect();
        let played = pairing::played_pairs(&self.rounds);
        let round = pairing::next_round(&order, &played, rng)?;
        self.rounds.push(round);
        self.current_round_index = self.rounds.len();
        info!(
            "tournament {}: generated round {}",
            self.name, self.current_round_index
        );
        Ok(AdvanceOutcome::NewRound(self.current_round_index))
    }

    /// Record a match result. Lookups are 1-indexed; an invalid winner
    /// leaves the match untouched. Returns the updated match.
    pub fn set_match_result(
        &mut self,
        round_number: usize,
        match_number: usize,
        winner: Option<&str>,
    ) -> TournamentResult<&Match> {
        let not_found = || TournamentError::NotFound {
            round_number,
            match_number,
        };
        let round_index = round_number.checked_sub(1).ok_or_else(not_found)?;
        let match_index = match_number.checked_sub(1).ok_or_else(not_found)?;

        let m = self
            .rounds
            .get_mut(round_index)
            .and_then(|round| round.match_mut(match_index))
            .ok_or_else(not_found)?;
        m.set_result(winner)?;
        debug!(
            "tournament {}: round {round_number} match {match_number} result recorded",
            self.name
        );
        Ok(&*m)
    }

    /// Standings over completed matches: win 1, draw 0.5 each, loss 0.
    /// Sorted by points descending; ties keep registration order.
    pub fn standings(&self) -> Vec<Standing> {
        let mut points: HashMap<&str, f64> = self
            .players
            .iter()
            .map(|player| (player.as_str(), 0.0))
            .collect();

        for round in &self.rounds {
            for m in round.matches() {
                if !m.is_completed() {
                    continue;
                }
                match m.winner() {
                    Some(winner) => {
                        if let Some(score) = points.get_mut(winner) {
                            *score += 1.0;
                        }
                    }
                    None => {
                        for player in m.players() {
                            if let Some(score) = points.get_mut(player) {
                                *score += 0.5;
                            }
                        }
                    }
                }
            }
        }

        let mut table: Vec<Standing> = self
            .players
            .iter()
            .map(|player| Standing {
                player_id: player.clone(),
                points: points.get(player.as_str()).copied().unwrap_or(0.0),
            })
            .collect();
        // Stable sort: ties keep registration order.
        table.sort_by(|a, b| b.points.total_cmp(&a.points));
        table
    }

    /// Explicit completion check, distinct from the advance-based one.
    /// Completes the tournament when every round exists and the last is
    /// fully resolved; the winner is the top standings entry.
    pub fn finish(&mut self) -> FinishOutcome {
        if self.completed {
            return FinishOutcome::AlreadyCompleted {
                standings: self.standings(),
            };
        }
        if self.rounds.len() < self.number_of_rounds as usize {
            return FinishOutcome::RoundsPending {
                standings: self.standings(),
            };
        }
        if self.rounds.last().is_some_and(|round| !round.is_complete()) {
            return FinishOutcome::LastRoundIncomplete {
                standings: self.standings(),
            };
        }

        self.completed = true;
        let standings = self.standings();
        let winner = standings.first().map(|row| row.player_id.clone());
        info!("tournament {}: finished", self.name);
        FinishOutcome::Finished { winner, standings }
    }

    /// Structured record for persistence and reporting; dates formatted
    /// dd-mm-yyyy.
    pub fn to_record(&self) -> TournamentRecord {
        TournamentRecord {
            name: self.name.clone(),
            dates: DatesRecord {
                from: format_date(self.start_date),
                to: format_date(self.end_date),
            },
            venue: self.venue.clone(),
            number_of_rounds: self.number_of_rounds,
            current_round: self.current_round_index,
            completed: self.completed,
            players: self.players.clone(),
            rounds: self.rounds.iter().map(Round::to_records).collect(),
        }
    }

    /// Rebuild a tournament from its persisted record.
    pub fn from_record(record: TournamentRecord) -> TournamentResult<Self> {
        let start_date = parse_date(&record.dates.from)?;
        let end_date = parse_date(&record.dates.to)?;
        let mut tournament = Tournament::new(
            record.name,
            record.venue,
            start_date,
            end_date,
            record.number_of_rounds,
        )?;
        tournament.players = record.players;
        tournament.rounds = record
            .rounds
            .into_iter()
            .map(Round::from_records)
            .collect::<TournamentResult<_>>()?;
        tournament.current_round_index = record.current_round;
        tournament.completed = record.completed;
        Ok(tournament)
    }
}
