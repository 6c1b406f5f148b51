//! Tournament data models: matches, rounds, and their persisted records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::{TournamentError, TournamentResult};
use crate::DATE_FORMAT;

/// Chess ID of a registered player; the identity key across a tournament.
pub type PlayerId = String;

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(value: &str) -> TournamentResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| TournamentError::InvalidDate(value.to_string()))
}

/// Order-normalized pair key; the same two players yield the same key
/// regardless of board order.
pub fn pair_key(a: &str, b: &str) -> (PlayerId, PlayerId) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// A single pairing between two players, plus its result.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Match {
    player_one: PlayerId,
    player_two: PlayerId,
    completed: bool,
    winner: Option<PlayerId>,
}

impl Match {
    pub fn new(
        player_one: impl Into<PlayerId>,
        player_two: impl Into<PlayerId>,
    ) -> TournamentResult<Self> {
        let player_one = player_one.into();
        let player_two = player_two.into();
        if player_one == player_two {
            return Err(TournamentError::InvalidPairing(player_one));
        }
        Ok(Self {
            player_one,
            player_two,
            completed: false,
            winner: None,
        })
    }

    pub fn player_one(&self) -> &str {
        &self.player_one
    }

    pub fn player_two(&self) -> &str {
        &self.player_two
    }

    pub fn players(&self) -> [&str; 2] {
        [&self.player_one, &self.player_two]
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Winner of a completed match; `None` means a draw (or not played yet).
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Order-normalized key for repeat-pairing detection.
    pub fn pair(&self) -> (PlayerId, PlayerId) {
        pair_key(&self.player_one, &self.player_two)
    }

    /// Record the outcome: `Some(id)` for a win, `None` for a draw.
    ///
    /// Marks the match completed. Calling again overwrites the previous
    /// result; there is no already-completed guard.
    pub fn set_result(&mut self, winner: Option<&str>) -> TournamentResult<()> {
        if let Some(w) = winner {
            if w != self.player_one && w != self.player_two {
                return Err(TournamentError::InvalidWinner {
                    winner: w.to_string(),
                    player_one: self.player_one.clone(),
                    player_two: self.player_two.clone(),
                });
            }
        }
        self.winner = winner.map(str::to_string);
        self.completed = true;
        Ok(())
    }

    pub fn to_record(&self) -> MatchRecord {
        MatchRecord {
            players: [self.player_one.clone(), self.player_two.clone()],
            completed: self.completed,
            winner: self.winner.clone(),
        }
    }

    /// Rebuild a match from its persisted record, re-validating the pairing
    /// and the winner. A winner on a non-completed record is dropped, since
    /// a winner is only meaningful once the match completed.
    pub fn from_record(record: MatchRecord) -> TournamentResult<Self> {
        let [player_one, player_two] = record.players;
        let mut m = Match::new(player_one, player_two)?;
        if record.completed {
            m.set_result(record.winner.as_deref())?;
        }
        Ok(m)
    }
}

/// Persisted form of a [`Match`]: the two players in original pairing order.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MatchRecord {
    pub players: [PlayerId; 2],
    pub completed: bool,
    pub winner: Option<PlayerId>,
}

/// An ordered collection of matches. The ordering is display order only.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Round {
    matches: Vec<Match>,
}

impl Round {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_match(&mut self, m: Match) {
        self.matches.push(m);
    }

    /// Complete iff non-empty and every match completed.
    pub fn is_complete(&self) -> bool {
        !self.matches.is_empty() && self.matches.iter().all(Match::is_completed)
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub(crate) fn match_mut(&mut self, index: usize) -> Option<&mut Match> {
        self.matches.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn to_records(&self) -> Vec<MatchRecord> {
        self.matches.iter().map(Match::to_record).collect()
    }

    pub fn from_records(records: Vec<MatchRecord>) -> TournamentResult<Self> {
        let matches = records
            .into_iter()
            .map(Match::from_record)
            .collect::<TournamentResult<_>>()?;
        Ok(Self { matches })
    }
}

/// One row of the standings table.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Standing {
    pub player_id: PlayerId,
    pub points: f64,
}

/// Persisted date range, both ends as dd-mm-yyyy strings.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DatesRecord {
    pub from: String,
    pub to: String,
}

/// Persisted form of a whole tournament, the shape written to disk.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TournamentRecord {
    pub name: String,
    pub dates: DatesRecord,
    pub venue: String,
    pub number_of_rounds: u32,
    pub current_round: usize,
    pub completed: bool,
    pub players: Vec<PlayerId>,
    pub rounds: Vec<Vec<MatchRecord>>,
}
