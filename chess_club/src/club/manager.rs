//! Club store and player-entry validation.
//!
//! The normalize helpers mirror the entry rules enforced at registration
//! time: lowercased well-formed emails, uppercased `XXNNNNN` chess IDs, and
//! past `dd-mm-yyyy` birthdays.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use log::info;

use super::errors::{ClubError, ClubResult};
use super::models::{ChessClub, Player};
use crate::DATE_FORMAT;

/// Trim and lowercase an email address, rejecting malformed ones.
pub fn normalize_email(value: &str) -> ClubResult<String> {
    let normalized = value.trim().to_lowercase();
    let well_formed = match normalized.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && local
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
                && domain_is_valid(domain)
        }
        None => false,
    };
    if well_formed {
        Ok(normalized)
    } else {
        Err(ClubError::InvalidEmail(value.trim().to_string()))
    }
}

fn domain_is_valid(domain: &str) -> bool {
    let Some((head, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !head.is_empty()
        && head
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Trim and uppercase a chess ID, rejecting anything that is not two
/// letters followed by five digits.
pub fn normalize_chess_id(value: &str) -> ClubResult<String> {
    let normalized = value.trim().to_uppercase();
    let bytes = normalized.as_bytes();
    let well_formed = bytes.len() == 7
        && bytes[..2].iter().all(|b| b.is_ascii_uppercase())
        && bytes[2..].iter().all(|b| b.is_ascii_digit());
    if well_formed {
        Ok(normalized)
    } else {
        Err(ClubError::InvalidChessId(value.trim().to_string()))
    }
}

/// Validate a `dd-mm-yyyy` birthday; future dates are rejected.
pub fn normalize_birthday(value: &str) -> ClubResult<String> {
    let normalized = value.trim().to_string();
    let parsed = NaiveDate::parse_from_str(&normalized, DATE_FORMAT)
        .map_err(|_| ClubError::InvalidBirthday(normalized.clone()))?;
    if parsed > Local::now().date_naive() {
        return Err(ClubError::InvalidBirthday(normalized));
    }
    Ok(normalized)
}

/// In-memory index of persisted clubs.
pub struct ClubManager {
    data_folder: PathBuf,
    clubs: Vec<(PathBuf, ChessClub)>,
}

impl ClubManager {
    /// Load every `*.json` club file under `data_folder`, in file-name
    /// order. I/O and parse failures surface unmodified.
    pub fn load(data_folder: impl Into<PathBuf>) -> ClubResult<Self> {
        let data_folder = data_folder.into();

        let mut paths = Vec::new();
        for entry in fs::read_dir(&data_folder)? {
            let path = entry?.path();
            if path.is_file() && path.extension().and_then(OsStr::to_str) == Some("json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut clubs = Vec::new();
        for path in paths {
            let raw = fs::read_to_string(&path)?;
            let club: ChessClub = serde_json::from_str(&raw)?;
            clubs.push((path, club));
        }
        info!("loaded {} clubs from {}", clubs.len(), data_folder.display());
        Ok(Self { data_folder, clubs })
    }

    pub fn data_folder(&self) -> &Path {
        &self.data_folder
    }

    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    pub fn clubs(&self) -> impl Iterator<Item = &ChessClub> {
        self.clubs.iter().map(|(_, club)| club)
    }

    pub fn get(&self, index: usize) -> Option<&ChessClub> {
        self.clubs.get(index).map(|(_, club)| club)
    }

    /// Write the club at `index` back to its file (pretty JSON).
    pub fn save(&self, index: usize) -> ClubResult<()> {
        let (path, club) = self
            .clubs
            .get(index)
            .ok_or(ClubError::UnknownClub(index))?;
        let json = serde_json::to_string_pretty(club)?;
        fs::write(path, json)?;
        info!("saved club {} to {}", club.name, path.display());
        Ok(())
    }

    /// Upsert a club under `file_name` in the data folder and persist it.
    pub fn create(&mut self, club: ChessClub, file_name: &str) -> ClubResult<usize> {
        let path = self.data_folder.join(file_name);
        let index = match self.clubs.iter().position(|(p, _)| p == &path) {
            Some(index) => {
                self.clubs[index].1 = club;
                index
            }
            None => {
                self.clubs.push((path, club));
                self.clubs.len() - 1
            }
        };
        self.save(index)?;
        Ok(index)
    }

    /// Validate and add a player to the club at `index`, then persist the
    /// club. Returns the stored player.
    pub fn add_player(
        &mut self,
        index: usize,
        name: &str,
        email: &str,
        chess_id: &str,
        birthday: &str,
    ) -> ClubResult<Player> {
        let email = normalize_email(email)?;
        let chess_id = normalize_chess_id(chess_id)?;
        let birthday = normalize_birthday(birthday)?;

        let club = self
            .clubs
            .get_mut(index)
            .map(|(_, club)| club)
            .ok_or(ClubError::UnknownClub(index))?;
        if club.find_player(&chess_id).is_some() {
            return Err(ClubError::ChessIdTaken(chess_id));
        }
        let player = club.create_player(name.trim(), email, chess_id, birthday).clone();
        self.save(index)?;
        Ok(player)
    }

    pub fn find_player_by_chess_id(&self, chess_id: &str) -> Option<&Player> {
        self.clubs()
            .find_map(|club| club.find_player(chess_id))
    }

    /// Case-insensitive lookup by display name across all clubs.
    pub fn find_player_by_name(&self, name: &str) -> Option<&Player> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        self.clubs().find_map(|club| {
            club.players
                .iter()
                .find(|player| player.name.trim().to_lowercase() == wanted)
        })
    }

    /// Display name for a chess ID, falling back to the raw ID.
    pub fn player_name(&self, chess_id: &str) -> String {
        self.find_player_by_chess_id(chess_id)
            .map(|player| player.name.clone())
            .unwrap_or_else(|| chess_id.to_string())
    }
}
