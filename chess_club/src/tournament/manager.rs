//! File-backed tournament store.
//!
//! Loads every tournament record found in a data directory, keeps them in an
//! in-memory index keyed by file path, and writes them back on save. Saving
//! happens after successful state-changing operations, never mid-operation;
//! single-writer access per persisted record is assumed.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use super::errors::{TournamentError, TournamentResult};
use super::models::TournamentRecord;
use super::state_machine::Tournament;

/// In-memory index of persisted tournaments.
pub struct TournamentManager {
    data_folder: PathBuf,
    tournaments: Vec<(PathBuf, Tournament)>,
}

impl TournamentManager {
    /// Load every `*.json` record under `data_folder`.
    ///
    /// Files are read in file-name order so the index is deterministic.
    /// I/O and parse failures surface unmodified.
    pub fn load(data_folder: impl Into<PathBuf>) -> TournamentResult<Self> {
        let data_folder = data_folder.into();

        let mut paths = Vec::new();
        for entry in fs::read_dir(&data_folder)? {
            let path = entry?.path();
            if path.is_file() && path.extension().and_then(OsStr::to_str) == Some("json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut tournaments = Vec::new();
        for path in paths {
            let raw = fs::read_to_string(&path)?;
            let record: TournamentRecord = serde_json::from_str(&raw)?;
            tournaments.push((path, Tournament::from_record(record)?));
        }
        info!(
            "loaded {} tournaments from {}",
            tournaments.len(),
            data_folder.display()
        );
        Ok(Self {
            data_folder,
            tournaments,
        })
    }

    pub fn data_folder(&self) -> &Path {
        &self.data_folder
    }

    pub fn len(&self) -> usize {
        self.tournaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }

    /// Index entries, optionally filtered by completion state.
    pub fn list(&self, completed: Option<bool>) -> Vec<(usize, &Path, &Tournament)> {
        self.tournaments
            .iter()
            .enumerate()
            .filter(|(_, (_, tournament))| match completed {
                None => true,
                Some(flag) => tournament.is_completed() == flag,
            })
            .map(|(index, (path, tournament))| (index, path.as_path(), tournament))
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<(&Path, &Tournament)> {
        self.tournaments
            .get(index)
            .map(|(path, tournament)| (path.as_path(), tournament))
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tournament> {
        self.tournaments
            .get_mut(index)
            .map(|(_, tournament)| tournament)
    }

    /// Write the tournament at `index` back to its file (pretty JSON).
    pub fn save(&self, index: usize) -> TournamentResult<()> {
        let (path, tournament) = self
            .tournaments
            .get(index)
            .ok_or(TournamentError::UnknownTournament(index))?;
        let json = serde_json::to_string_pretty(&tournament.to_record())?;
        fs::write(path, json)?;
        info!("saved tournament {} to {}", tournament.name, path.display());
        Ok(())
    }

    /// Upsert a tournament under `file_name` in the data folder and persist
    /// it. Returns the index it lives at.
    pub fn create(&mut self, tournament: Tournament, file_name: &str) -> TournamentResult<usize> {
        let path = self.data_folder.join(file_name);
        let index = match self.tournaments.iter().position(|(p, _)| p == &path) {
            Some(index) => {
                self.tournaments[index].1 = tournament;
                index
            }
            None => {
                self.tournaments.push((path, tournament));
                self.tournaments.len() - 1
            }
        };
        self.save(index)?;
        Ok(index)
    }
}
