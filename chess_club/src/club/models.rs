//! Club data models.

use serde::{Deserialize, Serialize};

/// A club member. The chess ID doubles as the tournament identity key.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Player {
    pub name: String,
    pub email: String,
    pub chess_id: String,
    pub birthday: String,
}

/// A chess club and its roster.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ChessClub {
    pub name: String,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl ChessClub {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
        }
    }

    /// Append a player to the roster. Validation is the caller's job; see
    /// the normalize helpers in [`super::manager`].
    pub fn create_player(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        chess_id: impl Into<String>,
        birthday: impl Into<String>,
    ) -> &Player {
        self.players.push(Player {
            name: name.into(),
            email: email.into(),
            chess_id: chess_id.into(),
            birthday: birthday.into(),
        });
        let index = self.players.len() - 1;
        &self.players[index]
    }

    pub fn find_player(&self, chess_id: &str) -> Option<&Player> {
        self.players
            .iter()
            .find(|player| player.chess_id == chess_id)
    }
}
