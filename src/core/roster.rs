use std::collections::HashSet;

use thiserror::Error;

use super::Player;

/// Errors that can occur while loading a roster or picking players from it.
#[derive(Debug, Error)]
pub enum RosterError {
    #[cfg(feature = "serde")]
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Duplicate player id: {0}")]
    DuplicateId(String),

    #[error("No player with id: {0}")]
    UnknownId(String),
}

/// The registered players a draw pool is picked from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster, rejecting duplicate ids.
    pub fn new(players: Vec<Player>) -> Result<Self, RosterError> {
        let mut seen = HashSet::with_capacity(players.len());
        for player in &players {
            if !seen.insert(player.id.as_str()) {
                return Err(RosterError::DuplicateId(player.id.clone()));
            }
        }
        Ok(Self { players })
    }

    /// Parse a JSON array of players.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let players: Vec<Player> = serde_json::from_str(json)?;
        tracing::debug!(num_players = players.len(), "Parsed roster");
        Self::new(players)
    }

    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, RosterError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Players whose ids are listed, in roster order. Every id has to exist.
    pub fn select<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Player>, RosterError> {
        let wanted: HashSet<&str> = ids.iter().map(|id| id.as_ref()).collect();
        if let Some(missing) = wanted.iter().find(|id| self.get(id).is_none()) {
            return Err(RosterError::UnknownId(missing.to_string()));
        }
        Ok(self
            .players
            .iter()
            .filter(|p| wanted.contains(p.id.as_str()))
            .cloned()
            .collect())
    }

    /// Players flagged as recurring members.
    pub fn recurring(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.recurring)
    }

    /// Like [`Roster::select`] but every recurring member is included too.
    pub fn select_with_recurring<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<Vec<Player>, RosterError> {
        let mut wanted: Vec<&str> = ids.iter().map(|id| id.as_ref()).collect();
        wanted.extend(self.recurring().map(|p| p.id.as_str()));
        self.select(&wanted)
    }

    /// Case insensitive search on the player name.
    pub fn search(&self, fragment: &str) -> Vec<&Player> {
        let needle = fragment.to_lowercase();
        self.players
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }
}
