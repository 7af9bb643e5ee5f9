//! # Draw configuration
//!
//! A draw is configured either by the number of squads wanted or by how many
//! players each squad should have.
//!
//! ```json
//! {"mode": "squad_count", "value": 3}
//! ```
//!
//! ```json
//! {"mode": "players_per_squad", "value": 5}
//! ```
//!
//! Whatever the mode, a draw never produces fewer than [`MIN_SQUADS`]
//! squads. A squad count above [`MAX_SQUADS`] is rejected.
use super::errors::DrawError;

/// Lower bound on the number of squads a draw produces.
pub const MIN_SQUADS: usize = 2;

/// Upper bound on the squad count a [`DrawMode::SquadCount`] config may ask
/// for.
pub const MAX_SQUADS: usize = 256;

/// How [`DrawConfig::value`] is read.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawMode {
    /// `value` is the number of squads.
    #[default]
    SquadCount,
    /// `value` is the number of players per squad.
    PlayersPerSquad,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawConfig {
    pub mode: DrawMode,
    /// Signed so that bad input coming from a form or a file can be reported
    /// instead of wrapping around.
    pub value: i64,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            mode: DrawMode::SquadCount,
            value: 2,
        }
    }
}

/// What a configuration turns into for a given pool size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawPlan {
    pub squads: usize,
    /// Largest squad size, squads differ by at most one player.
    pub approx_players_per_squad: usize,
}

impl DrawConfig {
    pub fn new(mode: DrawMode, value: i64) -> Self {
        Self { mode, value }
    }

    pub fn squad_count(value: i64) -> Self {
        Self::new(DrawMode::SquadCount, value)
    }

    pub fn players_per_squad(value: i64) -> Self {
        Self::new(DrawMode::PlayersPerSquad, value)
    }

    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, DrawError> {
        let config: DrawConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, DrawError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The value has to be strictly positive in both modes, and a squad
    /// count can not exceed [`MAX_SQUADS`].
    pub fn validate(&self) -> Result<(), DrawError> {
        if self.value <= 0 {
            return Err(DrawError::NonPositiveValue(self.value));
        }
        let value = usize::try_from(self.value).map_err(|_| {
            DrawError::InvalidConfig(format!("value {} does not fit in usize", self.value))
        })?;
        if self.mode == DrawMode::SquadCount && value > MAX_SQUADS {
            return Err(DrawError::InvalidConfig(format!(
                "{value} squads requested, at most {MAX_SQUADS} allowed"
            )));
        }
        Ok(())
    }

    /// Number of squads to draw for `player_count` players, floored at
    /// [`MIN_SQUADS`].
    pub fn squad_count_for(&self, player_count: usize) -> Result<usize, DrawError> {
        self.validate()?;
        // validate() guarantees the conversion
        let value = self.value as usize;
        let count = match self.mode {
            DrawMode::SquadCount => value,
            DrawMode::PlayersPerSquad => player_count.div_ceil(value),
        };
        Ok(count.max(MIN_SQUADS))
    }

    /// Preview of the draw, e.g. for "3 squads of about 5 players".
    pub fn preview(&self, player_count: usize) -> Result<DrawPlan, DrawError> {
        let squads = self.squad_count_for(player_count)?;
        Ok(DrawPlan {
            squads,
            approx_players_per_squad: player_count.div_ceil(squads),
        })
    }
}
