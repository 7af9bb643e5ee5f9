use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Raised when a position tag can't be mapped onto one of the six known
/// positions. This is a data integrity problem with the roster, never
/// something to skip over.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum PositionError {
    #[error("Unknown position tag: {0:?}")]
    Unknown(String),
}

/// The playing position of a registered player.
///
/// The declaration order is also the order position groups are handed out
/// in during a draw, goalkeepers first and forwards last.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Position {
    #[cfg_attr(feature = "serde", serde(alias = "GK"))]
    Goalkeeper,
    #[cfg_attr(feature = "serde", serde(alias = "CB"))]
    CenterBack,
    #[cfg_attr(feature = "serde", serde(alias = "FB"))]
    FullBack,
    #[cfg_attr(feature = "serde", serde(alias = "DM"))]
    DefensiveMidfielder,
    #[cfg_attr(feature = "serde", serde(alias = "MF"))]
    Midfielder,
    #[cfg_attr(feature = "serde", serde(alias = "FW"))]
    Forward,
}

impl Position {
    /// Every position, in draw order.
    pub const ALL: [Position; 6] = [
        Position::Goalkeeper,
        Position::CenterBack,
        Position::FullBack,
        Position::DefensiveMidfielder,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Index of this position inside [`Position::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The tactical sector the position belongs to. Goalkeepers sit outside
    /// every sector.
    pub const fn sector(self) -> Option<Sector> {
        match self {
            Position::Goalkeeper => None,
            Position::CenterBack | Position::FullBack => Some(Sector::Defense),
            Position::DefensiveMidfielder | Position::Midfielder => Some(Sector::Midfield),
            Position::Forward => Some(Sector::Attack),
        }
    }

    pub const fn is_goalkeeper(self) -> bool {
        matches!(self, Position::Goalkeeper)
    }

    /// Two letter code used in listings.
    pub const fn short_code(self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::CenterBack => "CB",
            Position::FullBack => "FB",
            Position::DefensiveMidfielder => "DM",
            Position::Midfielder => "MF",
            Position::Forward => "FW",
        }
    }

    const fn snake_name(self) -> &'static str {
        match self {
            Position::Goalkeeper => "goalkeeper",
            Position::CenterBack => "center_back",
            Position::FullBack => "full_back",
            Position::DefensiveMidfielder => "defensive_midfielder",
            Position::Midfielder => "midfielder",
            Position::Forward => "forward",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::CenterBack => "Center Back",
            Position::FullBack => "Full Back",
            Position::DefensiveMidfielder => "Defensive Midfielder",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        };
        f.write_str(name)
    }
}

/// Accepts the snake case names used in JSON (`center_back`) as well as the
/// two letter codes (`CB`), ignoring case and surrounding whitespace.
impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Position::ALL
            .into_iter()
            .find(|p| {
                tag.eq_ignore_ascii_case(p.snake_name()) || tag.eq_ignore_ascii_case(p.short_code())
            })
            .ok_or_else(|| PositionError::Unknown(s.to_string()))
    }
}

impl TryFrom<&str> for Position {
    type Error = PositionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Tactical grouping of outfield positions used for commentary.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Sector {
    Defense,
    Midfield,
    Attack,
}

impl Sector {
    pub const ALL: [Sector; 3] = [Sector::Defense, Sector::Midfield, Sector::Attack];

    /// The positions that make up the sector.
    pub const fn positions(self) -> &'static [Position] {
        match self {
            Sector::Defense => &[Position::CenterBack, Position::FullBack],
            Sector::Midfield => &[Position::DefensiveMidfielder, Position::Midfielder],
            Sector::Attack => &[Position::Forward],
        }
    }

    pub fn contains(self, position: Position) -> bool {
        position.sector() == Some(self)
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sector::Defense => "Defense",
            Sector::Midfield => "Midfield",
            Sector::Attack => "Attack",
        };
        f.write_str(name)
    }
}
