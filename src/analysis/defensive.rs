use std::borrow::Borrow;
use std::fmt;

use crate::core::{Player, Position};

/// Defensive weight of a position. Goalkeepers weigh nothing and are left
/// out of the average entirely.
pub fn defensive_weight(position: Position) -> u32 {
    match position {
        Position::Goalkeeper => 0,
        Position::CenterBack => 4,
        Position::FullBack | Position::DefensiveMidfielder => 3,
        Position::Midfielder => 2,
        Position::Forward => 1,
    }
}

/// Bands ordered from most attacking to most defensive.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum DefensiveBand {
    VeryExposed,
    Loose,
    Balanced,
    Solid,
    Entrenched,
}

impl DefensiveBand {
    pub fn from_average(average: f64) -> Self {
        if average < 1.8 {
            DefensiveBand::VeryExposed
        } else if average < 2.4 {
            DefensiveBand::Loose
        } else if average < 2.9 {
            DefensiveBand::Balanced
        } else if average < 3.5 {
            DefensiveBand::Solid
        } else {
            DefensiveBand::Entrenched
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DefensiveBand::VeryExposed => "Very Exposed",
            DefensiveBand::Loose => "Loose",
            DefensiveBand::Balanced => "Balanced",
            DefensiveBand::Solid => "Solid",
            DefensiveBand::Entrenched => "Entrenched",
        }
    }

    pub fn describe(&self, score: u32) -> String {
        match self {
            DefensiveBand::VeryExposed => {
                format!("Very attacking squad ({score}), vulnerable at the back.")
            }
            DefensiveBand::Loose => {
                format!("Light squad ({score}), takes the initiative but careful at the back.")
            }
            DefensiveBand::Balanced => format!("Ideal distribution ({score})."),
            DefensiveBand::Solid => format!("Hard squad to break down ({score})."),
            DefensiveBand::Entrenched => format!("Parking the bus ({score})."),
        }
    }
}

impl fmt::Display for DefensiveBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DefensiveIndex {
    /// Sum of the weights of every player.
    pub score: u32,
    /// `score` over the number of outfield players, zero without any.
    pub average: f64,
    pub classification: DefensiveBand,
    pub description: String,
}

impl DefensiveIndex {
    pub fn classify<P: Borrow<Player>>(players: &[P]) -> Self {
        let mut score = 0;
        let mut outfield: u32 = 0;
        for player in players {
            let position = player.borrow().position;
            score += defensive_weight(position);
            if !position.is_goalkeeper() {
                outfield += 1;
            }
        }
        let average = if outfield == 0 {
            0.0
        } else {
            f64::from(score) / f64::from(outfield)
        };
        let classification = DefensiveBand::from_average(average);

        Self {
            score,
            average,
            classification,
            description: classification.describe(score),
        }
    }
}
