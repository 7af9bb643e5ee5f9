use std::borrow::Borrow;

use crate::core::Player;
use crate::draw::exact_mean_overall;

/// Baseline used when no draw wide average is supplied.
pub const DEFAULT_REFERENCE_AVERAGE: f64 = 70.0;

/// How far a squad average may sit from the baseline and still be even.
pub const EVEN_MARGIN: f64 = 2.0;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum OverallVerdict {
    Favored,
    Underdog,
    Even,
}

impl OverallVerdict {
    pub fn from_difference(diff: f64) -> Self {
        if diff > EVEN_MARGIN {
            OverallVerdict::Favored
        } else if diff < -EVEN_MARGIN {
            OverallVerdict::Underdog
        } else {
            OverallVerdict::Even
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            OverallVerdict::Favored => "🏆 Star studded squad, favorite on average strength!",
            OverallVerdict::Underdog => {
                "🔥 Challenge accepted, lower average but the game is played on the pitch!"
            }
            OverallVerdict::Even => "⚖️ Total uncertainty, the details will decide it.",
        }
    }
}

/// Compare the squad's mean overall against `reference_average`. An empty
/// squad averages 0.
pub fn compare<P: Borrow<Player>>(players: &[P], reference_average: f64) -> OverallVerdict {
    let diff = exact_mean_overall(players) - reference_average;
    OverallVerdict::from_difference(diff)
}
