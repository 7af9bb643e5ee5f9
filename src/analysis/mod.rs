//! Tactical read on a drawn squad.
//!
//! Every squad gets:
//!
//! - a defensive index, a positional score classified into five bands,
//! - a comment per sector comparing that sector with the rest of the squad,
//! - up to two squad wide observations picked by priority,
//! - a verdict of the squad's mean rating against a baseline.
//!
//! Sector comments come from a [`PhraseBook`]. It is validated when a
//! [`TacticalAnalyzer`] is built, so a missing entry is reported up front.
//!
//! # Example
//!
//! ```
//! use squad_draw::analysis::{DefensiveBand, TacticalAnalyzer};
//! use squad_draw::core::{Player, Position};
//!
//! let squad = vec![
//!     Player::new("1", "Gil", Position::Goalkeeper, 70),
//!     Player::new("2", "Lia", Position::CenterBack, 72),
//!     Player::new("3", "Ana", Position::CenterBack, 68),
//!     Player::new("4", "Max", Position::Forward, 81),
//! ];
//!
//! let analyzer = TacticalAnalyzer::new().unwrap();
//! let result = analyzer.analyze_squad(&squad, &mut rand::rng());
//! assert_eq!(9, result.defensive_index.score);
//! assert_eq!(DefensiveBand::Solid, result.defensive_index.classification);
//! ```
mod analyzer;
mod defensive;
mod observations;
mod overall;
mod phrases;
mod sector;
mod stats;

pub use analyzer::{AnalysisResult, SectorAnalysis, TacticalAnalyzer, analyze_draw};
pub use defensive::{DefensiveBand, DefensiveIndex, defensive_weight};
pub use observations::{MAX_OBSERVATIONS, Observation, matching_observations, synthesize};
pub use overall::{DEFAULT_REFERENCE_AVERAGE, EVEN_MARGIN, OverallVerdict, compare};
pub use phrases::{Direction, PhraseBook, PhraseBookError, PhraseKey};
pub use sector::{
    CommentarySource, EXTREME_DEVIATION, NOTABLE_DEVIATION, SectorCommentary, SectorInsight,
    SectorRule, analyze_sector, most_deviating,
};
pub use stats::{SquadProfile, attribute_average, sector_members};
