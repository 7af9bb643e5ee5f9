//! # squad_draw
//!
//! Split a pickup football roster into squads and get a quick read on each
//! of them.
//!
//! The library has two moving parts:
//!
//! - [`draw`] shuffles the selected players, groups them by position and
//!   hands them out to squads with a snake draft so every position group is
//!   spread as evenly as possible.
//! - [`analysis`] looks at each resulting squad and produces a defensive
//!   index, a comment per sector (defense, midfield, attack), a couple of
//!   squad wide observations and a verdict against a baseline rating.
//!
//! Randomness is always injected. Anything implementing [`rand::Rng`] works,
//! and tests can hand in a fully deterministic source through
//! [`draw::Randomness`].
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use squad_draw::analysis::{TacticalAnalyzer, analyze_draw};
//! use squad_draw::core::{Player, Position};
//! use squad_draw::draw::{DrawConfig, draw_squads};
//!
//! let players: Vec<Player> = (0..10)
//!     .map(|i| {
//!         let position = Position::ALL[i % Position::ALL.len()];
//!         Player::new(format!("p{i}"), format!("Player {i}"), position, 60 + i as u8)
//!     })
//!     .collect();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let draw = draw_squads(&players, &DrawConfig::squad_count(2), &mut rng).unwrap();
//! assert_eq!(draw.squads.len(), 2);
//!
//! let analyzer = TacticalAnalyzer::new().unwrap();
//! let results = analyze_draw(&analyzer, &draw, &mut rng);
//! assert_eq!(results.len(), 2);
//! ```

/// Players, positions, attributes and the roster they come from.
pub mod core;

/// Shuffling, draw configuration and the snake draft partitioner.
pub mod draw;

/// Tactical commentary about drawn squads.
pub mod analysis;

/// Markdown and plain text rendering of a draw.
pub mod report;

/// Assertions over draws, handy for tests and fuzzing.
#[cfg(any(test, feature = "test-util"))]
pub mod test_util;
