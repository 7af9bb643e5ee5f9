//! Drawing squads out of a pool of players.
//!
//! The draw is a position aware snake draft. The pool is shuffled, split by
//! position, each position group is shuffled again and the players are then
//! dealt to the squads going back and forth across the squad slots.
//!
//! # Example
//!
//! ```
//! use rand::rng;
//! use squad_draw::core::{Player, Position};
//! use squad_draw::draw::{DrawConfig, draw_squads};
//!
//! let players = vec![
//!     Player::new("1", "Gil", Position::Goalkeeper, 70),
//!     Player::new("2", "Rui", Position::Goalkeeper, 64),
//!     Player::new("3", "Lia", Position::CenterBack, 72),
//!     Player::new("4", "Max", Position::Forward, 81),
//! ];
//! let draw = draw_squads(&players, &DrawConfig::squad_count(2), &mut rng()).unwrap();
//!
//! // Each squad ends up with one goalkeeper.
//! for squad in &draw.squads {
//!     assert_eq!(
//!         1,
//!         squad.members.iter().filter(|p| p.position == Position::Goalkeeper).count()
//!     );
//! }
//! ```
mod config;
mod errors;
mod partitioner;
mod pools;
mod shuffle;
mod squad;

pub use config::{DrawConfig, DrawMode, DrawPlan, MAX_SQUADS, MIN_SQUADS};
pub use errors::DrawError;
pub use partitioner::{draw_squads, partition_squads};
pub use pools::PositionPools;
pub use shuffle::{Randomness, shuffle_in_place, shuffled};
pub use squad::{Draw, Squad, exact_mean_overall, mean_overall};
