//! The plain data the draw and the analysis work on.
mod attribute;
mod player;
mod position;
mod roster;

pub use attribute::Attribute;
pub use player::{Attributes, Player};
pub use position::{Position, PositionError, Sector};
pub use roster::{Roster, RosterError};
