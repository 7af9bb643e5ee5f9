//! Canned commentary keyed by sector, attribute and direction.
//!
//! The standard book covers every attribute a sector looks at, in both
//! directions. [`PhraseBook::validate`] checks that, and
//! [`super::TacticalAnalyzer`] runs it when it is built so a hole in the
//! table shows up immediately rather than as a silent fallback later on.
use std::collections::HashMap;

use thiserror::Error;

use crate::core::{Attribute, Sector};

use super::sector::SectorRule;

/// Whether a sector sits above or below its reference on an attribute.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    High,
    Low,
}

impl Direction {
    /// Positive deviations are high, anything else low.
    pub fn of(deviation: f64) -> Self {
        if deviation > 0.0 {
            Direction::High
        } else {
            Direction::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhraseKey {
    pub sector: Sector,
    pub attribute: Attribute,
    pub direction: Direction,
}

impl PhraseKey {
    pub fn new(sector: Sector, attribute: Attribute, direction: Direction) -> Self {
        Self {
            sector,
            attribute,
            direction,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum PhraseBookError {
    #[error("No phrases for {sector} {attribute} ({direction:?})")]
    MissingPool {
        sector: Sector,
        attribute: Attribute,
        direction: Direction,
    },

    #[error("Empty phrase pool for {sector} {attribute} ({direction:?})")]
    EmptyPool {
        sector: Sector,
        attribute: Attribute,
        direction: Direction,
    },
}

#[derive(Debug, Clone, Default)]
pub struct PhraseBook {
    pools: HashMap<PhraseKey, Vec<String>>,
}

impl PhraseBook {
    /// An empty book. Every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pool stored under `key`.
    pub fn insert<I, S>(&mut self, key: PhraseKey, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pools
            .insert(key, phrases.into_iter().map(Into::into).collect());
    }

    pub fn get(&self, key: &PhraseKey) -> Option<&[String]> {
        self.pools.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Every attribute each sector considers needs a non-empty pool in both
    /// directions.
    pub fn validate(&self) -> Result<(), PhraseBookError> {
        for sector in Sector::ALL {
            for &attribute in SectorRule::for_sector(sector).attributes {
                for direction in [Direction::High, Direction::Low] {
                    match self.get(&PhraseKey::new(sector, attribute, direction)) {
                        None => {
                            return Err(PhraseBookError::MissingPool {
                                sector,
                                attribute,
                                direction,
                            });
                        }
                        Some([]) => {
                            return Err(PhraseBookError::EmptyPool {
                                sector,
                                attribute,
                                direction,
                            });
                        }
                        Some(_) => {}
                    }
                }
            }
        }
        Ok(())
    }

    /// The built in commentary.
    pub fn standard() -> Self {
        let mut book = Self::new();
        for (sector, attribute, direction, phrases) in STANDARD_PHRASES {
            book.insert(
                PhraseKey::new(*sector, *attribute, *direction),
                phrases.iter().copied(),
            );
        }
        book
    }
}

type PhraseRow = (Sector, Attribute, Direction, &'static [&'static str]);

// The first phrase of each pool is the one used for extreme deviations.
const STANDARD_PHRASES: &[PhraseRow] = &[
    (
        Sector::Defense,
        Attribute::Speed,
        Direction::High,
        &[
            "A quick back line can hold a high line without fearing balls over the top.",
            "Fast defenders win the foot races and recover well.",
            "Defensive pace suits an aggressive pressing game.",
        ],
    ),
    (
        Sector::Defense,
        Attribute::Speed,
        Direction::Low,
        &[
            "A slow defense needs a deep, compact block.",
            "Avoid exposure, this back line can be run past easily.",
            "Dropping off as a unit is essential with this little pace at the back.",
        ],
    ),
    (
        Sector::Defense,
        Attribute::Marking,
        Direction::High,
        &[
            "Aggressive marking can suffocate the opposing attack.",
            "Tough defenders, it's hard to get past this wall.",
            "A squad with fight in its defensive DNA.",
        ],
    ),
    (
        Sector::Defense,
        Attribute::Marking,
        Direction::Low,
        &[
            "Loose marking, stay alert to counterattacks.",
            "A porous defense, avoid losing the ball in midfield.",
            "No bite at the back, expect some soft goals.",
        ],
    ),
    (
        Sector::Defense,
        Attribute::Passing,
        Direction::High,
        &[
            "Clean build up, the defense can start the moves.",
            "Defenders who pass well favor a possession game.",
            "Ball playing defenders can set the play from the back.",
        ],
    ),
    (
        Sector::Defense,
        Attribute::Passing,
        Direction::Low,
        &[
            "Limited passing at the back, prefer long direct balls.",
            "Avoid short build up, the risk of a mistake is high.",
            "The back line passes poorly, play more vertically.",
        ],
    ),
    (
        Sector::Defense,
        Attribute::BallControl,
        Direction::High,
        &[
            "A defense with above average ball control.",
            "Defenders secure on the ball build up calmly.",
        ],
    ),
    (
        Sector::Defense,
        Attribute::BallControl,
        Direction::Low,
        &[
            "Poor first touch at the back, careful with passes into the defense.",
            "The back line is shaky on the ball.",
        ],
    ),
    (
        Sector::Midfield,
        Attribute::Passing,
        Direction::High,
        &[
            "A surgical midfield, made for possession and short passing.",
            "Playmakers in the middle dictate the tempo with precision.",
            "Elite passing quality, lean on the tiki-taka.",
            "A technical midfield turns defense into attack with ease.",
        ],
    ),
    (
        Sector::Midfield,
        Attribute::Passing,
        Direction::Low,
        &[
            "Painful passing in midfield, prefer direct transitions.",
            "A clogged midfield, stringing moves together will be hard.",
            "Lacking technique, play more vertically.",
            "The midfield gives the ball away a lot, keep touches to a minimum.",
        ],
    ),
    (
        Sector::Midfield,
        Attribute::Speed,
        Direction::High,
        &[
            "A quick midfield owns the fast transitions.",
            "Pace in the middle allows lightning counterattacks.",
            "This midfield covers a lot of ground with that speed.",
        ],
    ),
    (
        Sector::Midfield,
        Attribute::Speed,
        Direction::Low,
        &[
            "A slow midfield calls for a positional game.",
            "Passing has to make up for the lack of pace in midfield.",
            "A midfield with no legs, avoid a running game.",
        ],
    ),
    (
        Sector::Midfield,
        Attribute::Marking,
        Direction::High,
        &[
            "A combative midfield that wins the ball back quickly.",
            "Tough holding midfielders make life hard for the opposing playmakers.",
            "The midfield is a defensive steamroller.",
        ],
    ),
    (
        Sector::Midfield,
        Attribute::Marking,
        Direction::Low,
        &[
            "No marking in midfield, the defense will be exposed.",
            "Not much fight in the middle, the opponent will have freedom.",
            "Soft marking in midfield can prove costly.",
        ],
    ),
    (
        Sector::Midfield,
        Attribute::Dribbling,
        Direction::High,
        &[
            "A dribbling midfield breaks the opposing lines.",
            "One against one midfielders create superiority.",
            "A skillful midfield can tip the balance on its own.",
        ],
    ),
    (
        Sector::Midfield,
        Attribute::Dribbling,
        Direction::Low,
        &[
            "Little flair in midfield, rely on quick passes.",
            "No dribbling in the middle, play as a collective.",
        ],
    ),
    (
        Sector::Midfield,
        Attribute::BallControl,
        Direction::High,
        &[
            "A midfield that never loses the ball under pressure.",
            "Clean first touches in midfield keep the ball moving.",
        ],
    ),
    (
        Sector::Midfield,
        Attribute::BallControl,
        Direction::Low,
        &[
            "Heavy touches in midfield, play it simple.",
            "The midfield struggles to keep the ball, move it early.",
        ],
    ),
    (
        Sector::Attack,
        Attribute::Shooting,
        Direction::High,
        &[
            "A lethal attack, any chance becomes a goal.",
            "Absurd firepower, shoot from distance!",
            "Natural finishers, shooting is the main weapon.",
            "Heavy artillery, few chances means many goals.",
        ],
    ),
    (
        Sector::Attack,
        Attribute::Shooting,
        Direction::Low,
        &[
            "Weak finishing, create LOTS of chances to score.",
            "An attack without aim, walk the ball into the net.",
            "Poor shooting forces the squad to find goals another way.",
            "The forwards miss plenty, patience is needed.",
        ],
    ),
    (
        Sector::Attack,
        Attribute::Dribbling,
        Direction::High,
        &[
            "A dribbling attack breaks down packed defenses.",
            "Favorable one against one, make the most of individual skill.",
            "Skillful forwards can settle it on their own.",
            "Dazzling dribbles open up space.",
        ],
    ),
    (
        Sector::Attack,
        Attribute::Dribbling,
        Direction::Low,
        &[
            "An attack without dribbling, rely on movement.",
            "Little individual skill, play as a collective.",
            "Lack of dribbling limits attacking creativity.",
        ],
    ),
    (
        Sector::Attack,
        Attribute::Speed,
        Direction::High,
        &[
            "Lightning fast on the counterattack.",
            "Attacking pace kills any slow defense.",
            "Supersonic forwards exploit the spaces.",
        ],
    ),
    (
        Sector::Attack,
        Attribute::Speed,
        Direction::Low,
        &[
            "A slow attack needs more support play.",
            "Without pace, bet on first time finishes.",
            "No explosiveness, make up for it with positioning.",
        ],
    ),
    (
        Sector::Attack,
        Attribute::BallControl,
        Direction::High,
        &[
            "Forwards with great control can hold the ball up.",
            "Good control up front makes elaborate moves easier.",
        ],
    ),
    (
        Sector::Attack,
        Attribute::BallControl,
        Direction::Low,
        &[
            "Poor control up front, passes have to be precise.",
            "Forwards who are insecure on the ball.",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_book_is_complete() {
        let book = PhraseBook::standard();
        assert!(book.validate().is_ok());
        assert_eq!(STANDARD_PHRASES.len(), book.len());
    }

    #[test]
    fn test_missing_pool_is_reported() {
        let mut book = PhraseBook::standard();
        book.pools
            .remove(&PhraseKey::new(Sector::Attack, Attribute::Speed, Direction::Low));
        assert_eq!(
            Err(PhraseBookError::MissingPool {
                sector: Sector::Attack,
                attribute: Attribute::Speed,
                direction: Direction::Low,
            }),
            book.validate()
        );
    }

    #[test]
    fn test_empty_pool_is_reported() {
        let mut book = PhraseBook::standard();
        book.insert(
            PhraseKey::new(Sector::Midfield, Attribute::Dribbling, Direction::High),
            Vec::<String>::new(),
        );
        assert!(matches!(
            book.validate(),
            Err(PhraseBookError::EmptyPool { .. })
        ));
    }

    #[test]
    fn test_empty_book_fails() {
        assert!(PhraseBook::new().validate().is_err());
    }

    #[test]
    fn test_direction_of() {
        assert_eq!(Direction::High, Direction::of(0.5));
        assert_eq!(Direction::Low, Direction::of(-10.0));
    }
}
