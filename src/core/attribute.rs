use std::fmt;

/// The six skill attributes every outfield player is rated on.
///
/// Goalkeepers carry the fields too but they hold no meaning for them, only
/// the overall rating does.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Attribute {
    Shooting,
    Passing,
    Speed,
    Marking,
    BallControl,
    Dribbling,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Shooting,
        Attribute::Passing,
        Attribute::Speed,
        Attribute::Marking,
        Attribute::BallControl,
        Attribute::Dribbling,
    ];
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Attribute::Shooting => "shooting",
            Attribute::Passing => "passing",
            Attribute::Speed => "speed",
            Attribute::Marking => "marking",
            Attribute::BallControl => "ball control",
            Attribute::Dribbling => "dribbling",
        };
        f.write_str(name)
    }
}
