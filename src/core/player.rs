use super::{Attribute, Position};

/// Skill ratings, nominally 0 to 100.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attributes {
    #[cfg_attr(feature = "serde", serde(default))]
    pub shooting: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub passing: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub speed: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub marking: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ball_control: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dribbling: u8,
}

impl Attributes {
    /// Same value for every attribute.
    pub const fn uniform(value: u8) -> Self {
        Self {
            shooting: value,
            passing: value,
            speed: value,
            marking: value,
            ball_control: value,
            dribbling: value,
        }
    }

    pub const fn get(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Shooting => self.shooting,
            Attribute::Passing => self.passing,
            Attribute::Speed => self.speed,
            Attribute::Marking => self.marking,
            Attribute::BallControl => self.ball_control,
            Attribute::Dribbling => self.dribbling,
        }
    }

    /// Return a copy with one attribute replaced.
    pub fn with(mut self, attribute: Attribute, value: u8) -> Self {
        match attribute {
            Attribute::Shooting => self.shooting = value,
            Attribute::Passing => self.passing = value,
            Attribute::Speed => self.speed = value,
            Attribute::Marking => self.marking = value,
            Attribute::BallControl => self.ball_control = value,
            Attribute::Dribbling => self.dribbling = value,
        }
        self
    }
}

/// A registered player as handed to the draw. The draw and the analysis only
/// ever read players.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    /// Opaque identifier, unique within a roster.
    pub id: String,
    pub name: String,
    pub position: Position,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub attributes: Attributes,
    /// Overall rating. Authoritative for goalkeepers.
    pub overall: u8,
    /// Recurring members get pre-selected for every draw.
    #[cfg_attr(feature = "serde", serde(default))]
    pub recurring: bool,
}

impl Player {
    /// Create a player with every attribute set to zero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: Position,
        overall: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            attributes: Attributes::default(),
            overall,
            recurring: false,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }

    pub fn attribute(&self, attribute: Attribute) -> u8 {
        self.attributes.get(attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_lookup_matches_fields() {
        let attrs = Attributes {
            shooting: 1,
            passing: 2,
            speed: 3,
            marking: 4,
            ball_control: 5,
            dribbling: 6,
        };
        let values: Vec<u8> = Attribute::ALL.iter().map(|a| attrs.get(*a)).collect();
        assert_eq!(vec![1, 2, 3, 4, 5, 6], values);
    }

    #[test]
    fn test_with_replaces_one_attribute() {
        let attrs = Attributes::uniform(50).with(Attribute::Speed, 90);
        assert_eq!(90, attrs.speed);
        assert_eq!(50, attrs.passing);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_flat_record() {
        let json = r#"{
            "id": "7",
            "name": "Rafa",
            "position": "full_back",
            "shooting": 40,
            "passing": 70,
            "speed": 88,
            "marking": 72,
            "ball_control": 65,
            "dribbling": 60,
            "overall": 71,
            "recurring": true
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(Position::FullBack, player.position);
        assert_eq!(88, player.attribute(Attribute::Speed));
        assert!(player.recurring);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_goalkeeper_without_attributes() {
        let json = r#"{"id": "1", "name": "Zé", "position": "GK", "overall": 80}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(Attributes::default(), player.attributes);
        assert!(!player.recurring);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_unknown_position_is_rejected() {
        let json = r#"{"id": "1", "name": "X", "position": "winger", "overall": 80}"#;
        assert!(serde_json::from_str::<Player>(json).is_err());
    }
}
