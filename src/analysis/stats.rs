use std::borrow::Borrow;

use crate::core::{Attribute, Player, Sector};

/// Average of one attribute over `players`, or zero for nobody.
pub fn attribute_average<P: Borrow<Player>>(players: &[P], attribute: Attribute) -> f64 {
    if players.is_empty() {
        return 0.0;
    }
    let sum: f64 = players
        .iter()
        .map(|p| f64::from(p.borrow().attribute(attribute)))
        .sum();
    sum / players.len() as f64
}

/// The members of `players` playing in `sector`, in their original order.
pub fn sector_members<P: Borrow<Player>>(players: &[P], sector: Sector) -> Vec<&Player> {
    players
        .iter()
        .map(<P as Borrow<Player>>::borrow)
        .filter(|p| sector.contains(p.position))
        .collect()
}

/// Squad wide numbers the observation rules are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquadProfile {
    pub shooting: f64,
    pub passing: f64,
    pub speed: f64,
    pub marking: f64,
    pub ball_control: f64,
    pub dribbling: f64,
    /// Average speed of the defense, `None` without defenders.
    pub defense_speed: Option<f64>,
    /// Average speed of the attack, `None` without forwards.
    pub attack_speed: Option<f64>,
    pub num_forwards: usize,
    pub num_defenders: usize,
}

impl SquadProfile {
    pub fn new<P: Borrow<Player>>(players: &[P]) -> Self {
        let defenders = sector_members(players, Sector::Defense);
        let attackers = sector_members(players, Sector::Attack);
        let sector_speed = |members: &[&Player]| {
            (!members.is_empty()).then(|| attribute_average(members, Attribute::Speed))
        };

        Self {
            shooting: attribute_average(players, Attribute::Shooting),
            passing: attribute_average(players, Attribute::Passing),
            speed: attribute_average(players, Attribute::Speed),
            marking: attribute_average(players, Attribute::Marking),
            ball_control: attribute_average(players, Attribute::BallControl),
            dribbling: attribute_average(players, Attribute::Dribbling),
            defense_speed: sector_speed(defenders.as_slice()),
            attack_speed: sector_speed(attackers.as_slice()),
            num_forwards: attackers.len(),
            num_defenders: defenders.len(),
        }
    }

    /// Attack speed minus defense speed, when both sectors are present.
    pub fn speed_gap(&self) -> Option<f64> {
        Some(self.attack_speed? - self.defense_speed?)
    }
}
