use std::borrow::Borrow;

use uuid::Uuid;

use crate::core::Player;

use super::config::DrawConfig;

/// Mean overall rating rounded to the nearest integer, halves rounding up.
/// Zero when there are no players.
pub fn mean_overall<P: Borrow<Player>>(players: &[P]) -> u8 {
    if players.is_empty() {
        return 0;
    }
    let n = players.len() as u64;
    let sum: u64 = players.iter().map(|p| u64::from(p.borrow().overall)).sum();
    // (2 * sum + n) / (2 * n) == floor(sum / n + 0.5)
    ((2 * sum + n) / (2 * n)) as u8
}

/// Unrounded mean overall rating. Zero when there are no players.
pub fn exact_mean_overall<P: Borrow<Player>>(players: &[P]) -> f64 {
    if players.is_empty() {
        return 0.0;
    }
    let sum: f64 = players.iter().map(|p| f64::from(p.borrow().overall)).sum();
    sum / players.len() as f64
}

/// One squad produced by a draw. Members are borrowed from the pool that was
/// drawn and are listed in the order they were handed out.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Squad<'a> {
    /// 1-based sequence number, also the sort key.
    pub number: usize,
    pub id: String,
    pub name: String,
    pub members: Vec<&'a Player>,
    pub mean_overall: u8,
}

impl<'a> Squad<'a> {
    pub(crate) fn empty(draw_id: Uuid, number: usize) -> Self {
        Self {
            number,
            id: format!("squad-{draw_id}-{number}"),
            name: format!("Squad {number}"),
            members: Vec::new(),
            mean_overall: 0,
        }
    }

    pub(crate) fn push(&mut self, player: &'a Player) {
        self.members.push(player);
    }

    pub(crate) fn update_mean(&mut self) {
        self.mean_overall = mean_overall(&self.members);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The outcome of one draw.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct Draw<'a> {
    pub id: Uuid,
    pub config: DrawConfig,
    /// Ordered by [`Squad::number`].
    pub squads: Vec<Squad<'a>>,
}

impl<'a> Draw<'a> {
    /// Mean of every squad's rounded mean overall. This is the usual baseline
    /// squads get compared against. Zero without squads.
    pub fn average_of_means(&self) -> f64 {
        if self.squads.is_empty() {
            return 0.0;
        }
        let total: f64 = self.squads.iter().map(|s| f64::from(s.mean_overall)).sum();
        total / self.squads.len() as f64
    }

    /// Mean overall over every drawn player, ignoring squad boundaries.
    pub fn pool_average(&self) -> f64 {
        let everyone: Vec<&Player> = self.players().collect();
        exact_mean_overall(&everyone)
    }

    /// Every drawn player, squad by squad.
    pub fn players(&self) -> impl Iterator<Item = &'a Player> + '_ {
        self.squads.iter().flat_map(|s| s.members.iter().copied())
    }

    pub fn squad(&self, number: usize) -> Option<&Squad<'a>> {
        self.squads.iter().find(|s| s.number == number)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::core::Position;

    fn rated(overall: &[u8]) -> Vec<Player> {
        overall
            .iter()
            .enumerate()
            .map(|(i, o)| Player::new(i.to_string(), format!("P{i}"), Position::Midfielder, *o))
            .collect()
    }

    #[test]
    fn test_mean_overall_rounds_half_up() {
        assert_eq!(71, mean_overall(&rated(&[70, 71])));
        assert_eq!(70, mean_overall(&rated(&[70, 70, 71])));
        assert_eq!(71, mean_overall(&rated(&[70, 71, 71])));
        assert_eq!(100, mean_overall(&rated(&[100, 100])));
    }

    #[test]
    fn test_mean_overall_empty() {
        let none: Vec<Player> = vec![];
        assert_eq!(0, mean_overall(&none));
        assert_relative_eq!(0.0, exact_mean_overall(&none));
    }

    #[test]
    fn test_mean_accepts_borrowed_players() {
        let players = rated(&[60, 80]);
        let borrowed: Vec<&Player> = players.iter().collect();
        assert_eq!(70, mean_overall(&borrowed));
        assert_relative_eq!(70.0, exact_mean_overall(&borrowed));
    }

    #[test]
    fn test_draw_averages() {
        let players = rated(&[60, 70, 80, 91]);
        let id = Uuid::now_v7();
        let mut first = Squad::empty(id, 1);
        first.push(&players[0]);
        first.push(&players[1]);
        first.update_mean();
        let mut second = Squad::empty(id, 2);
        second.push(&players[2]);
        second.push(&players[3]);
        second.update_mean();

        assert_eq!(65, first.mean_overall);
        assert_eq!(86, second.mean_overall);

        let draw = Draw {
            id,
            config: DrawConfig::default(),
            squads: vec![first, second],
        };
        assert_relative_eq!(75.5, draw.average_of_means());
        assert_relative_eq!(75.25, draw.pool_average());
        assert_eq!("Squad 2", draw.squad(2).unwrap().name);
        assert!(draw.squad(3).is_none());
    }

    #[test]
    fn test_squad_naming() {
        let id = Uuid::now_v7();
        let squad = Squad::empty(id, 12);
        assert_eq!("Squad 12", squad.name);
        assert_eq!(format!("squad-{id}-12"), squad.id);
        assert!(squad.is_empty());
    }
}
