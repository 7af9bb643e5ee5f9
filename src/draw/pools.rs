use crate::core::{Player, Position};

use super::shuffle::{Randomness, shuffle_in_place};

/// Players split into one bucket per position, in [`Position::ALL`] order.
///
/// Inside each bucket players keep the relative order they were handed in
/// with, so a shuffle done before building the pools carries through.
#[derive(Debug, Clone, Default)]
pub struct PositionPools<'a> {
    buckets: [Vec<&'a Player>; 6],
}

impl<'a> PositionPools<'a> {
    pub fn build<I>(players: I) -> Self
    where
        I: IntoIterator<Item = &'a Player>,
    {
        let mut pools = Self::default();
        for player in players {
            pools.buckets[player.position.index()].push(player);
        }
        pools
    }

    pub fn bucket(&self, position: Position) -> &[&'a Player] {
        &self.buckets[position.index()]
    }

    /// Shuffle every bucket independently.
    pub fn shuffle_each<R: Randomness + ?Sized>(&mut self, rng: &mut R) {
        for bucket in self.buckets.iter_mut() {
            shuffle_in_place(bucket, rng);
        }
    }

    /// Every player, bucket by bucket in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Player> + '_ {
        self.buckets.iter().flat_map(|bucket| bucket.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::AlwaysFirst;

    fn p(id: &str, position: Position) -> Player {
        Player::new(id, id, position, 50)
    }

    #[test]
    fn test_buckets_keep_input_order() {
        let players = vec![
            p("f1", Position::Forward),
            p("g1", Position::Goalkeeper),
            p("f2", Position::Forward),
            p("cb1", Position::CenterBack),
            p("f3", Position::Forward),
        ];
        let pools = PositionPools::build(&players);

        let forwards: Vec<&str> = pools
            .bucket(Position::Forward)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(vec!["f1", "f2", "f3"], forwards);
        assert!(pools.bucket(Position::Midfielder).is_empty());
        assert_eq!(5, pools.len());
    }

    #[test]
    fn test_iter_follows_position_order() {
        let players = vec![
            p("f1", Position::Forward),
            p("m1", Position::Midfielder),
            p("g1", Position::Goalkeeper),
            p("fb1", Position::FullBack),
            p("dm1", Position::DefensiveMidfielder),
            p("cb1", Position::CenterBack),
        ];
        let pools = PositionPools::build(&players);
        let order: Vec<&str> = pools.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(vec!["g1", "cb1", "fb1", "dm1", "m1", "f1"], order);
    }

    #[test]
    fn test_shuffle_each_stays_within_bucket() {
        let players = vec![
            p("cb1", Position::CenterBack),
            p("cb2", Position::CenterBack),
            p("cb3", Position::CenterBack),
            p("f1", Position::Forward),
            p("f2", Position::Forward),
        ];
        let mut pools = PositionPools::build(&players);
        pools.shuffle_each(&mut AlwaysFirst);

        let backs: Vec<&str> = pools
            .bucket(Position::CenterBack)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(vec!["cb2", "cb3", "cb1"], backs);
        let forwards: Vec<&str> = pools
            .bucket(Position::Forward)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(vec!["f2", "f1"], forwards);
    }

    #[test]
    fn test_empty_pool() {
        let pools = PositionPools::build(std::iter::empty());
        assert!(pools.is_empty());
        assert_eq!(0, pools.iter().count());
    }
}
