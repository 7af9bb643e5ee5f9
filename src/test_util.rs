use std::collections::HashMap;

use approx::assert_abs_diff_eq;

use crate::core::{Attributes, Player, Position};
use crate::draw::{DrawConfig, Randomness, Squad, exact_mean_overall, mean_overall};

/// Always picks index 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFirst;

impl Randomness for AlwaysFirst {
    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }
}

/// Always picks the last index, which makes every shuffle the identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysLast;

impl Randomness for AlwaysLast {
    fn pick_index(&mut self, len: usize) -> usize {
        len - 1
    }
}

/// Replays a fixed list of picks, wrapping each into range and cycling once
/// exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedPicks {
    picks: Vec<usize>,
    next: usize,
}

impl ScriptedPicks {
    pub fn new(picks: Vec<usize>) -> Self {
        assert!(!picks.is_empty(), "ScriptedPicks needs at least one pick");
        Self { picks, next: 0 }
    }
}

impl Randomness for ScriptedPicks {
    fn pick_index(&mut self, len: usize) -> usize {
        let pick = self.picks[self.next % self.picks.len()];
        self.next += 1;
        pick % len
    }
}

/// A deterministic pool of `n` players cycling through every position with
/// varied ratings.
pub fn sample_pool(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| {
            let position = Position::ALL[i % Position::ALL.len()];
            let base = 45 + ((i * 17) % 50) as u8;
            let attributes = Attributes {
                shooting: base,
                passing: 100 - base,
                speed: 40 + ((i * 7) % 60) as u8,
                marking: 30 + ((i * 11) % 70) as u8,
                ball_control: base / 2 + 30,
                dribbling: 90 - ((i * 5) % 50) as u8,
            };
            Player::new(format!("p{i}"), format!("Player {i}"), position, base)
                .with_attributes(attributes)
        })
        .collect()
}

/// Check every invariant a draw of `pool` under `config` has to hold.
pub fn assert_valid_draw(pool: &[Player], squads: &[Squad<'_>], config: &DrawConfig) {
    if pool.is_empty() {
        assert!(squads.is_empty(), "An empty pool should give no squads");
        return;
    }

    let expected = config
        .squad_count_for(pool.len())
        .expect("Config should be valid");
    assert_eq!(expected, squads.len());
    assert!(squads.len() >= crate::draw::MIN_SQUADS);

    // Multiset of ids in must match multiset of ids out.
    let mut wanted: HashMap<&str, usize> = HashMap::new();
    for player in pool {
        *wanted.entry(player.id.as_str()).or_default() += 1;
    }
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for squad in squads {
        for player in &squad.members {
            *seen.entry(player.id.as_str()).or_default() += 1;
        }
    }
    assert_eq!(wanted, seen, "Players were lost or duplicated");

    for (idx, squad) in squads.iter().enumerate() {
        assert_eq!(idx + 1, squad.number, "Squads should be in number order");
        assert_eq!(format!("Squad {}", squad.number), squad.name);
        assert_eq!(mean_overall(&squad.members), squad.mean_overall);
        if squad.is_empty() {
            assert_eq!(0, squad.mean_overall);
        } else {
            let exact = exact_mean_overall(&squad.members);
            assert_abs_diff_eq!(exact, f64::from(squad.mean_overall), epsilon = 0.5);
        }

        // Members are listed in the order position groups were dealt.
        assert!(
            squad
                .members
                .windows(2)
                .all(|w| w[0].position <= w[1].position),
            "Members of {} are not in position order",
            squad.name
        );
    }

    let sizes: Vec<usize> = squads.iter().map(Squad::len).collect();
    let max = sizes.iter().copied().max().unwrap_or(0);
    let min = sizes.iter().copied().min().unwrap_or(0);
    assert!(max - min <= 2, "Squad sizes too uneven: {sizes:?}");
}
