use std::cmp::Reverse;

use super::stats::SquadProfile;

/// Most observations reported for a squad.
pub const MAX_OBSERVATIONS: usize = 2;

/// A squad wide remark with the priority it is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub priority: u8,
    pub text: &'static str,
}

struct ObservationRule {
    priority: u8,
    text: &'static str,
    applies: fn(&SquadProfile) -> bool,
}

// Evaluation order matters, equal priorities keep it.
const RULES: &[ObservationRule] = &[
    ObservationRule {
        priority: 10,
        text: "Technical but slow: the ball runs, the players don't.",
        applies: |p| p.passing > 80.0 && p.speed < 60.0,
    },
    ObservationRule {
        priority: 10,
        text: "Brutal pace, the counterattack is everything.",
        applies: |p| p.speed > 85.0,
    },
    ObservationRule {
        priority: 9,
        text: "Lots of dribbling, few goals: the squad keeps the ball but doesn't finish.",
        applies: |p| p.dribbling > 80.0 && p.shooting < 65.0,
    },
    ObservationRule {
        priority: 10,
        text: "Feeble marking, nobody in the squad puts a foot in.",
        applies: |p| p.marking < 55.0,
    },
    ObservationRule {
        priority: 9,
        text: "A complete attacking arsenal, shoot at every chance!",
        applies: |p| p.shooting > 85.0,
    },
    ObservationRule {
        priority: 7,
        text: "Excellent ball control, the squad is secure in possession.",
        applies: |p| p.ball_control > 80.0,
    },
    ObservationRule {
        priority: 10,
        text: "No technique, bet on grit and marking.",
        applies: |p| p.passing < 55.0 && p.dribbling < 55.0,
    },
    ObservationRule {
        priority: 8,
        text: "Attack much quicker than defense, play on the counter.",
        applies: |p| p.speed_gap().is_some_and(|gap| gap > 20.0),
    },
    ObservationRule {
        priority: 7,
        text: "Defense quicker than attack, a tactical paradox.",
        applies: |p| p.speed_gap().is_some_and(|gap| gap < -20.0),
    },
    ObservationRule {
        priority: 8,
        text: "Ultra attacking shape, goals will rain (at both ends).",
        applies: |p| p.num_forwards >= 3,
    },
    ObservationRule {
        priority: 7,
        text: "A defensive wall, the squad is hard to get through.",
        applies: |p| p.num_defenders >= 4,
    },
];

/// Every rule that applies to `profile`, highest priority first. Rules of
/// equal priority stay in evaluation order.
pub fn matching_observations(profile: &SquadProfile) -> Vec<Observation> {
    let mut matched: Vec<Observation> = RULES
        .iter()
        .filter(|rule| (rule.applies)(profile))
        .map(|rule| Observation {
            priority: rule.priority,
            text: rule.text,
        })
        .collect();
    matched.sort_by_key(|o| Reverse(o.priority));
    matched
}

/// The top [`MAX_OBSERVATIONS`] remarks for a squad.
pub fn synthesize(profile: &SquadProfile) -> Vec<String> {
    matching_observations(profile)
        .into_iter()
        .take(MAX_OBSERVATIONS)
        .map(|o| o.text.to_string())
        .collect()
}
