use std::borrow::Borrow;

use tracing::{debug, warn};

use crate::core::{Attribute, Player, Sector};
use crate::draw::Randomness;

use super::phrases::{Direction, PhraseBook, PhraseKey};
use super::stats::attribute_average;

/// Smallest absolute deviation worth a sector specific comment.
pub const NOTABLE_DEVIATION: f64 = 10.0;
/// Deviations strictly above this always get the first phrase of their pool.
pub const EXTREME_DEVIATION: f64 = 20.0;

/// How one sector is commented on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorRule {
    pub sector: Sector,
    /// Attributes compared against the reference, in evaluation order.
    pub attributes: &'static [Attribute],
    /// Attribute the generic comment is based on.
    pub fallback_attribute: Attribute,
    pub low_below: f64,
    pub high_above: f64,
    pub low_text: &'static str,
    pub high_text: &'static str,
    pub neutral_text: &'static str,
    pub absent_text: &'static str,
}

const DEFENSE: SectorRule = SectorRule {
    sector: Sector::Defense,
    attributes: &[
        Attribute::Speed,
        Attribute::Marking,
        Attribute::Passing,
        Attribute::BallControl,
    ],
    fallback_attribute: Attribute::Speed,
    low_below: 55.0,
    high_above: 75.0,
    low_text: "Slow defense, play compact.",
    high_text: "Quick defense, it can press high.",
    neutral_text: "Balanced defense.",
    absent_text: "No defense at all, the squad is exposed.",
};

const MIDFIELD: SectorRule = SectorRule {
    sector: Sector::Midfield,
    attributes: &[
        Attribute::Passing,
        Attribute::Speed,
        Attribute::Marking,
        Attribute::Dribbling,
        Attribute::BallControl,
    ],
    fallback_attribute: Attribute::Passing,
    low_below: 60.0,
    high_above: 80.0,
    low_text: "Limited midfield, play direct.",
    high_text: "Technical midfield, make the most of possession.",
    neutral_text: "Balanced midfield.",
    absent_text: "No structured midfield.",
};

const ATTACK: SectorRule = SectorRule {
    sector: Sector::Attack,
    attributes: &[
        Attribute::Shooting,
        Attribute::Dribbling,
        Attribute::Speed,
        Attribute::BallControl,
    ],
    fallback_attribute: Attribute::Shooting,
    low_below: 60.0,
    high_above: 80.0,
    low_text: "Weak finishing, create a lot.",
    high_text: "Clinical attack, go for goal.",
    neutral_text: "Balanced attack.",
    absent_text: "No forwards, the shape has no reference up front.",
};

impl SectorRule {
    pub fn for_sector(sector: Sector) -> &'static SectorRule {
        match sector {
            Sector::Defense => &DEFENSE,
            Sector::Midfield => &MIDFIELD,
            Sector::Attack => &ATTACK,
        }
    }

    /// Generic comment for a sector whose fallback attribute averages `avg`.
    pub fn fallback_text(&self, avg: f64) -> &'static str {
        if avg < self.low_below {
            self.low_text
        } else if avg > self.high_above {
            self.high_text
        } else {
            self.neutral_text
        }
    }
}

/// The attribute a sector stands out on.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorInsight {
    pub attribute: Attribute,
    pub sector_average: f64,
    pub reference_average: f64,
    /// `sector_average - reference_average`
    pub deviation: f64,
    pub direction: Direction,
}

impl SectorInsight {
    pub fn is_notable(&self) -> bool {
        self.deviation.abs() >= NOTABLE_DEVIATION
    }

    pub fn is_extreme(&self) -> bool {
        self.deviation.abs() > EXTREME_DEVIATION
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentarySource {
    /// Nobody plays in the sector.
    Absent,
    /// Picked from the phrase book.
    Phrase,
    /// Generic comment from the sector rule.
    Fallback,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SectorCommentary {
    pub sector: Sector,
    pub text: String,
    pub source: CommentarySource,
    /// The most deviating attribute, when any attribute deviates at all.
    pub insight: Option<SectorInsight>,
}

/// Find the attribute with the largest absolute deviation. The first
/// attribute wins ties, and when nothing deviates there is no insight.
pub fn most_deviating<P, Q>(
    sector_players: &[P],
    reference_players: &[Q],
    attributes: &[Attribute],
) -> Option<SectorInsight>
where
    P: Borrow<Player>,
    Q: Borrow<Player>,
{
    let mut best: Option<SectorInsight> = None;
    for &attribute in attributes {
        let sector_average = attribute_average(sector_players, attribute);
        let reference_average = attribute_average(reference_players, attribute);
        let deviation = sector_average - reference_average;
        let best_abs = best.map_or(0.0, |b| b.deviation.abs());
        if deviation.abs() > best_abs {
            best = Some(SectorInsight {
                attribute,
                sector_average,
                reference_average,
                deviation,
                direction: Direction::of(deviation),
            });
        }
    }
    best
}

/// Comment on one sector of a squad.
///
/// `sector_players` are compared against `reference_players` on every
/// attribute in `attributes`. A deviation of at least
/// [`NOTABLE_DEVIATION`] selects a phrase from `book`; past
/// [`EXTREME_DEVIATION`] the first phrase of the pool is used, otherwise
/// one is picked at random. Anything else gets the sector's generic
/// comment.
pub fn analyze_sector<P, Q, R>(
    sector: Sector,
    sector_players: &[P],
    reference_players: &[Q],
    attributes: &[Attribute],
    book: &PhraseBook,
    rng: &mut R,
) -> SectorCommentary
where
    P: Borrow<Player>,
    Q: Borrow<Player>,
    R: Randomness + ?Sized,
{
    let rule = SectorRule::for_sector(sector);
    if sector_players.is_empty() {
        debug!(%sector, "Sector absent");
        return SectorCommentary {
            sector,
            text: rule.absent_text.to_string(),
            source: CommentarySource::Absent,
            insight: None,
        };
    }

    let insight = most_deviating(sector_players, reference_players, attributes);
    if let Some(found) = insight.filter(SectorInsight::is_notable) {
        let key = PhraseKey::new(sector, found.attribute, found.direction);
        match book.get(&key) {
            Some(pool) if !pool.is_empty() => {
                let idx = if found.is_extreme() {
                    0
                } else {
                    rng.pick_index(pool.len())
                };
                debug!(
                    %sector,
                    attribute = %found.attribute,
                    deviation = found.deviation,
                    idx,
                    "Sector insight"
                );
                return SectorCommentary {
                    sector,
                    text: pool[idx].clone(),
                    source: CommentarySource::Phrase,
                    insight,
                };
            }
            _ => {
                warn!(
                    %sector,
                    attribute = %found.attribute,
                    direction = ?found.direction,
                    "No phrases for sector insight, falling back"
                );
            }
        }
    }

    let avg = attribute_average(sector_players, rule.fallback_attribute);
    debug!(%sector, fallback_average = avg, "Sector fallback");
    SectorCommentary {
        sector,
        text: rule.fallback_text(avg).to_string(),
        source: CommentarySource::Fallback,
        insight,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::core::{Attributes, Position};
    use crate::test_util::{AlwaysFirst, AlwaysLast};

    fn defender(speed: u8) -> Player {
        Player::new("d", "D", Position::CenterBack, 60)
            .with_attributes(Attributes::uniform(60).with(Attribute::Speed, speed))
    }

    fn speed_pool(sector: Sector, direction: Direction) -> Vec<String> {
        PhraseBook::standard()
            .get(&PhraseKey::new(sector, Attribute::Speed, direction))
            .unwrap()
            .to_vec()
    }

    #[test]
    fn test_absent_sector() {
        let nobody: Vec<Player> = vec![];
        let commentary = analyze_sector(
            Sector::Attack,
            &nobody,
            &nobody,
            SectorRule::for_sector(Sector::Attack).attributes,
            &PhraseBook::standard(),
            &mut AlwaysFirst,
        );
        assert_eq!(CommentarySource::Absent, commentary.source);
        assert_eq!(ATTACK.absent_text, commentary.text);
        assert!(commentary.insight.is_none());
    }

    #[test]
    fn test_deviation_of_ten_uses_phrases() {
        let sector = vec![defender(70)];
        let reference = vec![defender(60)];
        let commentary = analyze_sector(
            Sector::Defense,
            &sector,
            &reference,
            &[Attribute::Speed],
            &PhraseBook::standard(),
            &mut AlwaysLast,
        );
        let insight = commentary.insight.unwrap();
        assert_relative_eq!(10.0, insight.deviation);
        assert_eq!(CommentarySource::Phrase, commentary.source);
        let pool = speed_pool(Sector::Defense, Direction::High);
        assert_eq!(pool.last().unwrap(), &commentary.text);
    }

    #[test]
    fn test_deviation_just_under_ten_falls_back() {
        let sector = vec![defender(70)];
        let mut reference: Vec<Player> = (0..99).map(|_| defender(60)).collect();
        reference.push(defender(61));
        let commentary = analyze_sector(
            Sector::Defense,
            &sector,
            &reference,
            &[Attribute::Speed],
            &PhraseBook::standard(),
            &mut AlwaysLast,
        );
        let insight = commentary.insight.unwrap();
        assert!(insight.deviation < 10.0 && insight.deviation > 9.98);
        assert_eq!(CommentarySource::Fallback, commentary.source);
        // Speed 70 sits between the defense thresholds.
        assert_eq!(DEFENSE.neutral_text, commentary.text);
    }

    #[test]
    fn test_deviation_of_twenty_is_still_random() {
        let sector = vec![defender(40)];
        let reference = vec![defender(60)];
        let commentary = analyze_sector(
            Sector::Defense,
            &sector,
            &reference,
            &[Attribute::Speed],
            &PhraseBook::standard(),
            &mut AlwaysLast,
        );
        assert!(!commentary.insight.unwrap().is_extreme());
        let pool = speed_pool(Sector::Defense, Direction::Low);
        assert_eq!(pool.last().unwrap(), &commentary.text);
    }

    #[test]
    fn test_extreme_deviation_takes_first_phrase() {
        let sector = vec![defender(39)];
        let reference = vec![defender(60)];
        let commentary = analyze_sector(
            Sector::Defense,
            &sector,
            &reference,
            &[Attribute::Speed],
            &PhraseBook::standard(),
            &mut AlwaysLast,
        );
        assert!(commentary.insight.unwrap().is_extreme());
        let pool = speed_pool(Sector::Defense, Direction::Low);
        assert_eq!(pool[0], commentary.text);
    }

    #[test]
    fn test_first_attribute_wins_ties() {
        let sector = vec![Player::new("m", "M", Position::Midfielder, 60).with_attributes(
            Attributes::uniform(60)
                .with(Attribute::Passing, 75)
                .with(Attribute::Speed, 45),
        )];
        let reference = vec![Player::new("r", "R", Position::Forward, 60)
            .with_attributes(Attributes::uniform(60))];
        let insight = most_deviating(&sector, &reference, MIDFIELD.attributes).unwrap();
        assert_eq!(Attribute::Passing, insight.attribute);
        assert_eq!(Direction::High, insight.direction);
    }

    #[test]
    fn test_no_deviation_no_insight() {
        let players = vec![defender(60)];
        assert!(most_deviating(&players, &players, DEFENSE.attributes).is_none());
    }

    #[test_log::test]
    fn test_missing_pool_falls_back() {
        // The standard book has nothing for shooting in defense.
        let sector = vec![Player::new("d", "D", Position::FullBack, 60)
            .with_attributes(Attributes::uniform(50).with(Attribute::Shooting, 90))];
        let reference = vec![Player::new("r", "R", Position::Forward, 60)
            .with_attributes(Attributes::uniform(50))];
        let commentary = analyze_sector(
            Sector::Defense,
            &sector,
            &reference,
            &[Attribute::Shooting],
            &PhraseBook::standard(),
            &mut AlwaysFirst,
        );
        assert_eq!(CommentarySource::Fallback, commentary.source);
        assert_eq!(Attribute::Shooting, commentary.insight.unwrap().attribute);
        // Defense speed of 50 is under the slow threshold.
        assert_eq!(DEFENSE.low_text, commentary.text);
    }

    #[test]
    fn test_fallback_thresholds() {
        assert_eq!(DEFENSE.low_text, DEFENSE.fallback_text(54.9));
        assert_eq!(DEFENSE.neutral_text, DEFENSE.fallback_text(55.0));
        assert_eq!(DEFENSE.neutral_text, DEFENSE.fallback_text(75.0));
        assert_eq!(DEFENSE.high_text, DEFENSE.fallback_text(75.1));
        assert_eq!(MIDFIELD.high_text, MIDFIELD.fallback_text(81.0));
        assert_eq!(MIDFIELD.low_text, MIDFIELD.fallback_text(59.0));
        assert_eq!(ATTACK.high_text, ATTACK.fallback_text(80.5));
        assert_eq!(ATTACK.neutral_text, ATTACK.fallback_text(70.0));
    }
}
