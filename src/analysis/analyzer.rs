use std::borrow::Borrow;

use tracing::{event, instrument};

use crate::core::{Player, Sector};
use crate::draw::{Draw, Randomness};

use super::defensive::DefensiveIndex;
use super::observations::synthesize;
use super::overall::{DEFAULT_REFERENCE_AVERAGE, OverallVerdict, compare};
use super::phrases::{PhraseBook, PhraseBookError};
use super::sector::{SectorCommentary, SectorRule, analyze_sector};
use super::stats::{SquadProfile, sector_members};

/// One comment per sector.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SectorAnalysis {
    pub defense: SectorCommentary,
    pub midfield: SectorCommentary,
    pub attack: SectorCommentary,
}

impl SectorAnalysis {
    pub fn get(&self, sector: Sector) -> &SectorCommentary {
        match sector {
            Sector::Defense => &self.defense,
            Sector::Midfield => &self.midfield,
            Sector::Attack => &self.attack,
        }
    }
}

/// Everything said about a single squad.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub defensive_index: DefensiveIndex,
    pub sectors: SectorAnalysis,
    /// At most two, highest priority first.
    pub observations: Vec<String>,
    pub overall: OverallVerdict,
    pub overall_message: String,
}

/// Produces an [`AnalysisResult`] per squad from a validated phrase book.
#[derive(Debug, Clone)]
pub struct TacticalAnalyzer {
    book: PhraseBook,
}

impl TacticalAnalyzer {
    /// Analyzer over [`PhraseBook::standard`].
    pub fn new() -> Result<Self, PhraseBookError> {
        Self::with_phrase_book(PhraseBook::standard())
    }

    /// Analyzer over a custom book. The book has to cover every attribute
    /// each sector looks at.
    pub fn with_phrase_book(book: PhraseBook) -> Result<Self, PhraseBookError> {
        book.validate()?;
        Ok(Self { book })
    }

    pub fn phrase_book(&self) -> &PhraseBook {
        &self.book
    }

    /// Analyze a squad against [`DEFAULT_REFERENCE_AVERAGE`].
    pub fn analyze_squad<P, R>(&self, players: &[P], rng: &mut R) -> AnalysisResult
    where
        P: Borrow<Player>,
        R: Randomness + ?Sized,
    {
        self.analyze_squad_with_reference(players, DEFAULT_REFERENCE_AVERAGE, rng)
    }

    /// Analyze a squad. Sectors are compared with the squad itself, only the
    /// overall verdict looks at `reference_average`.
    pub fn analyze_squad_with_reference<P, R>(
        &self,
        players: &[P],
        reference_average: f64,
        rng: &mut R,
    ) -> AnalysisResult
    where
        P: Borrow<Player>,
        R: Randomness + ?Sized,
    {
        let mut comment = |sector: Sector| {
            let members = sector_members(players, sector);
            analyze_sector(
                sector,
                &members,
                players,
                SectorRule::for_sector(sector).attributes,
                &self.book,
                &mut *rng,
            )
        };
        let sectors = SectorAnalysis {
            defense: comment(Sector::Defense),
            midfield: comment(Sector::Midfield),
            attack: comment(Sector::Attack),
        };

        let overall = compare(players, reference_average);
        AnalysisResult {
            defensive_index: DefensiveIndex::classify(players),
            sectors,
            observations: synthesize(&SquadProfile::new(players)),
            overall,
            overall_message: overall.message().to_string(),
        }
    }
}

/// Analyze every squad of `draw` against the mean of the squads' mean
/// ratings. Results come back in squad order, keyed by squad id.
#[instrument(level = "debug", skip_all, fields(draw_id = %draw.id))]
pub fn analyze_draw<R: Randomness + ?Sized>(
    analyzer: &TacticalAnalyzer,
    draw: &Draw<'_>,
    rng: &mut R,
) -> Vec<(String, AnalysisResult)> {
    let reference = draw.average_of_means();
    event!(
        tracing::Level::INFO,
        num_squads = draw.squads.len(),
        reference,
        "Analyzing draw"
    );
    draw.squads
        .iter()
        .map(|squad| {
            let result =
                analyzer.analyze_squad_with_reference(&squad.members, reference, &mut *rng);
            (squad.id.clone(), result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::analysis::{CommentarySource, DefensiveBand};
    use crate::core::{Attribute, Attributes, Position};
    use crate::draw::{DrawConfig, draw_squads};
    use crate::test_util::{AlwaysFirst, sample_pool};

    fn player(id: &str, position: Position, overall: u8, attributes: Attributes) -> Player {
        Player::new(id, id, position, overall).with_attributes(attributes)
    }

    #[test]
    fn test_standard_analyzer_builds() {
        assert!(TacticalAnalyzer::new().is_ok());
    }

    #[test]
    fn test_incomplete_book_is_rejected() {
        assert!(matches!(
            TacticalAnalyzer::with_phrase_book(PhraseBook::new()),
            Err(PhraseBookError::MissingPool { .. })
        ));
    }

    #[test_log::test]
    fn test_analyze_squad() {
        let analyzer = TacticalAnalyzer::new().unwrap();
        let players = vec![
            player("g", Position::Goalkeeper, 70, Attributes::uniform(70)),
            player("cb", Position::CenterBack, 75, Attributes::uniform(70)),
            player("fb", Position::FullBack, 75, Attributes::uniform(70)),
            player(
                "fw",
                Position::Forward,
                80,
                Attributes::uniform(70).with(Attribute::Shooting, 98),
            ),
        ];
        let result = analyzer.analyze_squad(&players, &mut AlwaysFirst);

        // 4 + 3 + 1 over three outfield players.
        assert_eq!(8, result.defensive_index.score);
        assert_eq!(DefensiveBand::Balanced, result.defensive_index.classification);

        assert_eq!(CommentarySource::Absent, result.sectors.midfield.source);
        // The forward shoots 98 against a squad average of 77.
        assert_eq!(CommentarySource::Phrase, result.sectors.attack.source);
        assert_eq!(
            Some(Attribute::Shooting),
            result.sectors.attack.insight.map(|i| i.attribute)
        );

        assert!(result.observations.len() <= 2);
        // 75 against the default 70.
        assert_eq!(OverallVerdict::Favored, result.overall);
        assert_eq!(OverallVerdict::Favored.message(), result.overall_message);
    }

    #[test]
    fn test_empty_squad() {
        let analyzer = TacticalAnalyzer::new().unwrap();
        let nobody: Vec<Player> = vec![];
        let result = analyzer.analyze_squad(&nobody, &mut AlwaysFirst);

        assert_eq!(0, result.defensive_index.score);
        for sector in Sector::ALL {
            assert_eq!(CommentarySource::Absent, result.sectors.get(sector).source);
        }
        // Averages 0 against the default 70.
        assert_eq!(OverallVerdict::Underdog, result.overall);
        assert_eq!(OverallVerdict::Underdog.message(), result.overall_message);
    }

    #[test_log::test]
    fn test_analyze_draw() {
        let players = sample_pool(18);
        let mut rng = StdRng::seed_from_u64(31);
        let draw = draw_squads(&players, &DrawConfig::squad_count(3), &mut rng).unwrap();
        let analyzer = TacticalAnalyzer::new().unwrap();

        let results = analyze_draw(&analyzer, &draw, &mut rng);
        assert_eq!(3, results.len());
        for ((id, result), squad) in results.iter().zip(&draw.squads) {
            assert_eq!(&squad.id, id);
            assert!(result.observations.len() <= 2);
            assert!(!result.overall_message.is_empty());
        }
    }
}
