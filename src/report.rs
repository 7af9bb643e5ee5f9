//! Rendering a draw for people.
//!
//! [`to_markdown`] gives a full report with ratings and, when supplied, the
//! analysis of every squad. [`share_listing`] is the short plain text
//! version meant to be pasted into a group chat.
use std::cmp::Reverse;

use crate::analysis::AnalysisResult;
use crate::core::{Player, Position};
use crate::draw::{Draw, Squad};

// Listing order, which is not the order positions are dealt in.
const LISTING_ORDER: [Position; 6] = [
    Position::Goalkeeper,
    Position::CenterBack,
    Position::DefensiveMidfielder,
    Position::FullBack,
    Position::Midfielder,
    Position::Forward,
];

fn listing_rank(position: Position) -> usize {
    LISTING_ORDER
        .iter()
        .position(|&p| p == position)
        .unwrap_or(LISTING_ORDER.len())
}

/// Members of `squad` by listing position, strongest first within a
/// position.
pub fn listing_order<'a>(squad: &Squad<'a>) -> Vec<&'a Player> {
    let mut members = squad.members.clone();
    members.sort_by_key(|p| (listing_rank(p.position), Reverse(p.overall)));
    members
}

/// Plain text listing of every squad:
///
/// ```text
/// Squad 1:
/// 1 - Gil
/// 2 - Lia
///
/// Squad 2:
/// 1 - Rui
/// ```
pub fn share_listing(draw: &Draw<'_>) -> String {
    let mut output = String::new();
    for squad in &draw.squads {
        output.push_str(&format!("{}:\n", squad.name));
        for (idx, player) in listing_order(squad).iter().enumerate() {
            output.push_str(&format!("{} - {}\n", idx + 1, player.name));
        }
        output.push('\n');
    }
    output.trim_end().to_string()
}

/// Markdown report of a draw. `analysis` pairs squad ids with their
/// analysis, as returned by [`crate::analysis::analyze_draw`]; squads
/// without a matching entry are rendered without one.
pub fn to_markdown(draw: &Draw<'_>, analysis: Option<&[(String, AnalysisResult)]>) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!("{}\n", "=".repeat(80)));
    output.push_str("# Squad Draw\n");
    output.push_str(&format!("{}\n\n", "=".repeat(80)));

    // Configuration
    output.push_str("## Configuration\n\n");
    output.push_str(&format!("- **Draw**: {}\n", draw.id));
    output.push_str(&format!("- **Mode**: {:?}\n", draw.config.mode));
    output.push_str(&format!("- **Value**: {}\n", draw.config.value));
    output.push_str(&format!("- **Squads**: {}\n", draw.squads.len()));
    output.push_str(&format!("- **Players**: {}\n", draw.players().count()));
    output.push_str(&format!(
        "- **Average Rating**: {:.1}\n",
        draw.average_of_means()
    ));
    output.push('\n');

    output.push_str("## Squads\n\n");
    for squad in &draw.squads {
        output.push_str(&format!(
            "### {} (rating {})\n\n",
            squad.name, squad.mean_overall
        ));

        if squad.is_empty() {
            output.push_str("_No players._\n\n");
        } else {
            output.push_str("| # | Player | Position | Overall |\n");
            output.push_str("|---|--------|----------|---------|\n");
            for (idx, player) in listing_order(squad).iter().enumerate() {
                output.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    idx + 1,
                    player.name,
                    player.position.short_code(),
                    player.overall
                ));
            }
            output.push('\n');
        }

        let result = analysis.and_then(|results| {
            results
                .iter()
                .find(|(id, _)| id == &squad.id)
                .map(|(_, result)| result)
        });
        if let Some(result) = result {
            push_analysis(&mut output, result);
        }
    }

    output
}

fn push_analysis(output: &mut String, result: &AnalysisResult) {
    output.push_str("#### Analysis\n\n");
    output.push_str(&format!(
        "- **Defensive Index**: {} ({:.2}), {}\n",
        result.defensive_index.classification,
        result.defensive_index.average,
        result.defensive_index.description
    ));
    output.push_str(&format!(
        "- **Defense**: {}\n",
        result.sectors.defense.text
    ));
    output.push_str(&format!(
        "- **Midfield**: {}\n",
        result.sectors.midfield.text
    ));
    output.push_str(&format!("- **Attack**: {}\n", result.sectors.attack.text));
    for observation in &result.observations {
        output.push_str(&format!("- **Observation**: {}\n", observation));
    }
    output.push_str(&format!("- **Overall**: {}\n", result.overall_message));
    output.push('\n');
}
