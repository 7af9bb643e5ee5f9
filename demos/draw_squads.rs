extern crate squad_draw;

mod common;

use std::path::PathBuf;

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use squad_draw::analysis::{PhraseBookError, TacticalAnalyzer, analyze_draw};
use squad_draw::core::{Player, Roster, RosterError};
use squad_draw::draw::{DrawConfig, DrawError, DrawMode, draw_squads};
use squad_draw::report::{share_listing, to_markdown};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(
    name = "draw_squads",
    about = "Draw balanced pickup squads from a roster",
    long_about = "Loads a roster of rated players, draws squads with a position aware\n\
                  snake draft and prints a report with a tactical read on every squad."
)]
struct Args {
    #[command(flatten)]
    log: common::LogArgs,

    /// Roster JSON file (an array of players)
    roster: PathBuf,

    /// Draw configuration JSON file, overrides --mode and --value
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// How --value is interpreted
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = Mode::Squads)]
    mode: Mode,

    /// Number of squads or players per squad
    #[arg(short = 'n', long = "value", default_value_t = 2)]
    value: i64,

    /// Player ids taking part, defaults to the whole roster
    #[arg(short = 'p', long = "player")]
    players: Vec<String>,

    /// Always include players flagged as recurring
    #[arg(long = "with-recurring")]
    with_recurring: bool,

    /// Print the short listing instead of the full report
    #[arg(long = "share")]
    share: bool,

    /// Skip the tactical analysis
    #[arg(long = "no-analysis")]
    no_analysis: bool,

    /// Optional random seed for reproducibility
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum Mode {
    Squads,
    PlayersPerSquad,
}

impl From<Mode> for DrawMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Squads => DrawMode::SquadCount,
            Mode::PlayersPerSquad => DrawMode::PlayersPerSquad,
        }
    }
}

#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Draw(#[from] DrawError),

    #[error(transparent)]
    PhraseBook(#[from] PhraseBookError),

    #[error("At least 2 players are needed, got {0}")]
    NotEnoughPlayers(usize),
}

fn selected_players(roster: &Roster, args: &Args) -> Result<Vec<Player>, RosterError> {
    match (args.players.is_empty(), args.with_recurring) {
        (true, false) => Ok(roster.players().to_vec()),
        (true, true) => {
            let ids: Vec<&str> = roster.recurring().map(|p| p.id.as_str()).collect();
            roster.select(ids.as_slice())
        }
        (false, false) => roster.select(args.players.as_slice()),
        (false, true) => roster.select_with_recurring(args.players.as_slice()),
    }
}

fn main() -> Result<(), DemoError> {
    let args = Args::parse();
    args.log.init();

    let roster = Roster::from_file(&args.roster)?;
    let players = selected_players(&roster, &args)?;
    if players.len() < 2 {
        return Err(DemoError::NotEnoughPlayers(players.len()));
    }

    let config = match &args.config {
        Some(path) => DrawConfig::from_file(path)?,
        None => DrawConfig::new(args.mode.into(), args.value),
    };
    let plan = config.preview(players.len())?;
    eprintln!(
        "Drawing {} squads of about {} players from {} selected",
        plan.squads,
        plan.approx_players_per_squad,
        players.len()
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let draw = draw_squads(&players, &config, &mut rng)?;

    if args.share {
        println!("{}", share_listing(&draw));
        return Ok(());
    }

    let results = if args.no_analysis {
        None
    } else {
        let analyzer = TacticalAnalyzer::new()?;
        Some(analyze_draw(&analyzer, &draw, &mut rng))
    };
    println!("{}", to_markdown(&draw, results.as_deref()));
    Ok(())
}
