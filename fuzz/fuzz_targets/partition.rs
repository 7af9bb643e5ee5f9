#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate rand;
extern crate squad_draw;

use rand::{SeedableRng, rngs::StdRng};

use squad_draw::analysis::{TacticalAnalyzer, analyze_draw};
use squad_draw::core::Player;
use squad_draw::draw::{DrawConfig, draw_squads};
use squad_draw::test_util::assert_valid_draw;

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub players: Vec<Player>,
    pub config: DrawConfig,
    pub seed: u64,
}

fuzz_target!(|input: Input| {
    if input.players.len() > 200 {
        return;
    }
    let mut rng = StdRng::seed_from_u64(input.seed);

    match draw_squads(&input.players, &input.config, &mut rng) {
        Ok(draw) => {
            assert_valid_draw(&input.players, &draw.squads, &input.config);

            let analyzer = TacticalAnalyzer::new().unwrap();
            let results = analyze_draw(&analyzer, &draw, &mut rng);
            assert_eq!(draw.squads.len(), results.len());
            for (_, result) in results {
                assert!(result.observations.len() <= 2);
            }
        }
        Err(_) => assert!(input.config.validate().is_err()),
    }
});
