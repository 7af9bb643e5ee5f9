use tracing::{event, instrument, trace};
use uuid::Uuid;

use crate::core::Player;

use super::config::DrawConfig;
use super::errors::DrawError;
use super::pools::PositionPools;
use super::shuffle::{Randomness, shuffled};
use super::squad::{Draw, Squad};

/// Cursor over squad slots that bounces between the first and the last
/// squad. On reaching either end it stays there for one more pick before
/// turning around, so the end squads get two consecutive players.
#[derive(Debug, Clone, Copy)]
struct SnakeCursor {
    idx: usize,
    forward: bool,
    len: usize,
}

impl SnakeCursor {
    fn new(len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            idx: 0,
            forward: true,
            len,
        }
    }

    fn current(&self) -> usize {
        self.idx
    }

    fn advance(&mut self) {
        if self.forward {
            if self.idx + 1 >= self.len {
                self.idx = self.len - 1;
                self.forward = false;
            } else {
                self.idx += 1;
            }
        } else if self.idx == 0 {
            self.forward = true;
        } else {
            self.idx -= 1;
        }
    }
}

/// Split `players` into squads.
///
/// 1. The whole pool is shuffled once, on a copy.
/// 2. The shuffled pool is split into position buckets.
/// 3. Every bucket is shuffled again on its own. Ratings never influence who
///    goes where.
/// 4. Buckets are walked goalkeepers first, forwards last, and players are
///    dealt with a single snake cursor that carries its position and
///    direction across bucket boundaries.
///
/// An empty pool gives a draw without squads whatever the configuration.
#[instrument(level = "debug", skip(players, rng), fields(num_players = players.len()))]
pub fn draw_squads<'a, R: Randomness + ?Sized>(
    players: &'a [Player],
    config: &DrawConfig,
    rng: &mut R,
) -> Result<Draw<'a>, DrawError> {
    let id = Uuid::now_v7();
    if players.is_empty() {
        return Ok(Draw {
            id,
            config: *config,
            squads: Vec::new(),
        });
    }
    let num_squads = config.squad_count_for(players.len())?;

    event!(
        tracing::Level::INFO,
        %id,
        num_players = players.len(),
        num_squads,
        mode = ?config.mode,
        "Starting squad draw"
    );

    let everyone: Vec<&'a Player> = players.iter().collect();
    let everyone = shuffled(&everyone, rng);

    let mut pools = PositionPools::build(everyone);
    pools.shuffle_each(rng);

    let mut squads: Vec<Squad<'a>> = (1..=num_squads).map(|n| Squad::empty(id, n)).collect();
    let mut cursor = SnakeCursor::new(num_squads);
    for player in pools.iter() {
        let slot = cursor.current();
        trace!(player_id = %player.id, position = ?player.position, slot, "Assigning player");
        squads[slot].push(player);
        cursor.advance();
    }

    for squad in squads.iter_mut() {
        squad.update_mean();
        event!(
            tracing::Level::DEBUG,
            squad = %squad.name,
            size = squad.len(),
            mean_overall = squad.mean_overall,
            "Squad drawn"
        );
    }
    squads.sort_by_key(|s| s.number);

    Ok(Draw {
        id,
        config: *config,
        squads,
    })
}

/// Same as [`draw_squads`] but returns only the squads.
pub fn partition_squads<'a, R: Randomness + ?Sized>(
    players: &'a [Player],
    config: &DrawConfig,
    rng: &mut R,
) -> Result<Vec<Squad<'a>>, DrawError> {
    draw_squads(players, config, rng).map(|draw| draw.squads)
}
