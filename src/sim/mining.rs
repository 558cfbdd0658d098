//! Mining resolver: miner blocks erode the armor cell they sit over
//!
//! Damage per tick is `1 + uniform(0..3)`; a destroyed cell converts into
//! resources and score for the session to credit.

use rand::Rng;
use rand_pcg::Pcg32;

use super::grid::{CellKind, WorldGrid};
use super::ship::{BlockRole, Ship};
use crate::consts::*;
use crate::world_to_grid;

/// Resources and score gained by one resolver pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MiningYield {
    pub resources: u32,
    pub score: i64,
}

/// Run every miner block against the cell under it
pub fn resolve(grid: &mut WorldGrid, ship: &Ship, rng: &mut Pcg32) -> MiningYield {
    let mut gained = MiningYield::default();
    for block in ship.blocks() {
        if block.role != BlockRole::Miner {
            continue;
        }
        let world = ship.block_world_pos(block);
        let (row, col) = world_to_grid(world);
        if grid
            .cell(row, col)
            .is_some_and(|c| c.kind == CellKind::Armor)
        {
            let damage = 1 + rng.random_range(0..3);
            if grid.damage(row, col, damage) {
                gained.resources += MINE_RESOURCE_REWARD;
                gained.score += MINE_SCORE_REWARD;
            }
        }
    }
    gained
}
