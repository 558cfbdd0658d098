//! Session state: one object owns the grid, ship, drone pool, and tallies
//!
//! External collaborators never hold mutable access; they feed a
//! `TickInput` into the tick and read state back through the accessor
//! methods between ticks.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::drone::Drone;
use super::grid::{Cell, CellKind, WorldGrid};
use super::ship::Ship;
use crate::consts::*;

/// Session creation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub rows: usize,
    pub cols: usize,
    /// Run seed for reproducibility
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: 0,
        }
    }
}

/// Complete simulation state for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub(crate) grid: WorldGrid,
    pub(crate) ship: Ship,
    pub(crate) drones: Vec<Drone>,
    pub(crate) resources: u32,
    pub(crate) score: i64,
    pub(crate) tick_count: u64,
    pub(crate) running: bool,
    pub(crate) paused: bool,
    pub(crate) game_over: bool,
    pub(crate) seed: u64,
    #[serde(skip, default = "deserialized_rng")]
    pub(crate) rng: Pcg32,
}

/// RNG stand-in for deserialized sessions; determinism is only guaranteed
/// for sessions created through `Session::new`.
fn deserialized_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl Session {
    /// Fresh randomized session: scattered asteroid field, a clear channel
    /// carved under the ship's spawn footprint, and a pack of starting
    /// drones near the right edge.
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(config.seed);

        let mut grid = WorldGrid::new(config.rows, config.cols);
        grid.scatter_asteroids(&mut rng);

        let spawn_row = config.rows / 2;
        let spawn_col = SHIP_SPAWN_COL.min(config.cols.saturating_sub(1));
        let ship = Ship::new(spawn_row, spawn_col);

        for block in ship.blocks() {
            let row = ship.core_row + block.row_offset;
            let col = ship.core_col + block.col_offset;
            if let Some(cell) = grid.cell_mut(row, col) {
                cell.clear();
            }
        }

        let mut drones = Vec::new();
        let row_span = config.rows.saturating_sub(10).max(1) as i32;
        for _ in 0..INITIAL_DRONES {
            let col = config.cols as f32 - 8.0 - rng.random_range(0..10) as f32;
            let row = (5 + rng.random_range(0..row_span)) as f32;
            let hp = 40 + rng.random_range(0..60);
            drones.push(Drone::new(
                Vec2::new(col * CELL_SIZE, row * CELL_SIZE),
                hp,
            ));
        }

        log::info!(
            "session start: {}x{} grid, seed {}, {} drones",
            config.rows,
            config.cols,
            config.seed,
            drones.len()
        );

        Self {
            grid,
            ship,
            drones,
            resources: START_RESOURCES,
            score: 0,
            tick_count: 0,
            running: true,
            paused: false,
            game_over: false,
            seed: config.seed,
            rng,
        }
    }

    /// Re-initialize in place with a fresh randomized world
    pub fn reset(&mut self, config: SessionConfig) {
        *self = Session::new(config);
    }

    // --- Read-only views for renderers/observers (between ticks only) ---

    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    pub fn cell(&self, row: i32, col: i32) -> Option<&Cell> {
        self.grid.cell(row, col)
    }

    pub fn drones(&self) -> &[Drone] {
        &self.drones
    }

    /// Ship pose for display; block geometry stays internal
    pub fn ship_position(&self) -> Vec2 {
        self.ship.pos
    }

    pub fn ship_orientation(&self) -> f32 {
        self.ship.orientation
    }

    pub fn resources(&self) -> u32 {
        self.resources
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    // --- Session control ---

    pub fn request_quit(&mut self) {
        self.running = false;
    }

    /// Stop the session; the clock refuses to advance a stopped session
    pub fn shutdown(&mut self) {
        self.running = false;
    }

    // --- Build-palette hooks for an external collaborator ---

    /// Place a block into the world. No resource cost is modeled here;
    /// spending lives in the (excluded) build UI.
    pub fn place_block(&mut self, row: i32, col: i32, kind: CellKind) -> bool {
        self.grid.place(row, col, kind)
    }

    /// Salvage a world cell, crediting its resource reward
    pub fn remove_block(&mut self, row: i32, col: i32) -> bool {
        match self.grid.remove(row, col) {
            Some(reward) => {
                self.resources += reward;
                true
            }
            None => false,
        }
    }
}
