//! Destructible world grid
//!
//! A `rows x cols` field of cells, sized at session creation. All spatial
//! queries address cells by `(row, col)`; world coordinates convert via
//! `CELL_SIZE`. Mutations that would leave the grid (or hit the wrong cell
//! state) are invariant-guarding no-ops, never panics.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// What occupies a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellKind {
    #[default]
    Empty,
    Armor,
    Thruster,
    Core,
    Miner,
}

impl CellKind {
    /// Hit points a freshly placed block of this kind starts with
    pub fn place_hp(self) -> i32 {
        match self {
            CellKind::Armor => 60,
            CellKind::Thruster => 30,
            _ => 20,
        }
    }

    /// Resources credited when a block of this kind is salvaged
    pub fn salvage_reward(self) -> u32 {
        match self {
            CellKind::Armor => 8,
            CellKind::Thruster => 12,
            CellKind::Miner => 10,
            _ => 4,
        }
    }
}

/// One addressable grid location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub hp: i32,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.kind == CellKind::Empty
    }

    pub(crate) fn clear(&mut self) {
        self.kind = CellKind::Empty;
        self.hp = 0;
    }
}

/// Dynamically sized 2D cell container, owned exclusively by the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl WorldGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    /// Read-only cell access; `None` outside the grid
    pub fn cell(&self, row: i32, col: i32) -> Option<&Cell> {
        if self.in_bounds(row, col) {
            Some(&self.cells[row as usize * self.cols + col as usize])
        } else {
            None
        }
    }

    pub(crate) fn cell_mut(&mut self, row: i32, col: i32) -> Option<&mut Cell> {
        if self.in_bounds(row, col) {
            Some(&mut self.cells[row as usize * self.cols + col as usize])
        } else {
            None
        }
    }

    /// Iterate all cells with their coordinates (renderer-facing view)
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (i / self.cols, i % self.cols, cell))
    }

    /// Place a block on an empty in-bounds cell. Fails as a no-op when out
    /// of bounds, when the target is occupied, or when asked to place Empty.
    pub fn place(&mut self, row: i32, col: i32, kind: CellKind) -> bool {
        if kind == CellKind::Empty {
            return false;
        }
        let Some(cell) = self.cell_mut(row, col) else {
            return false;
        };
        if !cell.is_empty() {
            return false;
        }
        cell.kind = kind;
        cell.hp = kind.place_hp();
        true
    }

    /// Salvage a non-empty cell. Returns the resource reward for the caller
    /// to credit, or `None` when out of bounds or already empty.
    pub fn remove(&mut self, row: i32, col: i32) -> Option<u32> {
        let Some(cell) = self.cell_mut(row, col) else {
            return None;
        };
        if cell.is_empty() {
            return None;
        }
        let reward = cell.kind.salvage_reward();
        cell.clear();
        Some(reward)
    }

    /// Apply damage to a cell; a cell dropping to hp <= 0 becomes empty.
    /// Returns true on destruction so the acting subsystem can credit its
    /// own reward. No-op on empty or out-of-bounds cells.
    pub fn damage(&mut self, row: i32, col: i32, amount: i32) -> bool {
        let Some(cell) = self.cell_mut(row, col) else {
            return false;
        };
        if cell.is_empty() {
            return false;
        }
        cell.hp -= amount;
        if cell.hp <= 0 {
            cell.clear();
            true
        } else {
            false
        }
    }

    /// Clear every cell, then scatter irregular armor asteroid clusters.
    /// Cluster centers keep a column margin off both edges; each candidate
    /// cell within the cluster radius fills with `ASTEROID_FILL_PCT` odds.
    pub fn scatter_asteroids(&mut self, rng: &mut Pcg32) {
        for cell in &mut self.cells {
            cell.clear();
        }
        let col_lo = ASTEROID_MARGIN.min(self.cols as i32 - 1).max(0);
        let col_hi = (self.cols as i32 - ASTEROID_MARGIN).max(col_lo + 1);
        for _ in 0..ASTEROID_CLUSTERS {
            let center_row = rng.random_range(0..self.rows as i32);
            let center_col = rng.random_range(col_lo..col_hi);
            let radius = rng.random_range(3..=8);
            for dr in -radius..=radius {
                for dc in -radius..=radius {
                    let (row, col) = (center_row + dr, center_col + dc);
                    if !self.in_bounds(row, col) {
                        continue;
                    }
                    if rng.random_range(0..100u32) < ASTEROID_FILL_PCT {
                        let cell = &mut self.cells[row as usize * self.cols + col as usize];
                        cell.kind = CellKind::Armor;
                        cell.hp = 40 + rng.random_range(0..40);
                    }
                }
            }
        }
    }
}
