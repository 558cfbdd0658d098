//! Player ship: continuous pose plus a fixed block layout
//!
//! Blocks are logical attachment points relative to the core, not grid
//! cells; they are fixed at creation and not individually destructible.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::CELL_SIZE;
use crate::{grid_to_world, rotate_vec, world_to_grid};

/// Role of a block within the ship's layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockRole {
    Core,
    Structure,
    Thruster,
    Miner,
}

/// A fixed (row, col) attachment point relative to the ship core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipBlock {
    pub row_offset: i32,
    pub col_offset: i32,
    pub role: BlockRole,
}

impl ShipBlock {
    pub fn new(row_offset: i32, col_offset: i32, role: BlockRole) -> Self {
        Self {
            row_offset,
            col_offset,
            role,
        }
    }

    /// World-space offset of this block from the ship position at the
    /// given orientation
    pub fn world_offset(&self, orientation: f32) -> Vec2 {
        let local = Vec2::new(
            self.col_offset as f32 * CELL_SIZE,
            self.row_offset as f32 * CELL_SIZE,
        );
        rotate_vec(local, orientation)
    }
}

/// The player vessel. Exactly one exists per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    /// Grid cell nearest the ship position, re-derived after integration
    pub core_row: i32,
    pub core_col: i32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Orientation in radians
    pub orientation: f32,
    pub angular_vel: f32,
    blocks: Vec<ShipBlock>,
}

impl Ship {
    /// Spawn at a grid cell with the default block layout: a core ringed by
    /// struts, one thruster at (1,1), and a miner sharing the (-1,0) slot
    /// with a strut.
    pub fn new(spawn_row: usize, spawn_col: usize) -> Self {
        let blocks = vec![
            ShipBlock::new(0, 0, BlockRole::Core),
            ShipBlock::new(0, 1, BlockRole::Structure),
            ShipBlock::new(0, -1, BlockRole::Structure),
            ShipBlock::new(1, 0, BlockRole::Structure),
            ShipBlock::new(-1, 0, BlockRole::Structure),
            ShipBlock::new(1, 1, BlockRole::Thruster),
            ShipBlock::new(-1, 0, BlockRole::Miner),
        ];
        Self {
            core_row: spawn_row as i32,
            core_col: spawn_col as i32,
            pos: grid_to_world(spawn_row as i32, spawn_col as i32),
            vel: Vec2::ZERO,
            orientation: 0.0,
            angular_vel: 0.0,
            blocks,
        }
    }

    pub fn blocks(&self) -> &[ShipBlock] {
        &self.blocks
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// World position of a block's center
    pub fn block_world_pos(&self, block: &ShipBlock) -> Vec2 {
        self.pos + block.world_offset(self.orientation)
    }

    /// Re-derive the core cell from the continuous position, clamped to
    /// the grid bounds
    pub fn update_core_cell(&mut self, rows: usize, cols: usize) {
        let (row, col) = world_to_grid(self.pos);
        self.core_row = row.clamp(0, rows as i32 - 1);
        self.core_col = col.clamp(0, cols as i32 - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn spawn_centers_on_cell() {
        let ship = Ship::new(25, 10);
        assert_eq!(ship.core_row, 25);
        assert_eq!(ship.core_col, 10);
        assert_eq!(ship.pos, Vec2::new(10.0 * 24.0 + 12.0, 25.0 * 24.0 + 12.0));
        assert_eq!(ship.vel, Vec2::ZERO);
    }

    #[test]
    fn block_offsets_rotate_with_orientation() {
        let mut ship = Ship::new(25, 10);
        let miner = *ship
            .blocks()
            .iter()
            .find(|b| b.role == BlockRole::Miner)
            .unwrap();

        // At orientation 0 the miner sits one cell above the core
        let at_rest = ship.block_world_pos(&miner);
        assert!((at_rest - (ship.pos + Vec2::new(0.0, -24.0))).length() < 1e-4);

        // A quarter turn swings it to the side
        ship.orientation = FRAC_PI_2;
        let turned = ship.block_world_pos(&miner);
        assert!((turned - (ship.pos + Vec2::new(24.0, 0.0))).length() < 1e-3);
    }

    #[test]
    fn core_cell_clamps_to_grid() {
        let mut ship = Ship::new(25, 10);
        ship.pos = Vec2::new(-500.0, 99999.0);
        ship.update_core_cell(50, 80);
        assert_eq!(ship.core_col, 0);
        assert_eq!(ship.core_row, 49);
    }
}
