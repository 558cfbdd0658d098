//! Ship-vs-world overlap resolution
//!
//! Every ship block overlapping a non-empty cell inverts and dampens the
//! ship's velocity and chips the cell. Overlaps resolve independently, so
//! several blocks hitting in the same tick compound on both sides.

use glam::Vec2;

use super::grid::WorldGrid;
use super::ship::Ship;
use crate::consts::*;
use crate::world_to_grid;

/// Resolve all block/cell overlaps for this tick. Returns the resources
/// credited for cells broken by the impact.
pub fn resolve(grid: &mut WorldGrid, ship: &mut Ship) -> u32 {
    let mut resources = 0;

    let positions: Vec<Vec2> = ship
        .blocks()
        .iter()
        .map(|block| ship.block_world_pos(block))
        .collect();

    for world in positions {
        let (row, col) = world_to_grid(world);
        if grid.cell(row, col).is_some_and(|c| !c.is_empty()) {
            ship.vel *= COLLISION_RESTITUTION;
            if grid.damage(row, col, COLLISION_DAMAGE) {
                resources += BREAK_RESOURCE_REWARD;
            }
        }
    }

    resources
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::grid::CellKind;

    #[test]
    fn overlap_inverts_and_dampens_velocity() {
        let mut grid = WorldGrid::new(50, 80);
        let mut ship = Ship::new(25, 10);
        ship.vel = Vec2::new(10.0, 0.0);

        // Armor under the core block only
        grid.place(25, 10, CellKind::Armor);

        let resources = resolve(&mut grid, &mut ship);
        assert_eq!(resources, 0);
        assert_eq!(ship.vel, Vec2::new(-3.0, 0.0));
        assert_eq!(grid.cell(25, 10).unwrap().hp, 52);
    }

    #[test]
    fn breaking_a_cell_credits_resources() {
        let mut grid = WorldGrid::new(50, 80);
        let mut ship = Ship::new(25, 10);

        grid.place(25, 10, CellKind::Armor);
        grid.cell_mut(25, 10).unwrap().hp = 5;

        let resources = resolve(&mut grid, &mut ship);
        assert_eq!(resources, 6);
        assert!(grid.cell(25, 10).unwrap().is_empty());
    }

    #[test]
    fn simultaneous_overlaps_compound() {
        let mut grid = WorldGrid::new(50, 80);
        let mut ship = Ship::new(25, 10);
        ship.vel = Vec2::new(10.0, 0.0);

        // Cells under the core and the right strut
        grid.place(25, 10, CellKind::Armor);
        grid.place(25, 11, CellKind::Armor);

        resolve(&mut grid, &mut ship);
        // Two independent inversions: 10 * -0.3 * -0.3
        assert!((ship.vel.x - 0.9).abs() < 1e-5);
        assert_eq!(grid.cell(25, 10).unwrap().hp, 52);
        assert_eq!(grid.cell(25, 11).unwrap().hp, 52);
    }

    #[test]
    fn clear_space_is_a_noop() {
        let mut grid = WorldGrid::new(50, 80);
        let mut ship = Ship::new(25, 10);
        ship.vel = Vec2::new(4.0, 4.0);

        assert_eq!(resolve(&mut grid, &mut ship), 0);
        assert_eq!(ship.vel, Vec2::new(4.0, 4.0));
    }
}
