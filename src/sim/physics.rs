//! Thrust and rigid-body integration for the ship
//!
//! Converts the external thrust sample plus ship geometry into linear and
//! angular acceleration, then integrates one fixed step.

use glam::Vec2;

use super::grid::WorldGrid;
use super::ship::{BlockRole, Ship};
use crate::consts::*;
use crate::rotate_vec;

/// Clamp a raw thrust sample to unit magnitude
pub fn clamp_thrust(raw: Vec2) -> Vec2 {
    if raw.length() > 1.0 { raw.normalize() } else { raw }
}

/// Integrate one fixed step of thrust, drag, and rotation, then re-derive
/// the clamped core cell.
///
/// Displacement is deliberately scaled by `dt * 60`: speed tuning assumes a
/// 60 Hz step (see `POSITION_SCALE`).
pub fn integrate(ship: &mut Ship, grid: &WorldGrid, raw_thrust: Vec2, dt: f32) {
    let magnitude = clamp_thrust(raw_thrust).length();

    let mut force = Vec2::ZERO;
    let mut torque = 0.0;

    for block in ship.blocks() {
        if block.role != BlockRole::Thruster {
            continue;
        }
        // Thrusters push along the ship's local -Y, rotated into world space
        let world_dir = rotate_vec(Vec2::new(0.0, -1.0), ship.orientation);
        let f = world_dir * (THRUST_FORCE * magnitude);
        force += f;
        let offset = block.world_offset(ship.orientation);
        torque += (offset.x * f.y - offset.y * f.x) * TORQUE_SCALE;
    }

    force += ship.vel * LINEAR_DRAG;

    let acceleration = force / SHIP_MASS;
    ship.vel += acceleration * dt;
    ship.pos += ship.vel * dt * POSITION_SCALE;

    ship.angular_vel += torque * dt;
    ship.angular_vel *= ANGULAR_DAMPING;
    ship.orientation += ship.angular_vel * dt;

    // Snap tiny residuals to zero to avoid drift
    if ship.vel.x.abs() < LINEAR_EPSILON {
        ship.vel.x = 0.0;
    }
    if ship.vel.y.abs() < LINEAR_EPSILON {
        ship.vel.y = 0.0;
    }
    if ship.angular_vel.abs() < ANGULAR_EPSILON {
        ship.angular_vel = 0.0;
    }

    ship.update_core_cell(grid.rows(), grid.cols());
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_grid() -> WorldGrid {
        WorldGrid::new(50, 80)
    }

    #[test]
    fn thrust_moves_and_spins_the_ship() {
        let grid = test_grid();
        let mut ship = Ship::new(25, 10);
        let start = ship.pos;

        for _ in 0..10 {
            integrate(&mut ship, &grid, Vec2::new(1.0, 0.0), SIM_DT);
        }

        // Local -Y thrust at orientation ~0 pushes the ship upward
        assert!(ship.pos.y < start.y);
        // The off-center thruster at (1,1) imparts torque
        assert!(ship.angular_vel != 0.0);
    }

    #[test]
    fn drag_only_strictly_decreases_speed_to_zero() {
        let grid = test_grid();
        let mut ship = Ship::new(25, 10);
        ship.vel = Vec2::new(5.0, 3.0);

        let mut prev = ship.speed();
        let mut snapped = false;
        for _ in 0..20_000 {
            integrate(&mut ship, &grid, Vec2::ZERO, SIM_DT);
            let speed = ship.speed();
            if speed == 0.0 {
                snapped = true;
                break;
            }
            assert!(speed < prev, "speed must strictly decrease under drag");
            prev = speed;
        }
        assert!(snapped, "speed should reach the zero snap");
    }

    #[test]
    fn core_cell_tracks_position() {
        let grid = test_grid();
        let mut ship = Ship::new(25, 10);
        ship.pos = Vec2::new(30.0 * 24.0 + 1.0, 7.0 * 24.0 + 1.0);
        integrate(&mut ship, &grid, Vec2::ZERO, SIM_DT);
        assert_eq!(ship.core_col, 30);
        assert_eq!(ship.core_row, 7);
    }

    proptest! {
        #[test]
        fn effective_thrust_magnitude_never_exceeds_one(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
        ) {
            let clamped = clamp_thrust(Vec2::new(x, y));
            prop_assert!(clamped.length() <= 1.0 + 1e-4);
        }
    }
}
