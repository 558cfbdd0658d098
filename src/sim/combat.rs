//! Drone AI and combat
//!
//! Each live drone steers toward the ship with exponential smoothing and,
//! inside attack range, either chews on the world cell it hovers over or
//! shoves the ship directly. Attacking wears the drone down; dead drones
//! are purged at the end of the pass.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::drone::Drone;
use super::grid::WorldGrid;
use super::ship::Ship;
use crate::consts::*;
use crate::world_to_grid;

/// Resources and score changes from one combat pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombatOutcome {
    pub resources: u32,
    pub score: i64,
}

/// Steer every live drone toward the ship, resolve attacks in range, and
/// purge the dead.
pub fn update_drones(
    drones: &mut Vec<Drone>,
    grid: &mut WorldGrid,
    ship: &mut Ship,
    dt: f32,
) -> CombatOutcome {
    let mut outcome = CombatOutcome::default();

    for drone in drones.iter_mut() {
        if drone.hp <= 0 {
            continue;
        }

        let to_ship = ship.pos - drone.pos;
        let dist = to_ship.length();
        let desired = to_ship.normalize_or_zero() * DRONE_SPEED;
        drone.vel += (desired - drone.vel) * DRONE_STEER_BLEND;
        drone.pos += drone.vel * dt * POSITION_SCALE;
        if drone.attack_cooldown > 0.0 {
            // Ticks down for observers; the current tuning leaves attacks ungated
            drone.attack_cooldown = (drone.attack_cooldown - dt).max(0.0);
        }

        if dist < DRONE_ATTACK_RANGE {
            let (row, col) = world_to_grid(drone.pos);
            if grid.cell(row, col).is_some_and(|c| !c.is_empty()) {
                if grid.damage(row, col, DRONE_ATTACK_DAMAGE) {
                    outcome.resources += BREAK_RESOURCE_REWARD;
                }
            } else {
                // Nothing shielding the ship: shove it away along the x
                // separation and dock the score
                let push = if ship.pos.x - drone.pos.x > 0.0 {
                    DRONE_SHOVE_IMPULSE
                } else {
                    -DRONE_SHOVE_IMPULSE
                };
                ship.vel += Vec2::new(push, 0.0);
                outcome.score -= DRONE_HIT_SCORE_PENALTY;
            }
            drone.hp -= DRONE_SELF_DAMAGE;
        }
    }

    drones.retain(|d| d.hp > 0);
    outcome
}

/// Roll the periodic spawn: every `DRONE_SPAWN_INTERVAL_TICKS`, with
/// `DRONE_SPAWN_CHANCE`% odds, one fresh drone appears at the right edge.
pub fn maybe_spawn(
    drones: &mut Vec<Drone>,
    rows: usize,
    cols: usize,
    tick_count: u64,
    rng: &mut Pcg32,
) {
    if tick_count == 0 || tick_count % DRONE_SPAWN_INTERVAL_TICKS != 0 {
        return;
    }
    if rng.random_range(0..100u32) >= DRONE_SPAWN_CHANCE {
        return;
    }
    let pos = Vec2::new(
        (cols as f32 - 4.0) * CELL_SIZE,
        rng.random_range(0..rows as i32) as f32 * CELL_SIZE,
    );
    drones.push(Drone::new(pos, DRONE_SPAWN_HP));
    log::debug!(
        "drone spawned at tick {tick_count}, pool size {}",
        drones.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::grid::CellKind;
    use rand::SeedableRng;

    #[test]
    fn drones_steer_toward_the_ship() {
        let mut grid = WorldGrid::new(50, 80);
        let mut ship = Ship::new(25, 10);
        let mut drones = vec![Drone::new(ship.pos + Vec2::new(500.0, 0.0), 50)];

        let start = drones[0].pos;
        for _ in 0..30 {
            update_drones(&mut drones, &mut grid, &mut ship, SIM_DT);
        }
        assert!(drones[0].pos.x < start.x, "drone should close on the ship");
    }

    #[test]
    fn drone_over_a_cell_attacks_the_cell() {
        let mut grid = WorldGrid::new(50, 80);
        let mut ship = Ship::new(25, 10);
        // Park the drone within range, hovering over an armor cell
        let drone_pos = ship.pos + Vec2::new(30.0, 0.0);
        let (row, col) = world_to_grid(drone_pos);
        grid.place(row, col, CellKind::Armor);
        let mut drones = vec![Drone::new(drone_pos, 50)];

        let outcome = update_drones(&mut drones, &mut grid, &mut ship, SIM_DT);
        assert_eq!(outcome, CombatOutcome::default());
        assert_eq!(grid.cell(row, col).unwrap().hp, 54);
        assert_eq!(drones[0].hp, 46);
        assert_eq!(ship.vel, Vec2::ZERO);
    }

    #[test]
    fn breaking_a_cell_credits_resources() {
        let mut grid = WorldGrid::new(50, 80);
        let mut ship = Ship::new(25, 10);
        let drone_pos = ship.pos + Vec2::new(30.0, 0.0);
        let (row, col) = world_to_grid(drone_pos);
        grid.place(row, col, CellKind::Armor);
        grid.cell_mut(row, col).unwrap().hp = 3;
        let mut drones = vec![Drone::new(drone_pos, 50)];

        let outcome = update_drones(&mut drones, &mut grid, &mut ship, SIM_DT);
        assert_eq!(outcome.resources, 6);
        assert!(grid.cell(row, col).unwrap().is_empty());
    }

    #[test]
    fn unshielded_ship_takes_a_shove() {
        let mut grid = WorldGrid::new(50, 80);
        let mut ship = Ship::new(25, 10);
        // Drone sits right on the ship over a carved-out (empty) cell
        let mut drones = vec![Drone::new(ship.pos, 50)];

        let outcome = update_drones(&mut drones, &mut grid, &mut ship, SIM_DT);
        assert_eq!(outcome.score, -2);
        assert_eq!(ship.vel, Vec2::new(-2.0, 0.0));
        assert_eq!(drones[0].hp, 46);
    }

    #[test]
    fn dead_drones_are_purged_after_the_pass() {
        let mut grid = WorldGrid::new(50, 80);
        let mut ship = Ship::new(25, 10);
        let mut drones = vec![
            Drone::new(ship.pos, 4),
            Drone::new(ship.pos + Vec2::new(2000.0, 0.0), 50),
        ];

        update_drones(&mut drones, &mut grid, &mut ship, SIM_DT);
        assert_eq!(drones.len(), 1);
        assert!(drones.iter().all(|d| d.hp > 0));
    }

    #[test]
    fn spawn_only_rolls_on_the_interval() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut drones = Vec::new();
        for tick in 1..360 {
            maybe_spawn(&mut drones, 50, 80, tick, &mut rng);
        }
        assert!(drones.is_empty(), "no spawn off the interval");

        // On interval ticks the 40% roll eventually fires
        let mut spawned = 0;
        for i in 1..=50u64 {
            let before = drones.len();
            maybe_spawn(&mut drones, 50, 80, i * 360, &mut rng);
            spawned += drones.len() - before;
        }
        assert!(spawned > 0, "spawn roll should fire within 50 intervals");
        for drone in &drones {
            assert_eq!(drone.hp, 50);
            assert_eq!(drone.pos.x, 76.0 * 24.0);
        }
    }
}
