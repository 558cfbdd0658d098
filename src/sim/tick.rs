//! Fixed timestep simulation tick
//!
//! One tick runs Integrator -> Mining -> Drone AI -> Collision in that
//! order, rolls the drone spawn, then checks end conditions. Paused and
//! finished sessions do not advance.

use glam::Vec2;

use super::state::Session;
use super::{collision, combat, mining, physics};
use crate::consts::*;

/// Input sample for a single tick, supplied by an external input provider
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Raw 2D thrust vector; the core clamps its magnitude to 1
    pub thrust: Vec2,
    /// Pause request (level signal: held pause keeps the sim frozen)
    pub pause: bool,
}

/// Advance the session by one fixed timestep
pub fn tick(session: &mut Session, input: &TickInput, dt: f32) {
    // Game over is terminal: state stays readable but frozen
    if session.game_over {
        return;
    }

    session.paused = input.pause;
    if session.paused {
        return;
    }

    session.tick_count += 1;

    physics::integrate(&mut session.ship, &session.grid, input.thrust, dt);

    let mined = mining::resolve(&mut session.grid, &session.ship, &mut session.rng);
    session.resources += mined.resources;
    session.score += mined.score;

    let combat_out = combat::update_drones(
        &mut session.drones,
        &mut session.grid,
        &mut session.ship,
        dt,
    );
    session.resources += combat_out.resources;
    session.score += combat_out.score;

    session.resources += collision::resolve(&mut session.grid, &mut session.ship);

    combat::maybe_spawn(
        &mut session.drones,
        session.grid.rows(),
        session.grid.cols(),
        session.tick_count,
        &mut session.rng,
    );

    check_end_conditions(session);
}

/// Win takes precedence over the stalemate loss when both hold
fn check_end_conditions(session: &mut Session) {
    if session.resources >= WIN_RESOURCES {
        session.game_over = true;
        session.paused = true;
        log::info!(
            "resource quota reached at tick {}: {} resources, score {}",
            session.tick_count,
            session.resources,
            session.score
        );
        return;
    }

    if session.ship.speed() < STALL_SPEED
        && session.tick_count > STALL_MIN_TICKS
        && session.drones.len() > STALL_MIN_DRONES
    {
        session.game_over = true;
        log::info!(
            "overrun at tick {}: ship stalled with {} drones",
            session.tick_count,
            session.drones.len()
        );
    }
}
