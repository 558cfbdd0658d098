//! Drift Miner - a destructible-grid mining sim
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ship physics, mining, drone combat,
//!   collisions, session state)
//!
//! The simulation is headless. An external frontend feeds it one
//! [`sim::TickInput`] per tick (a raw 2D thrust vector and a pause flag) and
//! reads state back through the session's accessor methods between ticks.
//! It never mutates simulation state directly.

pub mod sim;

pub use sim::{Session, SessionClock, SessionConfig, TickInput};

use glam::Vec2;

/// Game tuning constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Edge length of one grid cell in world units
    pub const CELL_SIZE: f32 = 24.0;
    /// Default grid dimensions (overridable via `SessionConfig`)
    pub const DEFAULT_ROWS: usize = 50;
    pub const DEFAULT_COLS: usize = 80;

    /// Ship mass used for force -> acceleration
    pub const SHIP_MASS: f32 = 10.0;
    /// Force per thruster block at full input magnitude
    pub const THRUST_FORCE: f32 = 40.0;
    /// Damping applied to thruster torque contributions
    pub const TORQUE_SCALE: f32 = 0.001;
    /// Linear drag coefficient (applied as `vel * LINEAR_DRAG`)
    pub const LINEAR_DRAG: f32 = -0.6;
    /// Angular velocity retained per tick
    pub const ANGULAR_DAMPING: f32 = 0.98;
    /// Per-axis velocity below this snaps to zero
    pub const LINEAR_EPSILON: f32 = 1e-3;
    /// Angular velocity below this snaps to zero
    pub const ANGULAR_EPSILON: f32 = 1e-4;
    /// Displacement is scaled as if dt were always 1/60. All speed tuning
    /// is calibrated against this; changing the tick rate without touching
    /// this constant changes simulated speed.
    pub const POSITION_SCALE: f32 = 60.0;

    /// Drone cruise speed toward the ship
    pub const DRONE_SPEED: f32 = 40.0;
    /// Exponential steering blend per tick
    pub const DRONE_STEER_BLEND: f32 = 0.06;
    /// Attack range around the ship position
    pub const DRONE_ATTACK_RANGE: f32 = CELL_SIZE * 2.0;
    /// Damage dealt to a world cell per attack
    pub const DRONE_ATTACK_DAMAGE: i32 = 6;
    /// Hit points the drone burns per attack, either branch
    pub const DRONE_SELF_DAMAGE: i32 = 4;
    /// Lateral shove applied to the ship when no cell shields it
    pub const DRONE_SHOVE_IMPULSE: f32 = 2.0;
    /// Score lost when the ship itself is hit
    pub const DRONE_HIT_SCORE_PENALTY: i64 = 2;
    /// Spawn roll cadence (6 seconds at 60 Hz)
    pub const DRONE_SPAWN_INTERVAL_TICKS: u64 = 360;
    /// Percent chance a spawn roll produces a drone
    pub const DRONE_SPAWN_CHANCE: u32 = 40;
    /// Hit points for periodically spawned drones
    pub const DRONE_SPAWN_HP: i32 = 50;
    /// Drones seeded into a fresh session
    pub const INITIAL_DRONES: u32 = 8;

    /// Resources credited when a miner destroys an armor cell
    pub const MINE_RESOURCE_REWARD: u32 = 12;
    /// Score credited when a miner destroys an armor cell
    pub const MINE_SCORE_REWARD: i64 = 8;
    /// Resources credited when collision or drone fire destroys a cell
    pub const BREAK_RESOURCE_REWARD: u32 = 6;

    /// Damage a ship block deals to an overlapped cell
    pub const COLLISION_DAMAGE: i32 = 8;
    /// Velocity multiplier on overlap (inverts and dampens)
    pub const COLLISION_RESTITUTION: f32 = -0.3;

    /// Asteroid field generation
    pub const ASTEROID_CLUSTERS: u32 = 40;
    pub const ASTEROID_MARGIN: i32 = 10;
    pub const ASTEROID_FILL_PCT: u32 = 60;

    /// Ship spawn column (middle row is implied)
    pub const SHIP_SPAWN_COL: usize = 10;
    /// Resources a fresh session starts with
    pub const START_RESOURCES: u32 = 60;

    /// Resource quota that ends the run in a win
    pub const WIN_RESOURCES: u32 = 300;
    /// Stalemate: ship slower than this...
    pub const STALL_SPEED: f32 = 0.01;
    /// ...after this many ticks...
    pub const STALL_MIN_TICKS: u64 = 3000;
    /// ...with more than this many drones alive
    pub const STALL_MIN_DRONES: usize = 20;
}

/// Rotate a vector by `angle` radians
#[inline]
pub fn rotate_vec(v: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Convert a world position to (row, col) grid coordinates, unclamped
#[inline]
pub fn world_to_grid(pos: Vec2) -> (i32, i32) {
    (
        (pos.y / consts::CELL_SIZE).floor() as i32,
        (pos.x / consts::CELL_SIZE).floor() as i32,
    )
}

/// Center of a grid cell in world coordinates
#[inline]
pub fn grid_to_world(row: i32, col: i32) -> Vec2 {
    Vec2::new(
        col as f32 * consts::CELL_SIZE + consts::CELL_SIZE / 2.0,
        row as f32 * consts::CELL_SIZE + consts::CELL_SIZE / 2.0,
    )
}
