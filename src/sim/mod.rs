//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (session-owned `Pcg32`)
//! - No rendering or platform dependencies
//!
//! One [`Session`] owns the world grid, the ship, and the drone pool; the
//! per-tick update runs Integrator -> Mining -> Drone AI -> Collision and
//! then checks end conditions.

pub mod clock;
pub mod collision;
pub mod combat;
pub mod drone;
pub mod grid;
pub mod mining;
pub mod physics;
pub mod ship;
pub mod state;
pub mod tick;

pub use clock::SessionClock;
pub use drone::Drone;
pub use grid::{Cell, CellKind, WorldGrid};
pub use ship::{BlockRole, Ship, ShipBlock};
pub use state::{Session, SessionConfig};
pub use tick::{TickInput, tick};
