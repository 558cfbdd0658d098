//! Hostile drone agents
//!
//! Drones live in a growable pool on the session. Invariant: every drone in
//! the pool has hp > 0 between ticks; the combat pass purges the dead.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    pub pos: Vec2,
    pub vel: Vec2,
    pub orientation: f32,
    pub hp: i32,
    /// Seconds until the drone may attack again; ticks down toward zero
    pub attack_cooldown: f32,
}

impl Drone {
    pub fn new(pos: Vec2, hp: i32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            orientation: 0.0,
            hp,
            attack_cooldown: 0.0,
        }
    }
}
