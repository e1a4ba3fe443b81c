//! Fundamental geometric and simulation types.
//!
//! World space is left-handed: X = right, Y = up, Z = forward.
//! Positions are `glam::Vec3`, orientations are unit `glam::Quat`.

use serde::{Deserialize, Serialize};

pub use glam::{Quat, Vec3};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += f64::from(dt);
    }
}

/// Zero the vertical component, leaving only the ground-plane part of `v`.
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Horizontal (XZ-plane) distance between two points.
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    horizontal(b - a).length()
}
