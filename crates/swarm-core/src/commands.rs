//! Commands sent by the host game to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, never in
//! the middle of a system run.

use serde::{Deserialize, Serialize};

use crate::types::Vec3;

/// All external signals the simulation accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameCommand {
    /// Arm the wave timer. Only the first one has any effect.
    StartSpawning,
    /// Update the reference point enemies face and spawn around.
    SetPlayerPosition { position: Vec3 },
    /// Raise or clear the game-over flag.
    SetGameOver { game_over: bool },
    /// Set time scale (1.0 = normal, 0.0 = frozen).
    SetTimeScale { scale: f64 },
    /// Remove an enemy that was destroyed or left play.
    DespawnEnemy { id: u64 },
}
