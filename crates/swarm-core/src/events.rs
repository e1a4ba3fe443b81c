//! Events emitted by the simulation for the host game.

use serde::{Deserialize, Serialize};

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// The wave timer was armed by the start signal.
    SpawningArmed,
    /// A wave of `count` enemies was created. `wave` starts at 1.
    WaveSpawned { wave: u32, count: u32 },
    /// The game-over flag was raised.
    GameOver,
    /// An enemy was removed by the host.
    EnemyDespawned { id: u64 },
}
