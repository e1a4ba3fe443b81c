//! Game state snapshot, the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::SpawnerPhase;
use crate::events::SimEvent;
use crate::types::{Quat, SimTime, Vec3};

/// Complete simulation state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub spawner_phase: SpawnerPhase,
    pub game_over: bool,
    pub player_position: Vec3,
    pub wave: WaveView,
    /// Live enemies, ordered by id.
    pub enemies: Vec<EnemyView>,
    pub events: Vec<SimEvent>,
}

/// A single enemy as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    /// Stable handle, usable with `DespawnEnemy`.
    pub id: u64,
    pub position: Vec3,
    pub rotation: Quat,
    pub speed: f32,
}

/// Wave progression counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveView {
    /// Waves spawned so far.
    pub waves_spawned: u32,
    /// Size of the next wave.
    pub next_spawn_count: u32,
    /// Enemies created across all waves.
    pub total_spawned: u64,
    /// Seconds accumulated toward the next wave.
    pub timer_secs: f32,
    pub interval_secs: f32,
}
