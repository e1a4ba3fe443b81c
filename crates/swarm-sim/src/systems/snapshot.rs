//! Snapshot system: reads the ECS world and builds a GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use swarm_core::components::{Enemy, MoveForward, Rotation, Translation};
use swarm_core::events::SimEvent;
use swarm_core::state::{EnemyView, GameStateSnapshot};
use swarm_core::types::SimTime;

use crate::context::GameContext;
use crate::systems::wave_spawner::WaveSpawner;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    game: &GameContext,
    spawner: &WaveSpawner,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        spawner_phase: spawner.phase(),
        game_over: game.is_game_over(),
        player_position: game.reference_position(),
        wave: spawner.view(),
        enemies: build_enemies(world),
        events,
    }
}

/// EnemyView list, sorted by id so output does not depend on storage order.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Translation, &Rotation, &MoveForward)>()
        .iter()
        .map(|(entity, (_, pos, rot, motion))| EnemyView {
            id: entity.to_bits().get(),
            position: pos.0,
            rotation: rot.0,
            speed: motion.speed,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}
