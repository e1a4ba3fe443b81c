//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes host commands,
//! runs the update pipeline, and produces `GameStateSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace, warn};

use swarm_core::commands::GameCommand;
use swarm_core::config::SpawnerConfig;
use swarm_core::components::Enemy;
use swarm_core::constants::{DEFAULT_SEED, DT, MAX_TIME_SCALE};
use swarm_core::enums::SpawnerPhase;
use swarm_core::events::SimEvent;
use swarm_core::state::GameStateSnapshot;
use swarm_core::types::SimTime;

use crate::context::{GameContext, TickContext};
use crate::error::SimError;
use crate::systems;
use crate::systems::face_player::FacePlayer;
use crate::systems::movement::Movement;
use crate::systems::wave_spawner::WaveSpawner;
use crate::systems::UpdatePhase;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Player position before the first `SetPlayerPosition`.
    pub player_position: Vec3,
    pub spawner: SpawnerConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            time_scale: 1.0,
            player_position: Vec3::ZERO,
            spawner: SpawnerConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    time_scale: f64,
    rng: ChaCha8Rng,
    context: GameContext,
    spawner: WaveSpawner,
    command_queue: VecDeque<GameCommand>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    ///
    /// Unless `spawn_initial_wave` is off, the first wave is placed right
    /// away; its event is delivered with the first snapshot.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        if !config.player_position.is_finite() {
            return Err(SimError::NonFinitePlayerPosition(config.player_position));
        }
        let spawner = WaveSpawner::new(config.spawner.clone())?;

        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            time_scale: sanitize_time_scale(config.time_scale),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            context: GameContext::new(config.player_position),
            spawner,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        };

        if config.spawner.spawn_initial_wave {
            let event = engine.spawner.spawn_wave(
                &mut engine.world,
                &mut engine.rng,
                engine.context.reference_position(),
            );
            engine.events.push(event);
        }

        info!(seed = config.seed, "simulation created");
        Ok(engine)
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: GameCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = GameCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one fixed timestep, scaled by the current time scale.
    /// Commands queued before the call, `SetTimeScale` included, apply to
    /// this tick.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();
        let dt = (f64::from(DT) * self.time_scale) as f32;
        self.step(dt)
    }

    /// Advance by `dt` seconds of host time and return the resulting snapshot.
    /// Negative or non-finite deltas count as zero.
    pub fn tick_with_dt(&mut self, dt: f32) -> GameStateSnapshot {
        self.process_commands();
        self.step(dt)
    }

    /// Run the pipeline for one tick; commands must already be processed.
    fn step(&mut self, dt: f32) -> GameStateSnapshot {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.run_systems(dt);
        self.time.advance(dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.context,
            &self.spawner,
            events,
        )
    }

    /// Remove an enemy destroyed by the host.
    pub fn despawn_enemy(&mut self, entity: Entity) -> Result<(), SimError> {
        let id = entity.to_bits().get();
        if self.world.get::<&Enemy>(entity).is_err() {
            return Err(SimError::UnknownEnemy(id));
        }
        self.world
            .despawn(entity)
            .map_err(|_| SimError::UnknownEnemy(id))?;
        self.events.push(SimEvent::EnemyDespawned { id });
        Ok(())
    }

    /// Number of live enemies.
    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    pub fn spawner_phase(&self) -> SpawnerPhase {
        self.spawner.phase()
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn context(&self) -> &GameContext {
        &self.context
    }

    pub fn spawner(&self) -> &WaveSpawner {
        &self.spawner
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Place an enemy at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, position: Vec3, speed: f32) -> Entity {
        crate::world_setup::spawn_enemy(&mut self.world, position, speed)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: GameCommand) {
        debug!(?command, "handling command");
        match command {
            GameCommand::StartSpawning => {
                if self.spawner.arm() {
                    info!("spawning armed");
                    self.events.push(SimEvent::SpawningArmed);
                }
            }
            GameCommand::SetPlayerPosition { position } => {
                if position.is_finite() {
                    self.context.player_position = position;
                } else {
                    warn!(?position, "ignoring non-finite player position");
                }
            }
            GameCommand::SetGameOver { game_over } => {
                if game_over && !self.context.game_over {
                    info!(tick = self.time.tick, "game over");
                    self.events.push(SimEvent::GameOver);
                }
                self.context.game_over = game_over;
            }
            GameCommand::SetTimeScale { scale } => {
                self.time_scale = sanitize_time_scale(scale);
            }
            GameCommand::DespawnEnemy { id } => {
                let result = Entity::from_bits(id)
                    .ok_or(SimError::UnknownEnemy(id))
                    .and_then(|entity| self.despawn_enemy(entity));
                if let Err(err) = result {
                    warn!(%err, "despawn rejected");
                }
            }
        }
    }

    /// Run the pipeline in order: spawn, orient, move.
    fn run_systems(&mut self, dt: f32) {
        let mut ctx = TickContext {
            dt,
            game: &self.context,
            rng: &mut self.rng,
            events: &mut self.events,
        };
        let mut face_player = FacePlayer;
        let mut movement = Movement;
        let pipeline: [&mut dyn UpdatePhase; 3] =
            [&mut self.spawner, &mut face_player, &mut movement];

        for phase in pipeline {
            trace!(phase = phase.name(), "running phase");
            phase.update(&mut self.world, &mut ctx);
        }
    }
}

/// Clamp to `[0, MAX_TIME_SCALE]`; non-finite scales freeze the simulation.
fn sanitize_time_scale(scale: f64) -> f64 {
    if scale.is_finite() {
        scale.clamp(0.0, MAX_TIME_SCALE)
    } else {
        0.0
    }
}
