//! Wave spawning system: rings of enemies around the player on a timer,
//! growing by a fixed bonus every wave.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use tracing::info;

use swarm_core::config::SpawnerConfig;
use swarm_core::enums::SpawnerPhase;
use swarm_core::error::ConfigError;
use swarm_core::events::SimEvent;
use swarm_core::state::WaveView;

use crate::context::TickContext;
use crate::systems::UpdatePhase;
use crate::world_setup;

/// Interval timer gated by the start signal and the game-over flag.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    phase: SpawnerPhase,
    interval_secs: f32,
    elapsed_secs: f32,
}

impl SpawnTimer {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            phase: SpawnerPhase::Idle,
            interval_secs,
            elapsed_secs: 0.0,
        }
    }

    /// Move from Idle to Armed. Returns false if already armed.
    pub fn arm(&mut self) -> bool {
        if self.phase == SpawnerPhase::Armed {
            return false;
        }
        self.phase = SpawnerPhase::Armed;
        true
    }

    /// Accumulate `dt` and report whether a wave is due. The accumulator
    /// resets to zero when it fires. Idle or game-over ticks are ignored
    /// entirely.
    pub fn advance(&mut self, dt: f32, game_over: bool) -> bool {
        if self.phase != SpawnerPhase::Armed || game_over {
            return false;
        }
        self.elapsed_secs += dt;
        if self.elapsed_secs > self.interval_secs {
            self.elapsed_secs = 0.0;
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> SpawnerPhase {
        self.phase
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_secs
    }

    pub fn interval_secs(&self) -> f32 {
        self.interval_secs
    }
}

/// Wave progression counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaveState {
    /// Size of the next wave. Never decreases.
    pub spawn_count: u32,
    pub waves_spawned: u32,
    pub total_spawned: u64,
}

/// Owns the timer, the wave counters and the spawn tuning.
#[derive(Debug, Clone)]
pub struct WaveSpawner {
    config: SpawnerConfig,
    timer: SpawnTimer,
    wave: WaveState,
}

impl WaveSpawner {
    /// Validates `config` so speed sampling and placement cannot panic.
    pub fn new(config: SpawnerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            timer: SpawnTimer::new(config.spawn_interval_secs),
            wave: WaveState {
                spawn_count: config.spawn_count,
                ..WaveState::default()
            },
            config,
        })
    }

    /// Start signal from the host. Returns true on the Idle -> Armed edge.
    pub fn arm(&mut self) -> bool {
        self.timer.arm()
    }

    /// Create `spawn_count` enemies on the spawn ring around `center`, each
    /// with a speed drawn from `[min_speed, max_speed]`, then grow the next
    /// wave by `difficulty_bonus`. Returns the event describing the wave.
    pub fn spawn_wave<R: Rng>(
        &mut self,
        world: &mut World,
        rng: &mut R,
        center: Vec3,
    ) -> SimEvent {
        let count = self.wave.spawn_count;
        for _ in 0..count {
            let position = world_setup::random_point_on_circle(
                rng,
                self.config.spawn_radius,
                center,
                self.config.ground_clearance,
            );
            let speed = rng.gen_range(self.config.min_speed..=self.config.max_speed);
            world_setup::spawn_enemy(world, position, speed);
        }

        self.wave.waves_spawned += 1;
        self.wave.total_spawned += u64::from(count);
        self.wave.spawn_count = count.saturating_add(self.config.difficulty_bonus);

        info!(
            wave = self.wave.waves_spawned,
            count,
            next = self.wave.spawn_count,
            "wave spawned"
        );
        SimEvent::WaveSpawned {
            wave: self.wave.waves_spawned,
            count,
        }
    }

    pub fn phase(&self) -> SpawnerPhase {
        self.timer.phase()
    }

    pub fn wave(&self) -> WaveState {
        self.wave
    }

    pub fn timer(&self) -> &SpawnTimer {
        &self.timer
    }

    pub fn config(&self) -> &SpawnerConfig {
        &self.config
    }

    pub fn view(&self) -> WaveView {
        WaveView {
            waves_spawned: self.wave.waves_spawned,
            next_spawn_count: self.wave.spawn_count,
            total_spawned: self.wave.total_spawned,
            timer_secs: self.timer.elapsed_secs(),
            interval_secs: self.timer.interval_secs(),
        }
    }
}

impl UpdatePhase for WaveSpawner {
    fn name(&self) -> &'static str {
        "wave_spawner"
    }

    fn update(&mut self, world: &mut World, ctx: &mut TickContext<'_>) {
        if self.timer.advance(ctx.dt, ctx.game.is_game_over()) {
            let event = self.spawn_wave(world, &mut *ctx.rng, ctx.game.reference_position());
            ctx.events.push(event);
        }
    }
}
