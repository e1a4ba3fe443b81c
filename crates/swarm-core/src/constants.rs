//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Maximum time scale accepted by `SetTimeScale`.
pub const MAX_TIME_SCALE: f64 = 4.0;

/// Horizontal directions shorter than this leave the rotation untouched.
pub const LOOK_EPSILON: f32 = 1.0e-5;

// --- Spawner defaults ---

/// Enemies created by the first wave.
pub const DEFAULT_SPAWN_COUNT: u32 = 30;

/// Seconds between waves once spawning is armed.
pub const DEFAULT_SPAWN_INTERVAL_SECS: f32 = 3.0;

/// Enemies are placed on a ring of this radius around the player.
pub const DEFAULT_SPAWN_RADIUS: f32 = 30.0;

/// Extra enemies added to each subsequent wave.
pub const DEFAULT_DIFFICULTY_BONUS: u32 = 5;

/// Lower bound of the per-enemy forward speed (units/s).
pub const DEFAULT_MIN_SPEED: f32 = 4.0;

/// Upper bound of the per-enemy forward speed (units/s).
pub const DEFAULT_MAX_SPEED: f32 = 12.0;

/// Height above the player's vertical coordinate at which enemies appear.
pub const DEFAULT_GROUND_CLEARANCE: f32 = 0.5;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
