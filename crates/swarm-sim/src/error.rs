use glam::Vec3;

use swarm_core::error::ConfigError;

/// Failures surfaced by the simulation engine.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The starting player position has a NaN or infinite coordinate.
    #[error("player position must be finite, got {0}")]
    NonFinitePlayerPosition(Vec3),

    /// The handle does not name a live enemy.
    #[error("no enemy with id {0}")]
    UnknownEnemy(u64),
}
