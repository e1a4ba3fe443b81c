//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Gate state of the wave spawner timer.
///
/// `Idle` until the start signal arrives, then `Armed` for the rest of the
/// session. Game over suppresses an armed timer without leaving `Armed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnerPhase {
    #[default]
    Idle,
    Armed,
}
