//! Per-tick context handed to every update phase.

use rand_chacha::ChaCha8Rng;

use swarm_core::events::SimEvent;
use swarm_core::types::Vec3;

/// Game-wide state owned by the host: the game-over flag and the player's
/// position. Phases only ever see it by shared reference; it changes
/// between ticks through commands.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GameContext {
    pub game_over: bool,
    pub player_position: Vec3,
}

impl GameContext {
    pub fn new(player_position: Vec3) -> Self {
        Self {
            game_over: false,
            player_position,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The point enemies face and spawn around.
    pub fn reference_position(&self) -> Vec3 {
        self.player_position
    }
}

/// Everything a phase may read or consume during one tick.
pub struct TickContext<'a> {
    /// Seconds elapsed since the previous tick.
    pub dt: f32,
    pub game: &'a GameContext,
    pub rng: &'a mut ChaCha8Rng,
    /// Events to deliver with this tick's snapshot.
    pub events: &'a mut Vec<SimEvent>,
}
