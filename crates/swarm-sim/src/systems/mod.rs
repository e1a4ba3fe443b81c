//! ECS systems that operate on the simulation world each tick.
//!
//! Each system is a plain `run` function over `&mut World`. The engine
//! drives them through [`UpdatePhase`] in a fixed order, so structural
//! changes (spawning) never overlap another system's query.

use hecs::World;

use crate::context::TickContext;

pub mod face_player;
pub mod movement;
pub mod snapshot;
pub mod wave_spawner;

/// One step of the per-tick pipeline.
pub trait UpdatePhase {
    /// Name used in trace output.
    fn name(&self) -> &'static str;

    fn update(&mut self, world: &mut World, ctx: &mut TickContext<'_>);
}
