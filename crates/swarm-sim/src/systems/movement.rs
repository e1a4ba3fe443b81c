//! Kinematic integration system.
//!
//! Advances every entity with `MoveForward` along its facing direction:
//! position += speed * dt * forward(rotation).

use glam::{Quat, Vec3};
use hecs::World;

use swarm_core::components::{MoveForward, Rotation, Translation};

use crate::context::TickContext;
use crate::systems::UpdatePhase;

/// Local forward axis of `rotation` in world space.
pub fn forward(rotation: Quat) -> Vec3 {
    rotation * Vec3::Z
}

/// Run forward integration for all entities with Translation + Rotation +
/// MoveForward. Not gated on game over.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (pos, rot, motion)) in
        world.query_mut::<(&mut Translation, &Rotation, &MoveForward)>()
    {
        pos.0 += motion.speed * dt * forward(rot.0);
    }
}

/// Pipeline adapter for [`run`].
#[derive(Debug, Default)]
pub struct Movement;

impl UpdatePhase for Movement {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn update(&mut self, world: &mut World, ctx: &mut TickContext<'_>) {
        run(world, ctx.dt);
    }
}
