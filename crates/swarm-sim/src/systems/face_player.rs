//! Orientation system: turns every enemy to face the player in the
//! horizontal plane.

use glam::{Mat3, Quat, Vec3};
use hecs::World;
use tracing::trace;

use swarm_core::components::{Enemy, Rotation, Translation};
use swarm_core::constants::LOOK_EPSILON;
use swarm_core::types::horizontal;

use crate::context::{GameContext, TickContext};
use crate::systems::UpdatePhase;

/// Rotation whose local +Z points along `forward` with local +Y as close to
/// `up` as possible. `None` when `forward` is (nearly) zero or parallel to
/// `up`.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Option<Quat> {
    if forward.length_squared() < LOOK_EPSILON * LOOK_EPSILON {
        return None;
    }
    let forward = forward.try_normalize()?;
    let right = up.cross(forward).try_normalize()?;
    let up = forward.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)).normalize())
}

/// Point every enemy at the player. Does nothing once the game is over.
///
/// Returns how many rotations were written. Enemies standing on the player
/// keep their previous rotation.
pub fn run(world: &mut World, game: &GameContext) -> usize {
    if game.is_game_over() {
        return 0;
    }

    let target = game.reference_position();
    let mut updated = 0;
    for (entity, (pos, rot)) in world
        .query_mut::<(&Translation, &mut Rotation)>()
        .with::<&Enemy>()
    {
        match look_rotation(horizontal(target - pos.0), Vec3::Y) {
            Some(facing) => {
                rot.0 = facing;
                updated += 1;
            }
            None => trace!(?entity, "enemy on reference point, rotation kept"),
        }
    }
    updated
}

/// Pipeline adapter for [`run`].
#[derive(Debug, Default)]
pub struct FacePlayer;

impl UpdatePhase for FacePlayer {
    fn name(&self) -> &'static str {
        "face_player"
    }

    fn update(&mut self, world: &mut World, ctx: &mut TickContext<'_>) {
        run(world, ctx.game);
    }
}
