//! Entity spawn factories and spawn placement.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;

use swarm_core::components::{Enemy, MoveForward, Rotation, Translation};

/// Random point on a horizontal circle of `radius` around `center`, lifted
/// `ground_clearance` above the center's height. The angle is uniform.
pub fn random_point_on_circle<R: Rng>(
    rng: &mut R,
    radius: f32,
    center: Vec3,
    ground_clearance: f32,
) -> Vec3 {
    let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let (sin, cos) = angle.sin_cos();
    center + Vec3::new(cos * radius, ground_clearance, sin * radius)
}

/// Spawn a single enemy facing +Z. Its rotation is set by the face-player
/// system on the next tick.
pub fn spawn_enemy(world: &mut World, position: Vec3, speed: f32) -> Entity {
    world.spawn((
        Enemy,
        Translation(position),
        Rotation::default(),
        MoveForward { speed },
    ))
}
