//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::{Quat, Vec3};

/// Marks an entity as an enemy of the player.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Enemy;

/// World-space position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Translation(pub Vec3);

/// World-space orientation. Local +Z is the entity's forward axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation(pub Quat);

/// Forward locomotion along the entity's facing direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveForward {
    /// Units per second. Assigned once at spawn, never changed afterwards.
    pub speed: f32,
}
