//! Simulation engine for the swarm game.
//!
//! Owns the hecs ECS world, runs the update pipeline once per tick,
//! and produces `GameStateSnapshot`s for the host.

pub mod context;
pub mod engine;
pub mod error;
pub mod systems;
pub mod world_setup;

pub use context::GameContext;
pub use engine::{SimConfig, SimulationEngine};
pub use error::SimError;
pub use swarm_core as core;
