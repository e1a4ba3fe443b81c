//! Core types and definitions for the swarm simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, configuration, commands, state snapshots, events, and
//! constants. It has no dependency on the ECS runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
