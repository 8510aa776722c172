//! Combat simulation for the tank arena.
//!
//! Owns the hecs ECS world, runs the per-tick systems,
//! and produces GameStateSnapshots for the renderer.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use tankarena_core as core;
pub use engine::{SimConfig, SimulationEngine};
