//! Headless host for the tank arena.
//!
//! Wires the map loader and simulation engine to a fixed-cadence game loop
//! thread, and maps key codes and console words to player commands.

pub mod config;
pub mod game_loop;
pub mod input;
pub mod state;

pub use tankarena_core as core;
