//! Enemy decision-making for the tank arena.
//!
//! Per-tick enemy intents and respawn site selection. Both are pure
//! functions over an explicitly passed random source, so a seeded
//! generator reproduces every decision.

pub mod policy;
pub mod spawn;

pub use tankarena_core as core;
