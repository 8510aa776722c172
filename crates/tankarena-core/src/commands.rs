//! Player commands sent from the host to the simulation.
//!
//! Commands are either applied immediately or queued for processing at the
//! next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Turn to `direction` and try to drive one step that way.
    Move { direction: Direction },
    /// Fire if the reload timer allows it.
    Fire,
    /// Switch between playing and paused.
    TogglePause,
    /// Restart the session from the loaded map.
    Reset,
}
