//! Game state snapshot: the read-only view handed to the renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete visible state produced after each update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub state: SessionState,
    pub score: u32,
    /// Player tank, absent once the session is over.
    pub player: Option<TankView>,
    /// Live entities in collection order.
    pub entities: Vec<EntityView>,
    pub events: Vec<GameEvent>,
}

/// One live entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    /// Stable handle bits, unique for the entity's lifetime.
    pub id: u64,
    pub kind: EntityKind,
    pub position: Vec2,
    pub facing: Direction,
    pub faction: Faction,
    /// Zero for projectiles.
    pub health: i32,
    /// Zero for projectiles.
    pub max_health: i32,
}

/// The player's tank for HUD display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TankView {
    pub position: Vec2,
    pub facing: Direction,
    pub health: i32,
    pub max_health: i32,
    pub can_fire: bool,
}
