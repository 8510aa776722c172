//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::Faction;

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A tank fired a projectile.
    ShotFired { faction: Faction },
    /// A projectile hit a tank of `faction`, leaving it at `health`.
    TankHit { faction: Faction, health: i32 },
    /// A tank's health reached zero.
    TankDestroyed { faction: Faction },
    /// A replacement enemy entered the arena.
    EnemySpawned { x: f32, y: f32 },
    /// An enemy died but every spawn site was blocked.
    RespawnBlocked,
    /// The player tank was destroyed.
    GameOver { score: u32 },
}
