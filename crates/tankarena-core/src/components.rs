//! ECS components for hecs entities.
//!
//! Components are mostly plain data. `Tank` carries the few state
//! transitions that must hold their invariants wherever they are called
//! from (damage clamping, reload bookkeeping).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{Direction, Faction};

/// Pixel position. Top-left corner for tanks, center for projectiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Current facing of a tank, or travel direction of a projectile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facing(pub Direction);

/// Tank state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    pub faction: Faction,
    /// Never negative; the tank is destroyed exactly when this is zero.
    pub health: i32,
    pub max_health: i32,
    /// Displacement per accepted move.
    pub speed: f32,
    /// Seconds required between shots.
    pub reload_secs: f32,
    /// Seconds since the last shot. Stops growing once it reaches `reload_secs`.
    pub since_last_shot: f32,
}

impl Tank {
    /// A fresh tank at full health and ready to fire.
    pub fn new(faction: Faction) -> Self {
        let (speed, reload_secs) = match faction {
            Faction::Player => (PLAYER_SPEED, PLAYER_RELOAD_SECS),
            Faction::Enemy => (ENEMY_SPEED, ENEMY_RELOAD_SECS),
        };
        Self {
            faction,
            health: TANK_MAX_HEALTH,
            max_health: TANK_MAX_HEALTH,
            speed,
            reload_secs,
            since_last_shot: reload_secs,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    /// Subtract `damage`, clamping at zero.
    pub fn take_damage(&mut self, damage: i32) {
        self.health = (self.health - damage).max(0);
    }

    pub fn can_fire(&self) -> bool {
        self.since_last_shot >= self.reload_secs
    }

    /// Reset the reload timer. Returns false (and changes nothing) if the
    /// tank was not ready.
    pub fn try_fire(&mut self) -> bool {
        if !self.can_fire() {
            return false;
        }
        self.since_last_shot = 0.0;
        true
    }

    /// Accumulate reload time.
    pub fn advance(&mut self, dt: f32) {
        if self.since_last_shot < self.reload_secs {
            self.since_last_shot += dt;
        }
    }
}

/// Projectile state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub faction: Faction,
    /// Displacement per tick.
    pub speed: f32,
    pub damage: i32,
    pub destroyed: bool,
}

impl Projectile {
    pub fn new(faction: Faction) -> Self {
        Self {
            faction,
            speed: PROJECTILE_SPEED,
            damage: PROJECTILE_DAMAGE,
            destroyed: false,
        }
    }

    /// Position after one tick of travel along `direction`.
    pub fn step(&self, position: Vec2, direction: Direction) -> Vec2 {
        position + direction.unit() * self.speed
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }
}

/// Where a tank of the given top-left `origin` spawns its projectile when
/// firing along `facing`: the hull center pushed out past the hull edge.
pub fn muzzle_position(origin: Vec2, facing: Direction) -> Vec2 {
    let center = origin + Vec2::splat(TANK_SIZE / 2.0);
    center + facing.unit() * (TANK_SIZE / 2.0 + MUZZLE_CLEARANCE)
}
