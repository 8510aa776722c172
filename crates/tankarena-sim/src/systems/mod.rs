//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` and the roster. They do
//! not own state; ordered scans walk the roster, never hecs query order.

pub mod advance;
pub mod cleanup;
pub mod control;
pub mod enemy_ai;
pub mod projectile_hits;
pub mod respawn;
pub mod separation;
pub mod snapshot;

use glam::Vec2;
use hecs::{Entity, World};

use tankarena_core::components::{Position, Projectile, Tank};
use tankarena_core::enums::{EntityKind, Faction};
use tankarena_core::types::Aabb;

/// Kind tag of `entity`, or `None` if it no longer exists.
pub fn kind_of(world: &World, entity: Entity) -> Option<EntityKind> {
    world.get::<&EntityKind>(entity).ok().map(|kind| *kind)
}

/// Destroyed-ness, dispatched on the kind tag. Missing entities count as
/// destroyed.
pub fn is_destroyed(world: &World, entity: Entity) -> bool {
    match kind_of(world, entity) {
        Some(EntityKind::Tank) => world
            .get::<&Tank>(entity)
            .map_or(true, |tank| tank.is_destroyed()),
        Some(EntityKind::Projectile) => world
            .get::<&Projectile>(entity)
            .map_or(true, |projectile| projectile.destroyed),
        None => true,
    }
}

/// Top-left corner and faction of a tank that is still alive.
pub fn live_tank(world: &World, entity: Entity) -> Option<(Vec2, Faction)> {
    if kind_of(world, entity) != Some(EntityKind::Tank) {
        return None;
    }
    let tank = world.get::<&Tank>(entity).ok()?;
    if tank.is_destroyed() {
        return None;
    }
    let position = world.get::<&Position>(entity).ok()?;
    Some((position.0, tank.faction))
}

/// Footprints of every live tank, in roster order.
pub fn live_tank_boxes(world: &World, roster: &[Entity]) -> Vec<(Entity, Aabb)> {
    roster
        .iter()
        .filter_map(|&entity| live_tank(world, entity).map(|(origin, _)| (entity, Aabb::tank(origin))))
        .collect()
}
