//! Tank movement and firing requests shared by player input and enemy AI.

use glam::Vec2;
use hecs::{Entity, World};

use tankarena_core::components::{muzzle_position, Facing, Position, Tank};
use tankarena_core::enums::Direction;
use tankarena_core::events::GameEvent;
use tankarena_core::types::Aabb;
use tankarena_grid::TileGrid;

use crate::world_setup;

/// Turn `entity` to `direction`, then move it `distance` that way if the
/// new footprint is clear of walls. Facing changes even when the move is
/// rejected. Returns whether the tank moved.
pub fn try_move(
    world: &mut World,
    grid: &TileGrid,
    entity: Entity,
    direction: Direction,
    distance: f32,
) -> bool {
    let Some(candidate) = turn(world, entity, direction)
        .map(|origin| origin + direction.unit() * distance)
    else {
        return false;
    };
    if grid.is_blocking_rect(&Aabb::tank(candidate)) {
        return false;
    }
    place(world, entity, candidate)
}

/// Set facing and return the tank's current origin, if it is alive.
pub fn turn(world: &mut World, entity: Entity, direction: Direction) -> Option<Vec2> {
    let (position, facing, tank) = world
        .query_one_mut::<(&Position, &mut Facing, &Tank)>(entity)
        .ok()?;
    if tank.is_destroyed() {
        return None;
    }
    facing.0 = direction;
    Some(position.0)
}

/// Overwrite an entity's position.
pub fn place(world: &mut World, entity: Entity, origin: Vec2) -> bool {
    match world.get::<&mut Position>(entity) {
        Ok(mut position) => {
            position.0 = origin;
            true
        }
        Err(_) => false,
    }
}

/// Fire from `entity` if it is alive and loaded. The projectile appears
/// just beyond the hull along the tank's facing and inherits its faction.
pub fn try_fire(
    world: &mut World,
    roster: &mut Vec<Entity>,
    entity: Entity,
    events: &mut Vec<GameEvent>,
) -> Option<Entity> {
    let (origin, facing, faction) = {
        let (position, facing, tank) = world
            .query_one_mut::<(&Position, &Facing, &mut Tank)>(entity)
            .ok()?;
        if tank.is_destroyed() || !tank.try_fire() {
            return None;
        }
        (position.0, facing.0, tank.faction)
    };

    let projectile = world_setup::spawn_projectile(
        world,
        roster,
        muzzle_position(origin, facing),
        facing,
        faction,
    );
    events.push(GameEvent::ShotFired { faction });
    Some(projectile)
}
