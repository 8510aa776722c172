//! Projectile resolution: wall impacts and tank hits.

use glam::Vec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use tankarena_core::components::{Position, Projectile, Tank};
use tankarena_core::constants::{KILL_SCORE, PROJECTILE_HALF_SIZE};
use tankarena_core::enums::{Faction, TileKind};
use tankarena_core::events::GameEvent;
use tankarena_core::types::Aabb;
use tankarena_grid::TileGrid;

use super::{live_tank, respawn};

/// Resolve every live projectile in roster order. A projectile whose
/// center sits on a wall (or off the map) is destroyed. Otherwise the first
/// live tank of the opposing faction whose footprint overlaps the
/// projectile's 6x6 box takes its damage, and the projectile is destroyed.
/// Enemies killed by player fire score and trigger a respawn.
pub fn run(
    world: &mut World,
    roster: &mut Vec<Entity>,
    grid: &TileGrid,
    rng: &mut ChaCha8Rng,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    // Indexed so that tanks respawned mid-scan are visible to later
    // projectiles.
    let mut index = 0;
    while index < roster.len() {
        let entity = roster[index];
        index += 1;

        let (center, faction, damage) =
            match world.query_one_mut::<(&Position, &Projectile)>(entity) {
                Ok((position, projectile)) if !projectile.destroyed => {
                    (position.0, projectile.faction, projectile.damage)
                }
                _ => continue,
            };

        if grid.tile_at_point(center) == TileKind::Wall {
            destroy(world, entity);
            continue;
        }

        let hitbox = Aabb::from_center(center, Vec2::splat(PROJECTILE_HALF_SIZE));
        let target = roster.iter().copied().find(|&tank| {
            live_tank(world, tank).is_some_and(|(origin, tank_faction)| {
                tank_faction != faction && Aabb::tank(origin).overlaps(&hitbox)
            })
        });
        let Some(target) = target else {
            continue;
        };

        destroy(world, entity);
        let Some((target_faction, health, killed)) = apply_damage(world, target, damage) else {
            continue;
        };
        events.push(GameEvent::TankHit {
            faction: target_faction,
            health,
        });

        if killed {
            events.push(GameEvent::TankDestroyed {
                faction: target_faction,
            });
            if faction == Faction::Player {
                *score += KILL_SCORE;
                tracing::debug!(score = *score, "enemy destroyed");
                respawn::run(world, roster, grid, rng, events);
            }
        }
    }
}

/// Damage a tank. Returns its faction, remaining health, and whether this
/// hit destroyed it.
pub fn apply_damage(
    world: &mut World,
    entity: Entity,
    damage: i32,
) -> Option<(Faction, i32, bool)> {
    let mut tank = world.get::<&mut Tank>(entity).ok()?;
    let was_alive = !tank.is_destroyed();
    tank.take_damage(damage);
    Some((tank.faction, tank.health, was_alive && tank.is_destroyed()))
}

fn destroy(world: &mut World, projectile: Entity) {
    if let Ok(mut projectile) = world.get::<&mut Projectile>(projectile) {
        projectile.destroy();
    }
}
