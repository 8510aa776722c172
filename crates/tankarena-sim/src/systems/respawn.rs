//! Respawn system: replaces a destroyed enemy at a free start site.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use tankarena_ai::policy::random_direction;
use tankarena_ai::spawn::pick_site;
use tankarena_core::enums::{Faction, TileKind};
use tankarena_core::events::GameEvent;
use tankarena_core::types::Aabb;
use tankarena_grid::TileGrid;

use super::live_tank_boxes;
use crate::world_setup;

/// Spawn one enemy at a random enemy start whose tile is floor and whose
/// centred footprint is clear of every live tank. If no site qualifies,
/// nothing spawns.
pub fn run(
    world: &mut World,
    roster: &mut Vec<Entity>,
    grid: &TileGrid,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) -> Option<Entity> {
    let occupied = live_tank_boxes(world, roster);
    let site = pick_site(grid.enemy_starts(), rng, |site| {
        let footprint = Aabb::tank(site.centered_tank_origin());
        grid.tile(site) != TileKind::Wall
            && !occupied.iter().any(|(_, other)| other.overlaps(&footprint))
    });

    let Some(site) = site else {
        tracing::debug!("no free enemy start, respawn skipped");
        events.push(GameEvent::RespawnBlocked);
        return None;
    };

    let origin = site.centered_tank_origin();
    let facing = random_direction(rng);
    let entity = world_setup::spawn_tank(world, roster, origin, facing, Faction::Enemy);
    tracing::debug!(x = site.x, y = site.y, ?facing, "enemy respawned");
    events.push(GameEvent::EnemySpawned {
        x: origin.x,
        y: origin.y,
    });
    Some(entity)
}
