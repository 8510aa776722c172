//! Entity spawn factories for setting up the arena.
//!
//! Every factory appends the new entity to the roster, which defines
//! collection order for all ordered scans.

use glam::Vec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use tankarena_ai::policy::random_direction;
use tankarena_core::components::{Facing, Position, Projectile, Tank};
use tankarena_core::enums::{Direction, EntityKind, Faction};
use tankarena_grid::TileGrid;

/// Despawn every rostered entity and populate the world from the grid's
/// start markers. Despawning one by one advances handle generations, so
/// handles from an earlier session never match a new entity.
/// Returns the player tank.
pub fn setup_session(
    world: &mut World,
    roster: &mut Vec<Entity>,
    grid: &TileGrid,
    rng: &mut ChaCha8Rng,
) -> Entity {
    for entity in roster.drain(..) {
        let _ = world.despawn(entity);
    }

    let player = spawn_tank(
        world,
        roster,
        grid.player_start().origin(),
        Direction::Up,
        Faction::Player,
    );

    for &start in grid.enemy_starts() {
        let facing = random_direction(rng);
        spawn_tank(
            world,
            roster,
            start.centered_tank_origin(),
            facing,
            Faction::Enemy,
        );
    }

    player
}

/// Spawn a tank with its top-left corner at `origin`.
pub fn spawn_tank(
    world: &mut World,
    roster: &mut Vec<Entity>,
    origin: Vec2,
    facing: Direction,
    faction: Faction,
) -> Entity {
    let entity = world.spawn((
        EntityKind::Tank,
        Position(origin),
        Facing(facing),
        Tank::new(faction),
    ));
    roster.push(entity);
    entity
}

/// Spawn a projectile centred on `center`, travelling along `direction`.
pub fn spawn_projectile(
    world: &mut World,
    roster: &mut Vec<Entity>,
    center: Vec2,
    direction: Direction,
    faction: Faction,
) -> Entity {
    let entity = world.spawn((
        EntityKind::Projectile,
        Position(center),
        Facing(direction),
        Projectile::new(faction),
    ));
    roster.push(entity);
    entity
}
