//! Enemy AI system: rolls an intent for every live enemy and applies it.
//!
//! The decision itself lives in tankarena-ai; this system owns the
//! world-dependent acceptance checks.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use tankarena_ai::policy::{decide, step_target, EnemyIntent};
use tankarena_core::enums::{Direction, Faction};
use tankarena_core::events::GameEvent;
use tankarena_core::types::Aabb;
use tankarena_grid::TileGrid;

use super::{control, live_tank, live_tank_boxes};

/// Run the enemy policy once per live enemy tank, in roster order.
pub fn run(
    world: &mut World,
    roster: &mut Vec<Entity>,
    grid: &TileGrid,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    let enemies: Vec<Entity> = roster
        .iter()
        .copied()
        .filter(|&entity| matches!(live_tank(world, entity), Some((_, Faction::Enemy))))
        .collect();

    for entity in enemies {
        let intent = decide(rng);
        apply_intent(world, roster, grid, entity, intent, events);
    }
}

/// Carry out one enemy's intent: the step first, then the shot. Firing
/// still waits on the reload timer.
pub fn apply_intent(
    world: &mut World,
    roster: &mut Vec<Entity>,
    grid: &TileGrid,
    entity: Entity,
    intent: EnemyIntent,
    events: &mut Vec<GameEvent>,
) {
    if let Some(direction) = intent.step {
        try_step(world, roster, grid, entity, direction);
    }
    if intent.fire {
        control::try_fire(world, roster, entity, events);
    }
}

/// One discrete step. Facing always turns; the move is rejected if the
/// destination touches a wall or overlaps any other live tank.
pub fn try_step(
    world: &mut World,
    roster: &[Entity],
    grid: &TileGrid,
    entity: Entity,
    direction: Direction,
) -> bool {
    let Some(origin) = control::turn(world, entity, direction) else {
        return false;
    };
    let candidate = step_target(origin, direction);
    let footprint = Aabb::tank(candidate);

    if grid.is_blocking_rect(&footprint) {
        return false;
    }
    let blocked = live_tank_boxes(world, roster)
        .iter()
        .any(|(other, footprint_other)| *other != entity && footprint_other.overlaps(&footprint));
    if blocked {
        return false;
    }

    control::place(world, entity, candidate)
}
