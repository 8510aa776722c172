//! Snapshot system: reads the world and builds a GameStateSnapshot.
//!
//! Read-only over the world.

use hecs::{Entity, World};

use tankarena_core::components::{Facing, Position, Projectile, Tank};
use tankarena_core::enums::{EntityKind, SessionState};
use tankarena_core::events::GameEvent;
use tankarena_core::state::{EntityView, GameStateSnapshot, TankView};
use tankarena_core::types::SimTime;

use super::kind_of;

/// Build a complete snapshot. `player` must already be gated on session
/// state by the caller.
pub fn build_snapshot(
    world: &World,
    roster: &[Entity],
    time: SimTime,
    state: SessionState,
    score: u32,
    player: Option<Entity>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time,
        state,
        score,
        player: player.and_then(|entity| tank_view(world, entity)),
        entities: roster
            .iter()
            .filter_map(|&entity| entity_view(world, entity))
            .collect(),
        events,
    }
}

/// HUD view of one tank.
pub fn tank_view(world: &World, entity: Entity) -> Option<TankView> {
    let position = world.get::<&Position>(entity).ok()?;
    let facing = world.get::<&Facing>(entity).ok()?;
    let tank = world.get::<&Tank>(entity).ok()?;
    Some(TankView {
        position: position.0,
        facing: facing.0,
        health: tank.health,
        max_health: tank.max_health,
        can_fire: tank.can_fire(),
    })
}

fn entity_view(world: &World, entity: Entity) -> Option<EntityView> {
    let kind = kind_of(world, entity)?;
    let position = world.get::<&Position>(entity).ok()?.0;
    let facing = world.get::<&Facing>(entity).ok()?.0;

    let (faction, health, max_health) = match kind {
        EntityKind::Tank => {
            let tank = world.get::<&Tank>(entity).ok()?;
            (tank.faction, tank.health, tank.max_health)
        }
        EntityKind::Projectile => {
            let projectile = world.get::<&Projectile>(entity).ok()?;
            (projectile.faction, 0, 0)
        }
    };

    Some(EntityView {
        id: entity.to_bits().get(),
        kind,
        position,
        facing,
        faction,
        health,
        max_health,
    })
}
