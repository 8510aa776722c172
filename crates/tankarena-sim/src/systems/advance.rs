//! Per-tick entity advance.
//!
//! Tanks accumulate reload time from the frame delta. Projectiles move a
//! fixed distance per tick regardless of the delta.

use hecs::{Entity, World};

use tankarena_core::components::{Facing, Position, Projectile, Tank};
use tankarena_core::enums::EntityKind;

use super::kind_of;

/// Advance every entity in roster order.
pub fn run(world: &mut World, roster: &[Entity], dt: f32) {
    for &entity in roster {
        match kind_of(world, entity) {
            Some(EntityKind::Tank) => {
                if let Ok(mut tank) = world.get::<&mut Tank>(entity) {
                    tank.advance(dt);
                }
            }
            Some(EntityKind::Projectile) => {
                if let Ok((position, facing, projectile)) =
                    world.query_one_mut::<(&mut Position, &Facing, &Projectile)>(entity)
                {
                    if !projectile.destroyed {
                        position.0 = projectile.step(position.0, facing.0);
                    }
                }
            }
            None => {}
        }
    }
}
