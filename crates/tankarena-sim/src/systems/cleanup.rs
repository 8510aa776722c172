//! Cleanup system: purges destroyed entities.

use hecs::{Entity, World};

use super::is_destroyed;

/// Remove every destroyed entity from the roster and despawn it.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
/// Returns the number of entities removed.
pub fn run(world: &mut World, roster: &mut Vec<Entity>, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    roster.retain(|&entity| {
        let destroyed = is_destroyed(world, entity);
        if destroyed {
            despawn_buffer.push(entity);
        }
        !destroyed
    });

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
