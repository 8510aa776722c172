//! Tank-tank separation.
//!
//! Overlapping tanks are pushed apart along the line between their
//! centers. Pairs are visited in ascending roster order and each pair is
//! resolved against positions already updated by earlier pairs, so the
//! outcome for clusters of three or more tanks depends on that order.

use glam::Vec2;
use hecs::{Entity, World};

use tankarena_core::constants::{COINCIDENT_EPSILON, COINCIDENT_NUDGE, TANK_SIZE};
use tankarena_core::types::Aabb;
use tankarena_grid::TileGrid;

use super::{control, live_tank};

/// Separate every overlapping pair of live tanks once.
pub fn run(world: &mut World, roster: &[Entity], grid: &TileGrid) {
    let tanks: Vec<Entity> = roster
        .iter()
        .copied()
        .filter(|&entity| live_tank(world, entity).is_some())
        .collect();

    for (i, &first) in tanks.iter().enumerate() {
        for &second in &tanks[i + 1..] {
            let (Some((a, _)), Some((b, _))) = (live_tank(world, first), live_tank(world, second))
            else {
                continue;
            };
            let (new_a, new_b) = resolve_pair(grid, a, b);
            if new_a != a {
                control::place(world, first, new_a);
            }
            if new_b != b {
                control::place(world, second, new_b);
            }
        }
    }
}

/// New origins for two tanks at origins `a` and `b`.
///
/// When their centers are closer than one tank width, each is pushed half
/// the overlap directly away from the other. A push that would touch a
/// wall is rejected; the other tank then takes the full overlap if that is
/// clear, or just its half otherwise. Coincident tanks are nudged apart
/// horizontally, each nudge checked independently.
pub fn resolve_pair(grid: &TileGrid, a: Vec2, b: Vec2) -> (Vec2, Vec2) {
    let clear = |origin: Vec2| !grid.is_blocking_rect(&Aabb::tank(origin));

    // Both footprints are the same size, so origin deltas equal center deltas.
    let delta = a - b;
    let distance = delta.length();
    if distance >= TANK_SIZE {
        return (a, b);
    }

    if distance < COINCIDENT_EPSILON {
        let nudge = Vec2::new(COINCIDENT_NUDGE, 0.0);
        let new_a = if clear(a + nudge) { a + nudge } else { a };
        let new_b = if clear(b - nudge) { b - nudge } else { b };
        return (new_a, new_b);
    }

    let push = delta / distance * (TANK_SIZE - distance) / 2.0;
    match (clear(a + push), clear(b - push)) {
        (true, true) => (a + push, b - push),
        (true, false) => {
            let full = a + push * 2.0;
            (if clear(full) { full } else { a + push }, b)
        }
        (false, true) => {
            let full = b - push * 2.0;
            (a, if clear(full) { full } else { b - push })
        }
        (false, false) => (a, b),
    }
}
