//! Enemy tank policy.
//!
//! No ECS dependency: callers supply the random source and apply the
//! resulting intent against the world themselves.

use glam::Vec2;
use rand::Rng;

use tankarena_core::constants::{ENEMY_FIRE_CHANCE, ENEMY_MOVE_CHANCE, ENEMY_STEP};
use tankarena_core::enums::Direction;

/// What one enemy wants to do this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnemyIntent {
    /// Turn to this direction and attempt one discrete step.
    pub step: Option<Direction>,
    /// Fire if the reload timer allows it.
    pub fire: bool,
}

/// Roll this tick's intent. The move and fire rolls are independent and
/// both happen every call, so the number of draws depends only on whether
/// a move was chosen.
pub fn decide<R: Rng + ?Sized>(rng: &mut R) -> EnemyIntent {
    let step = roll(rng, ENEMY_MOVE_CHANCE).then(|| random_direction(rng));
    let fire = roll(rng, ENEMY_FIRE_CHANCE);
    EnemyIntent { step, fire }
}

/// Uniformly random cardinal direction.
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
}

/// Candidate top-left corner after one enemy step.
pub fn step_target(origin: Vec2, direction: Direction) -> Vec2 {
    origin + direction.unit() * ENEMY_STEP
}

fn roll<R: Rng + ?Sized>(rng: &mut R, (numerator, denominator): (u32, u32)) -> bool {
    rng.gen_range(0..denominator) < numerator
}
