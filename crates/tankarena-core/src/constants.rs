//! Simulation constants and tuning parameters.
//!
//! Distances are in pixels, times in seconds. Projectile and enemy
//! displacements are per tick, not scaled by the frame delta.

/// Nominal tick rate of the hosting loop (Hz).
pub const TICK_RATE: u32 = 60;

// --- Grid ---

/// Edge length of one map tile.
pub const TILE_SIZE: f32 = 40.0;

/// Inset applied to the far edges of a rectangle before converting it to
/// tile indices, so a box that exactly touches a tile boundary does not
/// claim the neighbouring tile.
pub const TILE_EDGE_EPSILON: f32 = 0.001;

// --- Tanks ---

/// Edge length of a tank's square footprint.
pub const TANK_SIZE: f32 = 36.0;

/// Starting and maximum health of every tank.
pub const TANK_MAX_HEALTH: i32 = 100;

/// Player displacement per accepted move command.
pub const PLAYER_SPEED: f32 = 4.0;

/// Nominal enemy speed. Enemy steps use `ENEMY_STEP` instead.
pub const ENEMY_SPEED: f32 = 3.0;

/// Seconds between player shots.
pub const PLAYER_RELOAD_SECS: f32 = 0.8;

/// Seconds between enemy shots.
pub const ENEMY_RELOAD_SECS: f32 = 1.5;

// --- Projectiles ---

/// Projectile displacement per tick.
pub const PROJECTILE_SPEED: f32 = 8.0;

/// Damage dealt by a single hit.
pub const PROJECTILE_DAMAGE: i32 = 25;

/// Half the edge of the projectile's hit box (a 6x6 square).
pub const PROJECTILE_HALF_SIZE: f32 = 3.0;

/// Gap between the tank hull and a freshly fired projectile.
pub const MUZZLE_CLEARANCE: f32 = 1.0;

// --- Scoring ---

/// Score awarded when a player projectile destroys an enemy.
pub const KILL_SCORE: u32 = 100;

// --- Enemy AI ---

/// Enemy move decision: `ENEMY_MOVE_CHANCE.0` out of `ENEMY_MOVE_CHANCE.1` ticks.
pub const ENEMY_MOVE_CHANCE: (u32, u32) = (5, 150);

/// Enemy fire decision: `ENEMY_FIRE_CHANCE.0` out of `ENEMY_FIRE_CHANCE.1` ticks.
pub const ENEMY_FIRE_CHANCE: (u32, u32) = (2, 100);

/// Length of one discrete enemy step.
pub const ENEMY_STEP: f32 = TANK_SIZE / 4.0;

// --- Tank separation ---

/// Center distance below which two tanks are treated as coincident.
pub const COINCIDENT_EPSILON: f32 = 0.001;

/// Horizontal nudge applied to each of two coincident tanks.
pub const COINCIDENT_NUDGE: f32 = TANK_SIZE / 4.0;

/// Frame deltas at or below this produce an fps reading of zero.
pub const MIN_FPS_DELTA: f32 = 0.0001;
