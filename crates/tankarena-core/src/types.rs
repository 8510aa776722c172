//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{MIN_FPS_DELTA, TANK_SIZE, TILE_SIZE};

/// Axis-aligned bounding box in pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box with its top-left corner at `origin`.
    pub fn from_origin(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Box centred on `center` extending `half` in each direction.
    pub fn from_center(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Footprint of a tank whose top-left corner is `origin`.
    pub fn tank(origin: Vec2) -> Self {
        Self::from_origin(origin, Vec2::splat(TANK_SIZE))
    }

    /// Strict overlap test: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

/// Integer tile coordinate (column, row). Signed so that out-of-bounds
/// queries can be expressed directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
}

impl TileCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Tile containing a pixel position (floor division).
    pub fn containing(point: Vec2) -> Self {
        Self {
            x: (point.x / TILE_SIZE).floor() as i32,
            y: (point.y / TILE_SIZE).floor() as i32,
        }
    }

    /// Pixel position of the tile's top-left corner.
    pub fn origin(self) -> Vec2 {
        Vec2::new(self.x as f32 * TILE_SIZE, self.y as f32 * TILE_SIZE)
    }

    /// Top-left corner of a tank centred inside this tile.
    pub fn centered_tank_origin(self) -> Vec2 {
        self.origin() + Vec2::splat((TILE_SIZE - TANK_SIZE) / 2.0)
    }
}

/// Simulation time tracking. Only accrues while the session is playing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of playing ticks processed.
    pub tick: u64,
    /// Accumulated frame deltas in seconds.
    pub elapsed_secs: f64,
    /// Frame rate implied by the last delta, zero for degenerate deltas.
    pub fps: f32,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += f64::from(dt);
        self.fps = if dt > MIN_FPS_DELTA { 1.0 / dt } else { 0.0 };
    }
}
