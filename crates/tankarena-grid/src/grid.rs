//! TileGrid: loaded arena map with occupancy queries.

use glam::Vec2;

use tankarena_core::constants::{TILE_EDGE_EPSILON, TILE_SIZE};
use tankarena_core::enums::TileKind;
use tankarena_core::types::{Aabb, TileCoord};

use crate::loader::MapError;

/// Arena map: a fixed-size grid of tiles plus designated spawn sites.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    /// Row-major, row 0 at the top.
    tiles: Vec<TileKind>,
    /// Tiles as loaded, restored by `reset_to_initial`.
    initial_tiles: Vec<TileKind>,
    player_start: TileCoord,
    enemy_starts: Vec<TileCoord>,
}

impl TileGrid {
    /// Build a grid from row-major tiles, validating dimensions and spawn
    /// sites. Spawn sites must be in bounds and not on a wall.
    pub fn new(
        width: usize,
        height: usize,
        tiles: Vec<TileKind>,
        player_start: TileCoord,
        enemy_starts: Vec<TileCoord>,
    ) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::Empty);
        }
        if tiles.len() != width * height {
            return Err(MapError::TileCountMismatch {
                expected: width * height,
                found: tiles.len(),
            });
        }

        let grid = Self {
            width,
            height,
            initial_tiles: tiles.clone(),
            tiles,
            player_start,
            enemy_starts,
        };

        for &start in std::iter::once(&grid.player_start).chain(&grid.enemy_starts) {
            if !grid.in_bounds(start) {
                return Err(MapError::StartOutOfBounds {
                    x: start.x,
                    y: start.y,
                });
            }
            if grid.tile(start) == TileKind::Wall {
                return Err(MapError::StartOnWall {
                    x: start.x,
                    y: start.y,
                });
            }
        }

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Map extent in pixels.
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * TILE_SIZE,
            self.height as f32 * TILE_SIZE,
        )
    }

    pub fn player_start(&self) -> TileCoord {
        self.player_start
    }

    pub fn enemy_starts(&self) -> &[TileCoord] {
        &self.enemy_starts
    }

    pub fn in_bounds(&self, coord: TileCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Tile at `coord`. Anything outside the map reads as a wall.
    pub fn tile(&self, coord: TileCoord) -> TileKind {
        if !self.in_bounds(coord) {
            return TileKind::Wall;
        }
        self.tiles[coord.y as usize * self.width + coord.x as usize]
    }

    /// Tile at column `x`, row `y`. Out of bounds reads as a wall.
    pub fn tile_at(&self, x: i32, y: i32) -> TileKind {
        self.tile(TileCoord::new(x, y))
    }

    /// Tile containing a pixel position.
    pub fn tile_at_point(&self, point: Vec2) -> TileKind {
        self.tile(TileCoord::containing(point))
    }

    /// True if `rect` leaves the map or touches any wall tile.
    pub fn is_blocking_rect(&self, rect: &Aabb) -> bool {
        let size = self.pixel_size();
        if rect.min.x < 0.0 || rect.min.y < 0.0 || rect.max.x > size.x || rect.max.y > size.y {
            return true;
        }

        let start = TileCoord::containing(rect.min);
        let end = TileCoord::containing(rect.max - Vec2::splat(TILE_EDGE_EPSILON));

        (start.y..=end.y).any(|ty| {
            (start.x..=end.x).any(|tx| self.tile_at(tx, ty) == TileKind::Wall)
        })
    }

    /// Overwrite one tile. Ignored out of bounds.
    pub fn set_tile(&mut self, x: i32, y: i32, kind: TileKind) {
        let coord = TileCoord::new(x, y);
        if self.in_bounds(coord) {
            self.tiles[coord.y as usize * self.width + coord.x as usize] = kind;
        }
    }

    /// Restore the tiles captured at load time.
    pub fn reset_to_initial(&mut self) {
        self.tiles.clone_from(&self.initial_tiles);
    }

    /// Rows of tiles, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[TileKind]> {
        self.tiles.chunks(self.width)
    }
}
