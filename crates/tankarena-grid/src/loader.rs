//! Plain-text map format loader and writer.
//!
//! One character per tile, one line per row:
//! `#` wall, `P` player start (first one wins), `E` enemy start,
//! anything else empty floor. Every row must be as wide as the first.
//! Trailing blank lines are ignored.

use std::io;
use std::path::Path;

use tankarena_core::enums::TileKind;
use tankarena_core::types::TileCoord;

use crate::grid::TileGrid;

const WALL: char = '#';
const PLAYER_START: char = 'P';
const ENEMY_START: char = 'E';
const FLOOR: char = '.';

/// Reasons a map cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("failed to read map: {0}")]
    Io(#[from] io::Error),
    #[error("map is empty")]
    Empty,
    #[error("row {line} has width {found}, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("tile buffer holds {found} tiles, expected {expected}")]
    TileCountMismatch { expected: usize, found: usize },
    #[error("map has no player start marker")]
    MissingPlayerStart,
    #[error("start position ({x}, {y}) is outside the map")]
    StartOutOfBounds { x: i32, y: i32 },
    #[error("start position ({x}, {y}) is on a wall")]
    StartOnWall { x: i32, y: i32 },
}

/// Load a map from a text file.
pub fn load_map(path: &Path) -> Result<TileGrid, MapError> {
    let text = std::fs::read_to_string(path)?;
    parse_map(&text)
}

/// Parse a map from its text form.
pub fn parse_map(text: &str) -> Result<TileGrid, MapError> {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let width = match lines.first() {
        Some(first) => first.chars().count(),
        None => return Err(MapError::Empty),
    };

    let mut tiles = Vec::with_capacity(width * lines.len());
    let mut player_start = None;
    let mut enemy_starts = Vec::new();

    for (row, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(MapError::RaggedRow {
                line: row + 1,
                expected: width,
                found,
            });
        }

        for (col, c) in line.chars().enumerate() {
            let coord = TileCoord::new(col as i32, row as i32);
            match c {
                WALL => {
                    tiles.push(TileKind::Wall);
                    continue;
                }
                PLAYER_START => {
                    player_start.get_or_insert(coord);
                }
                ENEMY_START => enemy_starts.push(coord),
                _ => {}
            }
            tiles.push(TileKind::Empty);
        }
    }

    let player_start = player_start.ok_or(MapError::MissingPlayerStart)?;
    TileGrid::new(width, lines.len(), tiles, player_start, enemy_starts)
}

/// Render a grid back to the text format. Markers are written for the
/// designated start positions; all other floor tiles become `.`.
pub fn format_map(grid: &TileGrid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for (row, tiles) in grid.rows().enumerate() {
        for (col, &kind) in tiles.iter().enumerate() {
            let coord = TileCoord::new(col as i32, row as i32);
            let c = if kind == TileKind::Wall {
                WALL
            } else if coord == grid.player_start() {
                PLAYER_START
            } else if grid.enemy_starts().contains(&coord) {
                ENEMY_START
            } else {
                FLOOR
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}
