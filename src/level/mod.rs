//! The static tile map and its loader
//!
//! A map source is a whitespace-separated run of ASCII integers, one per
//! tile, row-major. Tile positions come from walking the screen: x advances
//! by one tile width per value and wraps to a new row on reaching the screen
//! width. The wrap is an explicit accumulation, not an index division, so the
//! layout stays faithful even if the screen width were not a tile multiple.

pub mod tile;

pub use tile::{Tile, TileKind};

use std::fs;
use std::path::Path;

use macroquad::math::vec2;

use crate::consts::{SCREEN_WIDTH, TILE_HEIGHT, TILE_WIDTH, TOTAL_TILES};
use crate::error::MapLoadError;

/// The level: exactly [`TOTAL_TILES`] tiles, read-only after load
#[derive(Debug, Clone)]
pub struct TileMap {
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Load a map from a file on disk
    pub fn load(path: &Path) -> Result<Self, MapLoadError> {
        let text = fs::read_to_string(path).map_err(|source| MapLoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Build the map from its textual form
    ///
    /// Stops at the first problem; tiles built so far are dropped with the
    /// failed load. Values past the expected count are ignored.
    pub fn parse(text: &str) -> Result<Self, MapLoadError> {
        let mut tiles = Vec::with_capacity(TOTAL_TILES);
        let mut values = text.split_whitespace();
        let mut x = 0.0f32;
        let mut y = 0.0f32;

        for index in 0..TOTAL_TILES {
            let token = values.next().ok_or(MapLoadError::UnexpectedEnd {
                expected: TOTAL_TILES,
                got: index,
            })?;
            let value: i32 = token.parse().map_err(|_| MapLoadError::MalformedToken {
                index,
                token: token.to_string(),
            })?;
            let kind =
                TileKind::from_index(value).ok_or(MapLoadError::InvalidTile { index, value })?;
            tiles.push(Tile::new(vec2(x, y), kind));

            x += TILE_WIDTH;
            if x >= SCREEN_WIDTH {
                x = 0.0;
                y += TILE_HEIGHT;
            }
        }

        Ok(Self { tiles })
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
