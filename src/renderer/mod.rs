//! Sprite atlas and draw calls
//!
//! Owns the two textures and the sprite-sheet clip table; everything the
//! simulation knows nothing about. Tiles draw through their sheet clip, the
//! dot draws centered on its collider.

use macroquad::prelude::*;

use crate::consts::{TILE_HEIGHT, TILE_WIDTH};
use crate::error::GameError;
use crate::level::{TileKind, TileMap};
use crate::sim::Dot;

/// Columns x rows of the tile sheet
const SHEET_COLUMNS: u32 = 4;
const SHEET_ROWS: u32 = 3;

/// Loaded textures plus the per-kind clip rectangles
pub struct Assets {
    dot: Texture2D,
    tiles: Texture2D,
    clips: [Rect; TileKind::COUNT],
}

impl Assets {
    /// Load both textures from `dir` and build the clip table
    ///
    /// Fatal on a missing file or a sheet too small to hold the 4x3 grid of
    /// full tile cells.
    pub async fn load(dir: &str) -> Result<Self, GameError> {
        let dot = load_asset_texture(&format!("{dir}/dot.png")).await?;
        let tiles = load_asset_texture(&format!("{dir}/tiles.png")).await?;

        if tiles.width() < SHEET_COLUMNS as f32 * TILE_WIDTH
            || tiles.height() < SHEET_ROWS as f32 * TILE_HEIGHT
        {
            return Err(GameError::AssetLoad {
                path: format!("{dir}/tiles.png"),
                reason: format!(
                    "sheet is {}x{}, need at least {}x{}",
                    tiles.width(),
                    tiles.height(),
                    SHEET_COLUMNS as f32 * TILE_WIDTH,
                    SHEET_ROWS as f32 * TILE_HEIGHT,
                ),
            });
        }

        let clips = std::array::from_fn(|i| {
            let (col, row) = TileKind::ALL[i].sheet_cell();
            Rect::new(
                col as f32 * TILE_WIDTH,
                row as f32 * TILE_HEIGHT,
                TILE_WIDTH,
                TILE_HEIGHT,
            )
        });

        Ok(Self { dot, tiles, clips })
    }

    /// Draw every tile of the level through its sheet clip
    pub fn draw_map(&self, map: &TileMap) {
        for tile in map.tiles() {
            let rect = tile.rect();
            draw_texture_ex(
                &self.tiles,
                rect.x,
                rect.y,
                WHITE,
                DrawTextureParams {
                    source: Some(self.clips[tile.kind() as usize]),
                    ..Default::default()
                },
            );
        }
    }

    /// Draw the dot sprite centered on its position
    pub fn draw_dot(&self, dot: &Dot) {
        let radius = dot.collider().radius;
        draw_texture(&self.dot, dot.pos().x - radius, dot.pos().y - radius, WHITE);
    }
}

async fn load_asset_texture(path: &str) -> Result<Texture2D, GameError> {
    let texture = load_texture(path)
        .await
        .map_err(|err| GameError::AssetLoad {
            path: path.to_string(),
            reason: err.to_string(),
        })?;
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}
