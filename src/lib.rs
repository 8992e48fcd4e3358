//! Tile Bounce - drag the dot, let go, watch it ricochet
//!
//! Core modules:
//! - `sim`: Physics and input mapping (collision, integration, drag launcher)
//! - `level`: Static tile map and its loader
//! - `renderer`: Sprite atlas and draw calls over macroquad
//! - `timer`: Wall-clock stopwatch driving the variable time step
//! - `tuning`: Named behavioral parameters with JSON overrides

pub mod error;
pub mod level;
pub mod renderer;
pub mod sim;
pub mod timer;
pub mod tuning;

pub use error::{GameError, MapLoadError};
pub use timer::FrameClock;
pub use tuning::Tuning;

/// World geometry constants
pub mod consts {
    /// Screen width in pixels
    pub const SCREEN_WIDTH: f32 = 1280.0;
    /// Screen height in pixels
    pub const SCREEN_HEIGHT: f32 = 960.0;

    /// Tile dimensions in pixels
    pub const TILE_WIDTH: f32 = 80.0;
    pub const TILE_HEIGHT: f32 = 80.0;

    /// Number of tiles in the map (16 columns x 12 rows at 1280x960)
    pub const TOTAL_TILES: usize = 192;

    /// Dot sprite dimensions; the collider radius is half of this
    pub const DOT_SIZE: f32 = 20.0;
}
