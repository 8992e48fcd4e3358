//! Fatal startup error kinds
//!
//! Nothing here is recoverable: any of these aborts before the main loop
//! starts. Once the loop is running the core is pure arithmetic over
//! validated data and has no fallible operations left.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A malformed or unreadable tile map source
#[derive(Debug, Error)]
pub enum MapLoadError {
    #[error("unable to read map file {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unexpected end of map data: expected {expected} tiles, got {got}")]
    UnexpectedEnd { expected: usize, got: usize },

    #[error("map token {token:?} at tile {index} is not an integer")]
    MalformedToken { index: usize, token: String },

    #[error("invalid tile type {value} at tile {index}")]
    InvalidTile { index: usize, value: i32 },
}

/// Top-level startup failure
#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to load asset {path}: {reason}")]
    AssetLoad { path: String, reason: String },

    #[error(transparent)]
    MapLoad(#[from] MapLoadError),
}
