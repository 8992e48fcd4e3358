//! Collision detection against the tile field
//!
//! Circle-vs-axis-aligned-rectangle overlap via the clamped-closest-point
//! test, kept in squared distances so no square root is ever taken.

use macroquad::math::{Rect, Vec2};

use crate::level::TileMap;

/// The moving entity's collision volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Check whether a circle overlaps an axis-aligned rectangle
///
/// Clamps the circle center onto the rectangle (per axis, independently) to
/// find the closest point, then compares squared distance against squared
/// radius. A center inside the rectangle clamps to itself, so containment
/// always reports an overlap. The comparison is strict: grazing contact at
/// exactly one radius apart is a miss.
pub fn circle_overlaps_rect(circle: &Circle, rect: Rect) -> bool {
    let closest = Vec2::new(
        circle.center.x.clamp(rect.left(), rect.right()),
        circle.center.y.clamp(rect.top(), rect.bottom()),
    );
    circle.center.distance_squared(closest) < circle.radius * circle.radius
}

/// Check whether a circle overlaps any wall tile in the map
///
/// Decorative tiles never participate. Every tile is tested in turn; at 192
/// tiles a linear scan is fine, but this is the piece to replace with a
/// spatial index if the grid ever grows.
pub fn touches_wall(circle: &Circle, map: &TileMap) -> bool {
    map.tiles()
        .iter()
        .filter(|tile| tile.kind().is_wall())
        .any(|tile| circle_overlaps_rect(circle, tile.rect()))
}
