//! Tile kinds and the individual map cell

use macroquad::math::{Rect, Vec2};

use crate::consts::{TILE_HEIGHT, TILE_WIDTH};

/// Every sprite the tile sheet carries, in map-file order
///
/// `Red`, `Green` and `Blue` are decorative floor; everything else is a wall
/// variant named for which edge or corner of a wall region it dresses. The
/// distinction that matters for physics is [`TileKind::is_wall`], not the
/// numeric order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Red = 0,
    Green = 1,
    Blue = 2,
    Center = 3,
    Top = 4,
    TopRight = 5,
    Right = 6,
    BottomRight = 7,
    Bottom = 8,
    BottomLeft = 9,
    Left = 10,
    TopLeft = 11,
}

impl TileKind {
    /// Number of distinct tile sprites
    pub const COUNT: usize = 12;

    /// Every kind, indexed by its map-file value
    pub const ALL: [TileKind; Self::COUNT] = [
        TileKind::Red,
        TileKind::Green,
        TileKind::Blue,
        TileKind::Center,
        TileKind::Top,
        TileKind::TopRight,
        TileKind::Right,
        TileKind::BottomRight,
        TileKind::Bottom,
        TileKind::BottomLeft,
        TileKind::Left,
        TileKind::TopLeft,
    ];

    /// Decode a map-file value; anything outside [0, 12) is invalid
    pub fn from_index(value: i32) -> Option<Self> {
        match value {
            0 => Some(TileKind::Red),
            1 => Some(TileKind::Green),
            2 => Some(TileKind::Blue),
            3 => Some(TileKind::Center),
            4 => Some(TileKind::Top),
            5 => Some(TileKind::TopRight),
            6 => Some(TileKind::Right),
            7 => Some(TileKind::BottomRight),
            8 => Some(TileKind::Bottom),
            9 => Some(TileKind::BottomLeft),
            10 => Some(TileKind::Left),
            11 => Some(TileKind::TopLeft),
            _ => None,
        }
    }

    /// Whether the dot collides with this tile
    pub fn is_wall(self) -> bool {
        !matches!(self, TileKind::Red | TileKind::Green | TileKind::Blue)
    }

    /// (column, row) of this kind's cell in the 4x3 sprite sheet
    pub fn sheet_cell(self) -> (u32, u32) {
        match self {
            TileKind::Red => (0, 0),
            TileKind::TopLeft => (1, 0),
            TileKind::Top => (2, 0),
            TileKind::TopRight => (3, 0),
            TileKind::Green => (0, 1),
            TileKind::Left => (1, 1),
            TileKind::Center => (2, 1),
            TileKind::Right => (3, 1),
            TileKind::Blue => (0, 2),
            TileKind::BottomLeft => (1, 2),
            TileKind::Bottom => (2, 2),
            TileKind::BottomRight => (3, 2),
        }
    }
}

/// One map cell: a fixed 80x80 box and its kind, immutable after load
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    kind: TileKind,
    rect: Rect,
}

impl Tile {
    pub fn new(pos: Vec2, kind: TileKind) -> Self {
        Self {
            kind,
            rect: Rect::new(pos.x, pos.y, TILE_WIDTH, TILE_HEIGHT),
        }
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_covers_exactly_the_valid_range() {
        for value in 0..12 {
            let kind = TileKind::from_index(value).unwrap();
            assert_eq!(kind as i32, value);
            assert_eq!(TileKind::ALL[value as usize], kind);
        }
        assert_eq!(TileKind::from_index(-1), None);
        assert_eq!(TileKind::from_index(12), None);
    }

    #[test]
    fn test_wall_predicate_splits_floor_from_walls() {
        let floors = [TileKind::Red, TileKind::Green, TileKind::Blue];
        for kind in TileKind::ALL {
            assert_eq!(kind.is_wall(), !floors.contains(&kind));
        }
    }

    #[test]
    fn test_sheet_cells_are_unique_and_in_bounds() {
        let mut seen = Vec::new();
        for kind in TileKind::ALL {
            let (col, row) = kind.sheet_cell();
            assert!(col < 4 && row < 3);
            assert!(!seen.contains(&(col, row)));
            seen.push((col, row));
        }
    }

    #[test]
    fn test_sheet_layout_matches_the_art() {
        // Row-major through the sheet: RED TOPLEFT TOP TOPRIGHT / GREEN LEFT
        // CENTER RIGHT / BLUE BOTTOMLEFT BOTTOM BOTTOMRIGHT
        assert_eq!(TileKind::Red.sheet_cell(), (0, 0));
        assert_eq!(TileKind::TopRight.sheet_cell(), (3, 0));
        assert_eq!(TileKind::Center.sheet_cell(), (2, 1));
        assert_eq!(TileKind::BottomRight.sheet_cell(), (3, 2));
    }
}
