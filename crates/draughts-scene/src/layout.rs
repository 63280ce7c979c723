//! Board coordinates and the opening position.

use draughts_engine::geometry::Vec2;

/// Cells per board edge.
pub const BOARD_SIZE: u8 = 8;

/// Width/height of one cell in normalized space (the board spans 2 units).
pub const CELL_EXTENT: f32 = 2.0 / BOARD_SIZE as f32;

/// Pieces each side starts with.
pub const PIECES_PER_SIDE: usize = 12;

/// Rows each side fills at the start.
const HOME_ROWS: u8 = 3;

/// A board square. Column 0 is the left edge, row 0 the top edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BoardCell {
    pub column: u8,
    pub row: u8,
}

/// Normalized-space extent of a cell.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl BoardCell {
    #[inline]
    pub const fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    /// Dark squares are the ones with even `column + row`; the top-left
    /// square is dark.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.column + self.row) % 2 == 0
    }

    pub fn bounds(self) -> CellBounds {
        let c = f32::from(self.column);
        let r = f32::from(self.row);
        CellBounds {
            left: -1.0 + c * CELL_EXTENT,
            right: -1.0 + (c + 1.0) * CELL_EXTENT,
            top: 1.0 - r * CELL_EXTENT,
            bottom: 1.0 - (r + 1.0) * CELL_EXTENT,
        }
    }

    pub fn center(self) -> Vec2 {
        let b = self.bounds();
        Vec2::new(b.left, b.top).midpoint(Vec2::new(b.right, b.bottom))
    }

    /// All 64 cells, column-major (every row of column 0, then column 1, ...).
    pub fn all() -> impl Iterator<Item = BoardCell> {
        (0..BOARD_SIZE).flat_map(|column| (0..BOARD_SIZE).map(move |row| BoardCell::new(column, row)))
    }
}

/// Center of the cell at (`column`, `row`) in normalized space.
pub fn cell_center(column: u8, row: u8) -> Vec2 {
    BoardCell::new(column, row).center()
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    /// Starts on the top three rows.
    Red,
    /// Starts on the bottom three rows.
    Blue,
}

/// A piece on its starting square.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PiecePlacement {
    pub column: u8,
    pub row: u8,
    pub side: Side,
}

impl PiecePlacement {
    #[inline]
    pub const fn cell(self) -> BoardCell {
        BoardCell::new(self.column, self.row)
    }
}

/// The opening position: 12 red pieces, then 12 blue pieces.
///
/// Within each side the order is `i` (0..4) outer, home row `j` (0..3)
/// inner. Odd home rows shift by one column so every piece lands on a dark
/// square.
pub fn initial_placements() -> Vec<PiecePlacement> {
    let mut out = Vec::with_capacity(PIECES_PER_SIDE * 2);

    for i in 0..4u8 {
        for j in 0..HOME_ROWS {
            out.push(PiecePlacement {
                column: 2 * i + j % 2,
                row: j,
                side: Side::Red,
            });
        }
    }

    for i in 0..4u8 {
        for j in 0..HOME_ROWS {
            out.push(PiecePlacement {
                column: 1 + 2 * i - j % 2,
                row: BOARD_SIZE - 1 - j,
                side: Side::Blue,
            });
        }
    }

    out
}
