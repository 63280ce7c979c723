//! Checkerboard mesh.

use draughts_engine::geometry::{Mesh, Rgb, Vec2, Vertex};

use crate::layout::BoardCell;

/// Two-tone shading for one tile: `primary` on the top edge, `secondary`
/// (darker) on the bottom edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TileShades {
    pub primary: Rgb,
    pub secondary: Rgb,
}

pub const DARK_TILE: TileShades = TileShades {
    primary: Rgb::gray(0.2),
    secondary: Rgb::black(),
};

pub const LIGHT_TILE: TileShades = TileShades {
    primary: Rgb::white(),
    secondary: Rgb::gray(0.8),
};

/// Triangles per tile.
const TILE_TRIANGLES: usize = 2;

pub fn tile_shades(cell: BoardCell) -> TileShades {
    if cell.is_dark() { DARK_TILE } else { LIGHT_TILE }
}

/// Builds the 8×8 board covering the whole normalized square.
///
/// Tiles are emitted column by column. Each tile is two triangles sharing the
/// bottom-left/top-right diagonal; top corners get the primary shade, bottom
/// corners the secondary one.
pub fn build_board() -> Mesh {
    let mut mesh = Mesh::with_triangle_capacity(64 * TILE_TRIANGLES);

    for cell in BoardCell::all() {
        let b = cell.bounds();
        let shades = tile_shades(cell);

        let bottom_left = Vertex::new(Vec2::new(b.left, b.bottom), shades.secondary);
        let top_left = Vertex::new(Vec2::new(b.left, b.top), shades.primary);
        let top_right = Vertex::new(Vec2::new(b.right, b.top), shades.primary);
        let bottom_right = Vertex::new(Vec2::new(b.right, b.bottom), shades.secondary);

        mesh.push_triangle(bottom_left, top_left, top_right);
        mesh.push_triangle(top_right, bottom_right, bottom_left);
    }

    mesh
}
