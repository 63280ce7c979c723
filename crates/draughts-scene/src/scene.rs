//! Scene assembly: the board plus every piece of the opening position.

use draughts_engine::geometry::{Mesh, Rgb};

use crate::board::build_board;
use crate::layout::{cell_center, initial_placements, Side};
use crate::piece::build_piece;

/// Radius of every piece, in normalized units (a cell is 0.25 wide).
pub const PIECE_RADIUS: f32 = 0.1;

/// Added to the non-dominant channels so pieces read lighter than pure red
/// or blue.
pub const PIECE_BRIGHTNESS: f32 = 0.3;

/// Base (unshaded) color of a side's pieces.
pub const fn piece_color(side: Side) -> Rgb {
    match side {
        Side::Red => Rgb::new(1.0, PIECE_BRIGHTNESS, PIECE_BRIGHTNESS),
        Side::Blue => Rgb::new(PIECE_BRIGHTNESS, PIECE_BRIGHTNESS, 1.0),
    }
}

/// Everything drawn on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub board: Mesh,
    /// One mesh per piece, in [`initial_placements`] order.
    pub pieces: Vec<Mesh>,
}

impl Scene {
    /// Meshes in draw order: the board, then the pieces.
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        std::iter::once(&self.board).chain(self.pieces.iter())
    }

    pub fn mesh_count(&self) -> usize {
        1 + self.pieces.len()
    }

    /// Total vertices across all meshes.
    pub fn vertex_count(&self) -> usize {
        self.meshes().map(Mesh::len).sum()
    }
}

/// Builds the board and one piece per starting placement.
pub fn build_scene() -> Scene {
    let board = build_board();

    let pieces: Vec<Mesh> = initial_placements()
        .into_iter()
        .map(|p| build_piece(cell_center(p.column, p.row), piece_color(p.side), PIECE_RADIUS))
        .collect();

    log::debug!(
        "scene built: board {} vertices, {} pieces",
        board.len(),
        pieces.len()
    );

    Scene { board, pieces }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::BoardCell;

    #[test]
    fn scene_has_board_and_24_pieces() {
        let scene = build_scene();
        assert_eq!(scene.board.len(), 384);
        assert_eq!(scene.pieces.len(), 24);
        assert_eq!(scene.mesh_count(), 25);
        assert_eq!(scene.vertex_count(), 384 + 24 * 108);
    }

    #[test]
    fn board_is_drawn_first() {
        let scene = build_scene();
        let first = scene.meshes().next();
        assert_eq!(first, Some(&scene.board));
        assert_eq!(scene.meshes().count(), 25);
    }

    #[test]
    fn every_mesh_is_a_triangle_list() {
        assert!(build_scene().meshes().all(|m| m.len() % 3 == 0 && !m.is_empty()));
    }

    #[test]
    fn pieces_follow_placement_order() {
        let scene = build_scene();
        for (mesh, p) in scene.pieces.iter().zip(initial_placements()) {
            let hub = mesh.vertices()[0];
            assert_eq!(hub.xy(), BoardCell::new(p.column, p.row).center());
            assert_eq!(hub.rgb(), piece_color(p.side));
        }
    }

    #[test]
    fn side_colors() {
        assert_eq!(piece_color(Side::Red), Rgb::new(1.0, 0.3, 0.3));
        assert_eq!(piece_color(Side::Blue), Rgb::new(0.3, 0.3, 1.0));
    }

    #[test]
    fn pieces_fit_inside_their_cell() {
        let scene = build_scene();
        for (mesh, p) in scene.pieces.iter().zip(initial_placements()) {
            let b = p.cell().bounds();
            for v in mesh.vertices() {
                let q = v.xy();
                assert!(q.x > b.left && q.x < b.right);
                assert!(q.y > b.bottom && q.y < b.top);
            }
        }
    }

    #[test]
    fn rebuilding_is_bit_identical() {
        let (a, b) = (build_scene(), build_scene());
        for (ma, mb) in a.meshes().zip(b.meshes()) {
            let bits_a: Vec<u32> = ma.as_floats().iter().map(|f| f.to_bits()).collect();
            let bits_b: Vec<u32> = mb.as_floats().iter().map(|f| f.to_bits()).collect();
            assert_eq!(bits_a, bits_b);
        }
    }
}
