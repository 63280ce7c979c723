//! Procedural geometry for a static checkers scene.
//!
//! Everything here is pure: fixed constants in, [`Mesh`] values out. Meshes
//! live in normalized device space (`[-1, 1]` on both axes, +Y up) and are
//! ready to hand to the engine's static mesh renderer.
//!
//! - [`board`]: the 8×8 checkerboard
//! - [`piece`]: one shaded circular piece
//! - [`layout`]: board cells and the opening piece placement
//! - [`scene`]: assembles board + pieces
//!
//! [`Mesh`]: draughts_engine::geometry::Mesh

pub mod board;
pub mod layout;
pub mod piece;
pub mod scene;

pub use board::build_board;
pub use layout::{cell_center, initial_placements, BoardCell, PiecePlacement, Side};
pub use piece::build_piece;
pub use scene::{build_scene, Scene};

#[cfg(test)]
pub(crate) mod test_util {
    pub const EPS: f64 = 1e-6;

    pub fn approx(a: f32, b: f32) -> bool {
        (f64::from(a) - f64::from(b)).abs() < EPS
    }
}
