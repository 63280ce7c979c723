//! Geometry types shared between scene builders and the mesh renderer.
//!
//! Canonical CPU space is the normalized device square:
//! - `[-1, 1]` on both axes
//! - +X right, +Y up
//!
//! Vertices are passed to the GPU unchanged; there is no viewport transform.

mod color;
mod mesh;
mod vec2;
mod vertex;

pub use color::Rgb;
pub use mesh::Mesh;
pub use vec2::Vec2;
pub use vertex::{Vertex, FLOATS_PER_VERTEX};
