use super::{Vertex, FLOATS_PER_VERTEX};

/// Non-indexed triangle list.
///
/// Invariant: `len() % 3 == 0`. Vertices can only be appended a whole
/// triangle at a time, so the invariant holds by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
}

impl Mesh {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty mesh with room for `triangles` triangles.
    #[inline]
    pub fn with_triangle_capacity(triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangles * 3),
        }
    }

    #[inline]
    pub fn push_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) {
        self.vertices.extend_from_slice(&[a, b, c]);
    }

    /// Number of vertices (the draw call's vertex count).
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertices grouped as triangles, in emission order.
    pub fn triangles(&self) -> impl Iterator<Item = &[Vertex]> + '_ {
        self.vertices.chunks_exact(3)
    }

    /// Flat interleaved view: `x, y, z, r, g, b` per vertex.
    #[inline]
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes for buffer upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Length of the flat float view.
    #[inline]
    pub fn float_len(&self) -> usize {
        self.vertices.len() * FLOATS_PER_VERTEX
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rgb, Vec2};

    fn v(x: f32, y: f32, shade: f32) -> Vertex {
        Vertex::new(Vec2::new(x, y), Rgb::gray(shade))
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_mesh_is_empty() {
        let m = Mesh::new();
        assert!(m.is_empty());
        assert_eq!(m.triangle_count(), 0);
        assert!(m.as_floats().is_empty());
    }

    #[test]
    fn push_triangle_appends_three_vertices() {
        let mut m = Mesh::with_triangle_capacity(2);
        m.push_triangle(v(0.0, 0.0, 0.1), v(1.0, 0.0, 0.2), v(0.0, 1.0, 0.3));
        m.push_triangle(v(1.0, 1.0, 0.4), v(1.0, 0.0, 0.5), v(0.0, 1.0, 0.6));
        assert_eq!(m.len(), 6);
        assert_eq!(m.len() % 3, 0);
        assert_eq!(m.triangle_count(), 2);
        assert_eq!(m.triangles().count(), 2);
        assert_eq!(m.vertices()[3], v(1.0, 1.0, 0.4));
    }

    // ── flat views ────────────────────────────────────────────────────────

    #[test]
    fn as_floats_interleaves_position_and_color() {
        let mut m = Mesh::new();
        m.push_triangle(v(0.5, -0.5, 0.2), v(1.0, 0.0, 0.0), v(0.0, 1.0, 1.0));
        let f = m.as_floats();
        assert_eq!(f.len(), m.float_len());
        assert_eq!(&f[..6], &[0.5, -0.5, 0.0, 0.2, 0.2, 0.2]);
        assert_eq!(&f[12..18], &[0.0, 1.0, 0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn as_bytes_matches_stride() {
        let mut m = Mesh::new();
        m.push_triangle(v(0.0, 0.0, 0.0), v(0.0, 0.0, 0.0), v(0.0, 0.0, 0.0));
        assert_eq!(m.as_bytes().len(), 3 * 24);
    }
}
