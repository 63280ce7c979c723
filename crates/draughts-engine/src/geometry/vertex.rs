use bytemuck::{Pod, Zeroable};

use super::{Rgb, Vec2};

/// Number of `f32` values per vertex in the interleaved layout.
pub const FLOATS_PER_VERTEX: usize = 6;

/// Interleaved position + color vertex.
///
/// Layout (24 bytes):
///
///  offset  0  position  [f32; 3]   loc 0  (z is always 0)
///  offset 12  color     [f32; 3]   loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    /// Vertex on the z = 0 plane.
    #[inline]
    pub const fn new(pos: Vec2, color: Rgb) -> Self {
        Self {
            position: [pos.x, pos.y, 0.0],
            color: color.to_array(),
        }
    }

    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.position[0], self.position[1])
    }

    #[inline]
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.color[0], self.color[1], self.color[2])
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
