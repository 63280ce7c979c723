use wgpu::util::DeviceExt;

use crate::geometry::{Mesh, Vertex};
use crate::render::{RenderCtx, RenderTarget};

/// Renderer for meshes that never change after upload.
///
/// Each mesh gets its own vertex buffer, written exactly once. Every call to
/// [`render`](Self::render) issues one non-indexed triangle-list draw per
/// mesh, in upload order, so later meshes paint over earlier ones.
#[derive(Default)]
pub struct StaticMeshRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    meshes: Vec<GpuMesh>,
    uploaded: bool,
}

struct GpuMesh {
    vbo: wgpu::Buffer,
    vertex_count: u32,
}

impl StaticMeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once [`upload`](Self::upload) has run.
    pub fn is_uploaded(&self) -> bool {
        self.uploaded
    }

    /// Number of meshes that will be drawn.
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Copies `meshes` into GPU vertex buffers.
    ///
    /// Only the first call uploads; later calls return immediately. Empty
    /// meshes are skipped.
    pub fn upload<'m, I>(&mut self, ctx: &RenderCtx<'_>, meshes: I)
    where
        I: IntoIterator<Item = &'m Mesh>,
    {
        if self.uploaded {
            return;
        }

        for (i, mesh) in meshes.into_iter().enumerate() {
            let Some(vertex_count) = draw_vertex_count(mesh) else {
                log::debug!("skipping mesh {i}: nothing to draw");
                continue;
            };

            let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("draughts static mesh vbo"),
                contents: mesh.as_bytes(),
                usage: wgpu::BufferUsages::VERTEX,
            });
            self.meshes.push(GpuMesh { vbo, vertex_count });
        }

        self.uploaded = true;
        log::debug!("uploaded {} static meshes", self.meshes.len());
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        if self.meshes.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        let Some(pipeline) = self.pipeline.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("draughts mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        for mesh in &self.meshes {
            rpass.set_vertex_buffer(0, mesh.vbo.slice(..));
            rpass.draw(0..mesh.vertex_count, 0..1);
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("draughts mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("draughts mesh pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("draughts mesh pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            // Board quads and piece fans mix windings; nothing is culled.
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("created mesh pipeline for {:?}", ctx.surface_format);
        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
    }
}

/// Vertex count for a mesh's draw call, or `None` if there is nothing to
/// draw.
fn draw_vertex_count(mesh: &Mesh) -> Option<u32> {
    if mesh.is_empty() {
        return None;
    }
    u32::try_from(mesh.len()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rgb, Vec2};

    #[test]
    fn empty_mesh_is_not_drawn() {
        assert_eq!(draw_vertex_count(&Mesh::new()), None);
    }

    #[test]
    fn vertex_count_is_mesh_length() {
        let v = Vertex::new(Vec2::zero(), Rgb::white());
        let mut mesh = Mesh::new();
        mesh.push_triangle(v, v, v);
        mesh.push_triangle(v, v, v);
        assert_eq!(draw_vertex_count(&mesh), Some(6));
    }

    #[test]
    fn fresh_renderer_has_nothing_uploaded() {
        let r = StaticMeshRenderer::new();
        assert!(!r.is_uploaded());
        assert_eq!(r.mesh_count(), 0);
    }
}
