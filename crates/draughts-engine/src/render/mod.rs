//! GPU rendering.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into a
//! [`RenderTarget`] handed out by the frame context.
//!
//! Convention: CPU geometry is already in normalized device coordinates
//! (+Y up); shaders pass positions through unchanged.

mod ctx;
pub mod mesh;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::StaticMeshRenderer;
