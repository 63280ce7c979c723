//! GPU device + surface management.
//!
//! - creates the wgpu Adapter/Device/Queue for a window
//! - creates and configures the Surface (swapchain)
//! - acquires frames and hands out an encoder + view for rendering

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame, SurfaceErrorAction};
pub use init::GpuInit;
