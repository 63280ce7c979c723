//! Window + runtime loop.
//!
//! Owns the `winit` event loop and the single window, and binds the GPU
//! layer to it.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
