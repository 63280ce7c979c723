//! Draughts engine crate.
//!
//! Platform + GPU runtime used by the viewer: window loop, device/surface,
//! logging, and a renderer for pre-built, non-indexed triangle meshes.

pub mod core;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod render;
pub mod window;
