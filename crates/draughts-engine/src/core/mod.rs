//! Contract between the window runtime and the application.
//!
//! The runtime owns the platform loop; the application only sees window
//! events and a per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
