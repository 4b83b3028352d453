//! Interactive pyramid viewer.
//!
//! Drag to rotate, scroll to scale, double-click left/right to reset scale or
//! rotation, release `R` to reset both.

pub mod app;
pub mod config;
pub mod controls;
pub mod projection;
pub mod scene;
pub mod transform;

pub use app::Viewer;
pub use config::ViewerConfig;
