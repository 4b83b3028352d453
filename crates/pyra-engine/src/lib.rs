//! Pyra engine crate.
//!
//! Platform and GPU runtime for the pyramid viewer: window loop, input
//! translation, wgpu device management and the mesh renderer.

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod logging;
pub mod mesh;
pub mod paint;
pub mod render;
