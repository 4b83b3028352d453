//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into a
//! [`RenderTarget`] provided by `core::FrameCtx::render`.
//!
//! Convention:
//! - object space is right-handed, camera looks down -Z
//! - matrices are `glam::Mat4`, uploaded column-major
//! - clip-space depth is `[0, 1]`; the depth buffer is cleared to 1.0

mod ctx;
mod mesh;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{MeshRenderer, MeshTransforms};
