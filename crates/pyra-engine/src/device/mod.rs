//! Window surface and GPU device: adapter selection, surface and depth buffer
//! configuration, frame acquire and present.

mod context;
mod error;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use init::GpuInit;
pub use surface::DEPTH_FORMAT;
