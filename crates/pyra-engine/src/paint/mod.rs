//! Color values shared between applications and renderers.

pub mod color;

pub use color::Color;
