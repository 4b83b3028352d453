//! The displayed object: a square-based pyramid with a colored corner per vertex.

use pyra_engine::mesh::{Mesh, MeshError, Vertex};
use pyra_engine::paint::Color;

/// Base corners at z = +1, apex at z = -1.
pub const PYRAMID_VERTICES: [Vertex; 5] = [
    Vertex::new([-1.0, 1.0, 1.0], Color::RED.to_rgb_array()),
    Vertex::new([1.0, 1.0, 1.0], Color::GREEN.to_rgb_array()),
    Vertex::new([1.0, -1.0, 1.0], Color::YELLOW.to_rgb_array()),
    Vertex::new([-1.0, -1.0, 1.0], Color::BLUE.to_rgb_array()),
    Vertex::new([0.0, 0.0, -1.0], Color::PURPLE.to_rgb_array()),
];

/// Two base triangles followed by the four sides.
#[rustfmt::skip]
pub const PYRAMID_INDICES: [u32; 18] = [
    0, 3, 2,
    0, 2, 1,
    0, 4, 3,
    3, 4, 2,
    2, 4, 1,
    1, 4, 0,
];

pub fn pyramid() -> Result<Mesh, MeshError> {
    Mesh::new(PYRAMID_VERTICES.to_vec(), PYRAMID_INDICES.to_vec())
}
