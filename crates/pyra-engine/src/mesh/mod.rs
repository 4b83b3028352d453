//! CPU-side mesh data.
//!
//! A [`Mesh`] is an indexed triangle list of [`Vertex`] values, validated on
//! construction so renderers can upload it without further checks.

mod error;
mod vertex;

pub use error::MeshError;
pub use vertex::Vertex;

/// Indexed triangle list.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Builds a mesh, rejecting empty data, partial triangles and dangling indices.
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Result<Self, MeshError> {
        if vertices.is_empty() || indices.is_empty() {
            return Err(MeshError::Empty);
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::NotTriangles { index_count: indices.len() });
        }
        if let Some((position, &index)) = indices
            .iter()
            .enumerate()
            .find(|(_, i)| **i as usize >= vertices.len())
        {
            return Err(MeshError::IndexOutOfRange {
                position,
                index,
                vertex_count: vertices.len(),
            });
        }

        Ok(Self { vertices, indices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32) -> Vertex {
        Vertex::new([x, 0.0, 0.0], [1.0, 1.0, 1.0])
    }

    #[test]
    fn accepts_single_triangle() {
        let m = Mesh::new(vec![v(0.0), v(1.0), v(2.0)], vec![0, 1, 2]).unwrap();
        assert_eq!(m.index_count(), 3);
        assert_eq!(m.triangle_count(), 1);
    }

    #[test]
    fn rejects_partial_triangle() {
        let err = Mesh::new(vec![v(0.0), v(1.0)], vec![0, 1]).unwrap_err();
        assert_eq!(err, MeshError::NotTriangles { index_count: 2 });
    }

    #[test]
    fn rejects_dangling_index() {
        let err = Mesh::new(vec![v(0.0), v(1.0), v(2.0)], vec![0, 1, 2, 2, 1, 3]).unwrap_err();
        assert_eq!(
            err,
            MeshError::IndexOutOfRange { position: 5, index: 3, vertex_count: 3 }
        );
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Mesh::new(vec![], vec![]).unwrap_err(), MeshError::Empty);
        assert_eq!(Mesh::new(vec![v(0.0)], vec![]).unwrap_err(), MeshError::Empty);
    }
}
