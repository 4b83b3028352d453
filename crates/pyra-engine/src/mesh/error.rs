use std::fmt;

/// Mesh validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// No vertices or no indices.
    Empty,
    /// Index count is not a multiple of three.
    NotTriangles { index_count: usize },
    /// An index refers past the end of the vertex list.
    IndexOutOfRange {
        /// Position of the offending entry in the index list.
        position: usize,
        index: u32,
        vertex_count: usize,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::Empty => write!(f, "mesh has no vertices or no indices"),
            MeshError::NotTriangles { index_count } => {
                write!(f, "mesh index count {index_count} is not a multiple of 3")
            }
            MeshError::IndexOutOfRange { position, index, vertex_count } => write!(
                f,
                "mesh index {index} at position {position} is out of range for {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for MeshError {}
