//! Validation errors

/// All the possible validation issues a [`Mesh`](crate::mesh::Mesh) can have
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// (TooFewIndices) A face names fewer than three vertices
    #[error("(TooFewIndices) Face {face} has {count} indices, at least 3 are required")]
    TooFewIndices { face: usize, count: usize },
    /// (IndexOutOfRange) A face references a vertex that does not exist
    #[error("(IndexOutOfRange) Face {face} references vertex {index} (vertices.len = {len})")]
    IndexOutOfRange { face: usize, index: usize, len: usize },
}
