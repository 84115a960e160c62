//! Turning a text prompt into a [`Mesh`].

use crate::mesh::Mesh;

/// Produces a mesh for a free-text description.
pub trait MeshProvider: Send + Sync {
    fn generate(&self, prompt: &str) -> Mesh;
}

/// Always returns [`Mesh::unit_cube`]; the prompt is not interpreted.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxProvider;

impl MeshProvider for BoxProvider {
    fn generate(&self, _prompt: &str) -> Mesh {
        Mesh::unit_cube()
    }
}
