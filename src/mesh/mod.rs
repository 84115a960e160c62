//! `Mesh` struct: an indexed polyhedral surface tagged with an id, a kind and
//! nominal dimensions.

use crate::errors::MeshError;
use crate::float_types::{CM, INCH, MM, Real};
use crate::triangulated::Triangulated3D;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shape generation functions for Mesh
pub mod shapes;

/// The family of shape a [`Mesh`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeshKind {
    Box,
}

impl MeshKind {
    /// The lowercase tag used on the wire and as the STL solid name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MeshKind::Box => "box",
        }
    }
}

impl std::fmt::Display for MeshKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length unit of a [`Dimensions`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Inch,
    Centimeter,
    Millimeter,
}

impl Unit {
    /// Length of one of this unit in millimetres.
    pub const fn to_millimetres(&self) -> Real {
        match self {
            Unit::Inch => INCH,
            Unit::Centimeter => CM,
            Unit::Millimeter => MM,
        }
    }
}

/// Nominal bounding dimensions of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: Real,
    pub height: Real,
    pub depth: Real,
    pub unit: Unit,
}

impl Dimensions {
    /// The same dimensions expressed in millimetres.
    pub fn in_millimetres(&self) -> Dimensions {
        let k = self.unit.to_millimetres();
        Dimensions {
            width: self.width * k,
            height: self.height * k,
            depth: self.depth * k,
            unit: Unit::Millimeter,
        }
    }
}

/// How polygonal faces are turned into triangles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FaceMode {
    /// One triangle per face from its first three indices; any further
    /// indices are dropped.
    #[default]
    FirstTriangle,
    /// Fan from the first index: a face of `n` indices gives `n - 2` triangles.
    Fan,
}

/// The `{ id, type, dimensions }` view of a mesh returned to API callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshSummary {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: MeshKind,
    pub dimensions: Dimensions,
}

/// An indexed polyhedral mesh.
///
/// Faces are lists of indices into `vertices`, counter-clockwise as seen from
/// outside. Nothing enforces that at construction time; call
/// [`Mesh::validate`] to check the index bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub id: Uuid,
    pub kind: MeshKind,
    pub dimensions: Dimensions,
    pub vertices: Vec<Point3<Real>>,
    pub faces: Vec<Vec<usize>>,
}

impl Mesh {
    /// Build a mesh with a freshly minted id.
    pub fn new(
        kind: MeshKind,
        dimensions: Dimensions,
        vertices: Vec<Point3<Real>>,
        faces: Vec<Vec<usize>>,
    ) -> Self {
        Mesh {
            id: Uuid::new_v4(),
            kind,
            dimensions,
            vertices,
            faces,
        }
    }

    pub fn summary(&self) -> MeshSummary {
        MeshSummary {
            id: self.id,
            kind: self.kind,
            dimensions: self.dimensions,
        }
    }

    /// Check that every face names at least three vertices and that every
    /// index is in range.
    pub fn validate(&self) -> Result<(), MeshError> {
        let len = self.vertices.len();
        for (face, indices) in self.faces.iter().enumerate() {
            if indices.len() < 3 {
                return Err(MeshError::TooFewIndices {
                    face,
                    count: indices.len(),
                });
            }
            if let Some(&index) = indices.iter().find(|&&i| i >= len) {
                return Err(MeshError::IndexOutOfRange { face, index, len });
            }
        }
        Ok(())
    }

    /// Triangles of this mesh as vertex index triples.
    ///
    /// Faces with fewer than three indices produce nothing.
    pub fn triangle_indices(&self, mode: FaceMode) -> Vec<[usize; 3]> {
        let mut out = Vec::with_capacity(self.faces.len());
        for face in self.faces.iter().filter(|f| f.len() >= 3) {
            match mode {
                FaceMode::FirstTriangle => out.push([face[0], face[1], face[2]]),
                FaceMode::Fan => {
                    for i in 1..face.len() - 1 {
                        out.push([face[0], face[i], face[i + 1]]);
                    }
                },
            }
        }
        out
    }

    /// Triangles of this mesh as vertex positions.
    ///
    /// Fails with the first [`MeshError`] reported by [`Mesh::validate`].
    pub fn triangles(&self, mode: FaceMode) -> Result<Vec<[Point3<Real>; 3]>, MeshError> {
        self.validate()?;
        Ok(self
            .triangle_indices(mode)
            .into_iter()
            .map(|[a, b, c]| [self.vertices[a], self.vertices[b], self.vertices[c]])
            .collect())
    }

    /// View this mesh through a specific [`FaceMode`] for the IO backends.
    pub const fn with_face_mode(&self, mode: FaceMode) -> FaceView<'_> {
        FaceView { mesh: self, mode }
    }
}

/// Normal of the triangle `(a, b, c)`: `(b - a) × (c - a)`, not normalized.
pub fn triangle_normal(a: &Point3<Real>, b: &Point3<Real>, c: &Point3<Real>) -> Vector3<Real> {
    let u = b - a;
    let w = c - a;
    u.cross(&w)
}

/// A [`Mesh`] paired with the [`FaceMode`] used to triangulate it.
#[derive(Debug, Clone, Copy)]
pub struct FaceView<'a> {
    pub mesh: &'a Mesh,
    pub mode: FaceMode,
}

impl Triangulated3D for FaceView<'_> {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Point3<Real>; 3]),
    {
        // Triangles naming a missing vertex are skipped; `Mesh::validate` reports them.
        let vertices = &self.mesh.vertices;
        for [a, b, c] in self.mesh.triangle_indices(self.mode) {
            if let (Some(&p0), Some(&p1), Some(&p2)) = (vertices.get(a), vertices.get(b), vertices.get(c)) {
                f([p0, p1, p2]);
            }
        }
    }
}

impl Triangulated3D for Mesh {
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Point3<Real>; 3]),
    {
        self.with_face_mode(FaceMode::default()).visit_triangles(f)
    }
}
