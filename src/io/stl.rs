use crate::float_types::Real;
use crate::mesh::{FaceMode, Mesh, triangle_normal};
use crate::triangulated::Triangulated3D;
use nalgebra::Vector3;

/// Knobs for the STL encoders.
///
/// The default reproduces the service's download format: one facet per face
/// and normals left at the length of the edge cross product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StlOptions {
    pub face_mode: FaceMode,
    /// Scale each facet normal to unit length.
    pub normalize: bool,
}

/// Format a coordinate in its shortest round-trip decimal form.
/// `-0` is written as `0`.
fn fmt_real(value: Real) -> String {
    format!("{}", value + 0.0)
}

fn facet_normal(tri: &[nalgebra::Point3<Real>; 3], normalize: bool) -> Vector3<Real> {
    let n = triangle_normal(&tri[0], &tri[1], &tri[2]);
    if normalize {
        n.try_normalize(0.0).unwrap_or_else(Vector3::zeros)
    } else {
        n
    }
}

fn write_ascii<T: Triangulated3D>(shape: &T, name: &str, normalize: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri, normalize);
        out.push_str(&format!(
            "  facet normal {} {} {}\n",
            fmt_real(n.x),
            fmt_real(n.y),
            fmt_real(n.z)
        ));
        out.push_str("    outer loop\n");
        for p in &tri {
            out.push_str(&format!(
                "      vertex {} {} {}\n",
                fmt_real(p.x),
                fmt_real(p.y),
                fmt_real(p.z)
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Export to ASCII STL
/// Convert a triangulated shape to an **ASCII STL** string with the given `name`.
///
/// Each facet normal is the cross product of the triangle's two edges from
/// its first vertex, not normalized.
///
/// ```rust
/// # use futurecad::mesh::Mesh;
/// let mesh = Mesh::unit_cube();
/// let stl = futurecad::io::to_stl_ascii(&mesh, "box");
/// assert!(stl.starts_with("solid box\n"));
/// assert_eq!(stl.matches("facet normal").count(), 6);
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    write_ascii(shape, name, false)
}

/// ASCII STL of `mesh` with explicit [`StlOptions`].
///
/// The mesh is validated first, a face naming a missing vertex is an
/// [`IoError::MalformedInput`](super::IoError::MalformedInput).
pub fn to_stl_ascii_with(mesh: &Mesh, name: &str, options: StlOptions) -> Result<String, super::IoError> {
    mesh.validate()?;
    Ok(write_ascii(&mesh.with_face_mode(options.face_mode), name, options.normalize))
}

#[cfg(feature = "stl-io")]
fn write_binary<T: Triangulated3D>(shape: &T, normalize: bool) -> Result<Vec<u8>, super::IoError> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri, normalize);
        #[allow(clippy::unnecessary_cast)]
        {
            triangles.push(Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri.map(|p| Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
            });
        }
    });

    let mut cursor = std::io::Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// The binary header has no room for a solid name, so `_name` is unused.
#[cfg(feature = "stl-io")]
pub fn to_stl_binary<T: Triangulated3D>(shape: &T, _name: &str) -> Result<Vec<u8>, super::IoError> {
    write_binary(shape, false)
}

/// Binary STL of `mesh` with explicit [`StlOptions`].
#[cfg(feature = "stl-io")]
pub fn to_stl_binary_with(mesh: &Mesh, _name: &str, options: StlOptions) -> Result<Vec<u8>, super::IoError> {
    mesh.validate()?;
    write_binary(&mesh.with_face_mode(options.face_mode), options.normalize)
}

impl Mesh {
    /// ASCII STL named after `name`, one facet per face.
    pub fn to_stl_ascii(&self, name: &str) -> Result<String, super::IoError> {
        self::to_stl_ascii_with(self, name, StlOptions::default())
    }

    #[cfg(feature = "stl-io")]
    pub fn to_stl_binary(&self, name: &str) -> Result<Vec<u8>, super::IoError> {
        self::to_stl_binary_with(self, name, StlOptions::default())
    }
}
