//! Fixed shape tables for [`Mesh`].

use super::{Dimensions, Mesh, MeshKind, Unit};
use crate::float_types::Real;
use nalgebra::Point3;

impl Mesh {
    /// Axis-aligned cuboid centered at the origin.
    ///
    /// ## **Vertex Layout**
    /// ```text
    ///      7-------6
    ///     /|      /|
    ///    3-------2 |
    ///    | |     | |
    ///    | 4-----|-5
    ///    |/      |/
    ///    0-------1
    /// ```
    /// `0..4` lie on the front face (`z = +depth/2`), `4..8` on the back.
    ///
    /// ## **Face Connectivity (6 quads, CCW from outside)**
    /// - **Front**: [0,1,2,3] (normal +Z)
    /// - **Back**: [5,4,7,6] (normal -Z)
    /// - **Top**: [3,2,6,7] (normal +Y)
    /// - **Bottom**: [4,5,1,0] (normal -Y)
    /// - **Right**: [1,5,6,2] (normal +X)
    /// - **Left**: [0,3,7,4] (normal -X)
    pub fn cuboid(width: Real, height: Real, depth: Real, unit: Unit) -> Mesh {
        let (x, y, z) = (width / 2.0, height / 2.0, depth / 2.0);
        let vertices = vec![
            Point3::new(-x, -y, z),
            Point3::new(x, -y, z),
            Point3::new(x, y, z),
            Point3::new(-x, y, z),
            Point3::new(-x, -y, -z),
            Point3::new(x, -y, -z),
            Point3::new(x, y, -z),
            Point3::new(-x, y, -z),
        ];

        let faces = vec![
            vec![0, 1, 2, 3],
            vec![5, 4, 7, 6],
            vec![3, 2, 6, 7],
            vec![4, 5, 1, 0],
            vec![1, 5, 6, 2],
            vec![0, 3, 7, 4],
        ];

        let dimensions = Dimensions {
            width,
            height,
            depth,
            unit,
        };
        Mesh::new(MeshKind::Box, dimensions, vertices, faces)
    }

    /// The 1" x 1" x 1" box.
    pub fn unit_cube() -> Mesh {
        Self::cuboid(1.0, 1.0, 1.0, Unit::Inch)
    }
}
