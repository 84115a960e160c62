mod support;

use futurecad::{
    io::{IoError, StlOptions, to_stl_ascii, to_stl_ascii_with},
    mesh::{Dimensions, FaceMode, Mesh, MeshKind, Unit},
};
use nalgebra::Point3;
use support::facet_normals;

#[test]
fn mesh_to_stl_ascii() {
    let cube = Mesh::unit_cube();
    let stl_str = cube.to_stl_ascii("box").unwrap();

    assert!(stl_str.starts_with("solid box\n"));
    assert!(stl_str.ends_with("endsolid box\n"));
    assert_eq!(stl_str.lines().filter(|l| l.starts_with("solid ")).count(), 1);
    assert_eq!(stl_str.lines().filter(|l| l.starts_with("endsolid ")).count(), 1);

    // One facet per quad, each with a single three-vertex loop.
    assert_eq!(stl_str.matches("facet normal").count(), 6);
    assert_eq!(stl_str.matches("endfacet").count(), 6);
    assert_eq!(stl_str.matches("outer loop").count(), 6);
    assert_eq!(stl_str.matches("vertex ").count(), 18);
}

#[test]
fn first_facet_is_written_verbatim() {
    let stl_str = Mesh::unit_cube().to_stl_ascii("box").unwrap();
    let expected = "solid box\n\
                    \x20 facet normal 0 0 1\n\
                    \x20   outer loop\n\
                    \x20     vertex -0.5 -0.5 0.5\n\
                    \x20     vertex 0.5 -0.5 0.5\n\
                    \x20     vertex 0.5 0.5 0.5\n\
                    \x20   endloop\n\
                    \x20 endfacet\n";
    assert!(
        stl_str.starts_with(expected),
        "unexpected STL prefix:\n{stl_str}"
    );
}

#[test]
fn cube_normals_are_axis_aligned_and_outward() {
    let normals = facet_normals(&Mesh::unit_cube().to_stl_ascii("box").unwrap());
    assert_eq!(
        normals,
        vec![
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
            [1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0],
        ]
    );
}

#[test]
fn normals_are_not_normalized_by_default() {
    let dims = Dimensions {
        width: 2.0,
        height: 2.0,
        depth: 2.0,
        unit: Unit::Inch,
    };
    let tri = Mesh::new(
        MeshKind::Box,
        dims,
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        ],
        vec![vec![0, 1, 2]],
    );

    assert_eq!(facet_normals(&to_stl_ascii(&tri, "tri")), vec![[0.0, 0.0, 4.0]]);

    let normalized = StlOptions {
        normalize: true,
        ..StlOptions::default()
    };
    assert_eq!(
        facet_normals(&to_stl_ascii_with(&tri, "tri", normalized).unwrap()),
        vec![[0.0, 0.0, 1.0]]
    );
}

#[test]
fn fan_mode_emits_every_triangle() {
    let options = StlOptions {
        face_mode: FaceMode::Fan,
        normalize: false,
    };
    let stl_str = to_stl_ascii_with(&Mesh::unit_cube(), "box", options).unwrap();
    assert_eq!(stl_str.matches("facet normal").count(), 12);
}

#[test]
fn encoding_is_deterministic() {
    let cube = Mesh::unit_cube();
    assert_eq!(cube.to_stl_ascii("box").unwrap(), cube.to_stl_ascii("box").unwrap());
    assert_eq!(
        to_stl_ascii_with(&cube, "box", StlOptions::default()).unwrap(),
        to_stl_ascii(&cube, "box")
    );
}

#[test]
fn empty_mesh_is_just_header_and_footer() {
    let mut mesh = Mesh::unit_cube();
    mesh.faces.clear();
    assert_eq!(mesh.to_stl_ascii("box").unwrap(), "solid box\nendsolid box\n");
}

#[test]
fn out_of_range_face_is_an_error() {
    let mut mesh = Mesh::unit_cube();
    mesh.faces.push(vec![0, 1, 8]);

    assert!(matches!(mesh.to_stl_ascii("box"), Err(IoError::MalformedInput(_))));
    let fan = StlOptions {
        face_mode: FaceMode::Fan,
        normalize: true,
    };
    assert!(matches!(
        to_stl_ascii_with(&mesh, "box", fan),
        Err(IoError::MalformedInput(_))
    ));
    #[cfg(feature = "stl-io")]
    assert!(matches!(mesh.to_stl_binary("box"), Err(IoError::MalformedInput(_))));

    // The generic visitor skips the bad face instead of indexing past the end.
    let stl_str = to_stl_ascii(&mesh, "box");
    assert_eq!(stl_str.matches("facet normal").count(), 6);
}

#[cfg(feature = "stl-io")]
#[test]
fn to_stl_binary_and_read_back() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let tmp_path = dir.path().join("cube.stl");

    let cube = Mesh::unit_cube();
    let bytes = cube.to_stl_binary("box")?;
    // 80-byte header, u32 count, 50 bytes per triangle.
    assert_eq!(bytes.len(), 84 + 6 * 50);
    std::fs::write(&tmp_path, &bytes)?;

    let mut file = std::fs::File::open(&tmp_path)?;
    let read_back = stl_io::read_stl(&mut file)?;
    assert_eq!(read_back.faces.len(), 6);
    Ok(())
}

#[cfg(feature = "stl-io")]
#[test]
fn binary_fan_has_twelve_triangles() -> Result<(), Box<dyn std::error::Error>> {
    let options = StlOptions {
        face_mode: FaceMode::Fan,
        normalize: true,
    };
    let bytes = futurecad::io::to_stl_binary_with(&Mesh::unit_cube(), "box", options)?;
    assert_eq!(bytes.len(), 84 + 12 * 50);
    Ok(())
}
