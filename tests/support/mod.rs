//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use futurecad::{
    float_types::Real,
    server::{ApiState, serve},
};
use nalgebra::Point3;

/// Returns the bounding box `[min_x, min_y, min_z, max_x, max_y, max_z]`
/// of a set of points.
pub fn bounding_box(points: &[Point3<Real>]) -> [Real; 6] {
    let mut bb = [Real::MAX, Real::MAX, Real::MAX, Real::MIN, Real::MIN, Real::MIN];
    for p in points {
        for axis in 0..3 {
            bb[axis] = bb[axis].min(p[axis]);
            bb[axis + 3] = bb[axis + 3].max(p[axis]);
        }
    }
    bb
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Parse the `facet normal nx ny nz` lines of an ASCII STL document.
pub fn facet_normals(stl: &str) -> Vec<[Real; 3]> {
    stl.lines()
        .filter_map(|line| line.trim().strip_prefix("facet normal "))
        .map(|rest| {
            let n: Vec<Real> = rest
                .split_whitespace()
                .map(|t| t.parse().expect("normal component"))
                .collect();
            [n[0], n[1], n[2]]
        })
        .collect()
}

/// Start a server on an ephemeral local port and return its base URL.
pub async fn spawn_server(state: ApiState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        serve(listener, state).await.expect("Failed to start server");
    });
    format!("http://{addr}")
}
