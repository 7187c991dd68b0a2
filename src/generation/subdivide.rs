//! Triangle subdivision
//!
//! Each pass splits every triangle into four by its edge midpoints, projected
//! back onto the unit sphere.
//!
//! # Vertex layout
//!
//! Triangle `t` of the input contributes six vertices starting at `6·t`:
//!
//! ```text
//!            p0 (0)
//!            /    \
//!      m01 (3) -- m02 (5)
//!        /  \    /  \
//!   p1 (1) - m12 (4) - p2 (2)
//! ```
//!
//! Midpoints are not shared between neighbouring triangles, so every edge
//! interior to the mesh yields two coincident vertices. This keeps vertex
//! indices a pure function of the triangle index.

use tracing::debug;

use super::midpoint::midpoint;
use crate::mesh::TriangleMesh;

/// Vertices emitted per input triangle
const VERTICES_PER_TRIANGLE: usize = 6;

/// Child triangles in local vertex indices: three corners, then the centre
const CHILDREN: [[usize; 3]; 4] = [[0, 3, 5], [3, 1, 4], [5, 4, 2], [3, 4, 5]];

/// Perform one subdivision pass
///
/// For `T` input triangles the result has exactly `6T` vertices and `4T`
/// triangles. Winding is preserved: each child has the orientation of its
/// parent.
pub fn subdivide(mesh: &TriangleMesh) -> TriangleMesh {
    let mut vertices = Vec::with_capacity(mesh.triangle_count() * VERTICES_PER_TRIANGLE);
    let mut triangles = Vec::with_capacity(mesh.triangle_count() * CHILDREN.len());

    for &triangle in &mesh.triangles {
        let base = vertices.len();
        let [p0, p1, p2] = mesh.corners(triangle);

        vertices.extend([
            p0,
            p1,
            p2,
            midpoint(p0, p1),
            midpoint(p1, p2),
            midpoint(p0, p2),
        ]);
        triangles.extend(CHILDREN.map(|child| child.map(|local| base + local)));
    }

    TriangleMesh::new(vertices, triangles)
}

/// Apply [`subdivide`] `levels` times
///
/// `levels = 0` returns the input unchanged. Face count grows as
/// `F0·4^levels`; memory grows with it, and `levels` is not bounded here.
pub fn refine(mesh: TriangleMesh, levels: u32) -> TriangleMesh {
    debug!(
        "Refining mesh: {} faces, {} vertices, {} levels",
        mesh.triangle_count(),
        mesh.vertex_count(),
        levels
    );

    let mut current = mesh;
    for i in 0..levels {
        current = subdivide(&current);
        debug!(
            "Level {}: {} faces, {} vertices",
            i + 1,
            current.triangle_count(),
            current.vertex_count()
        );
    }
    current
}
