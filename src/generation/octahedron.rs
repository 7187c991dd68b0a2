//! Base octahedron meshes
//!
//! Faces are wound clockwise when viewed from outside, so the right-hand
//! normal of every face points toward the origin.

use glam::DVec3;

use crate::mesh::TriangleMesh;

/// Octahedron vertices: north pole, +y, -y, +x, -x, south pole
pub const VERTICES: [DVec3; 6] = [
    DVec3::new(0.0, 0.0, 1.0),
    DVec3::new(0.0, 1.0, 0.0),
    DVec3::new(0.0, -1.0, 0.0),
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(-1.0, 0.0, 0.0),
    DVec3::new(0.0, 0.0, -1.0),
];

/// Octahedron faces; the first four form the upper half
pub const FACES: [[usize; 3]; 8] = [
    [0, 1, 3],
    [0, 3, 2],
    [0, 2, 4],
    [0, 4, 1],
    [5, 3, 1],
    [5, 2, 3],
    [5, 4, 2],
    [5, 1, 4],
];

/// Number of faces around the north pole
const UPPER_FACES: usize = 4;

/// Index of the south pole, which the upper half leaves out
const SOUTH_POLE: usize = 5;

/// The full unit octahedron: 6 vertices, 8 faces
pub fn octahedron() -> TriangleMesh {
    TriangleMesh::new(VERTICES.to_vec(), FACES.to_vec())
}

/// The open upper half of the unit octahedron: 5 vertices, 4 faces
pub fn upper_octahedron() -> TriangleMesh {
    TriangleMesh::new(
        VERTICES[..SOUTH_POLE].to_vec(),
        FACES[..UPPER_FACES].to_vec(),
    )
}
