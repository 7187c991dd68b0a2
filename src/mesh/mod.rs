//! Mesh types produced by the subdivision engine
//!
//! [`TriangleMesh`] is the working representation during refinement,
//! [`SphereMesh`] is the finished result (optionally with a hemisphere cap),
//! and [`MeshData`] is an engine-agnostic flat buffer for rendering.

mod export;

pub use export::MeshData;

use glam::DVec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Indexed mesh whose faces are all triangles
///
/// Face winding follows the polyhedron convention of the base octahedron:
/// clockwise when viewed from outside the sphere.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions; the index of a vertex is its position here
    pub vertices: Vec<DVec3>,
    /// Triangles as index triples into `vertices`
    pub triangles: Vec<[usize; 3]>,
}

impl TriangleMesh {
    /// Create a mesh from vertices and triangles
    pub fn new(vertices: Vec<DVec3>, triangles: Vec<[usize; 3]>) -> Self {
        Self { vertices, triangles }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Positions of the three corners of a triangle
    #[inline]
    pub fn corners(&self, triangle: [usize; 3]) -> [DVec3; 3] {
        triangle.map(|i| self.vertices[i])
    }
}

/// A finished sphere or hemisphere mesh
///
/// For a hemisphere, `cap` holds the single flat polygon closing the
/// equatorial cut. It is listed after all triangles by [`SphereMesh::faces`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SphereMesh {
    /// Vertex positions
    pub vertices: Vec<DVec3>,
    /// Triangular faces
    pub triangles: Vec<[usize; 3]>,
    /// Closing polygon of a hemisphere, `None` for a full sphere
    pub cap: Option<Vec<usize>>,
}

impl SphereMesh {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangular faces (the cap is not counted)
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Get the number of faces including the cap
    pub fn face_count(&self) -> usize {
        self.triangles.len() + usize::from(self.cap.is_some())
    }

    /// Whether this mesh is a capped hemisphere
    pub fn is_hemisphere(&self) -> bool {
        self.cap.is_some()
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All faces as index slices: triangles in order, then the cap
    pub fn faces(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.triangles
            .iter()
            .map(|t| t.as_slice())
            .chain(self.cap.as_deref())
    }

    /// Multiply every vertex by `factor` in place
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.vertices {
            *v *= factor;
        }
    }

    /// Copy of this mesh with every vertex multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        let mut mesh = self.clone();
        mesh.scale(factor);
        mesh
    }
}

impl From<TriangleMesh> for SphereMesh {
    fn from(mesh: TriangleMesh) -> Self {
        Self {
            vertices: mesh.vertices,
            triangles: mesh.triangles,
            cap: None,
        }
    }
}
