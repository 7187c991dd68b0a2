//! Geodesic subdivision engine
//!
//! Builds sphere meshes from a base octahedron:
//! 1. Select a subdivision level from the fragment hint
//! 2. Refine the full (or upper half) octahedron that many times
//! 3. Cap the equator for hemispheres
//! 4. Scale to the requested radius
//!
//! Everything here is a pure function of its arguments.

mod cap;
mod midpoint;
mod octahedron;
mod subdivide;

pub use cap::{cap_hemisphere, equator_ring};
pub use midpoint::midpoint;
pub use octahedron::{octahedron, upper_octahedron};
pub use subdivide::{refine, subdivide};

use crate::mesh::SphereMesh;
use crate::resolution::select_levels;

/// Unit-radius sphere or hemisphere after `levels` subdivision passes
pub fn unit_sphere(levels: u32, hemisphere: bool) -> SphereMesh {
    if hemisphere {
        cap_hemisphere(refine(upper_octahedron(), levels), levels)
    } else {
        refine(octahedron(), levels).into()
    }
}

/// Sphere or hemisphere of `radius` at the level closest to `fragments`
///
/// Never fails for a positive radius and a positive finite hint; other
/// inputs give meaningless geometry.
pub fn assemble(radius: f64, hemisphere: bool, fragments: f64) -> SphereMesh {
    let levels = select_levels(fragments);
    let mut mesh = unit_sphere(levels, hemisphere);
    mesh.scale(radius);
    mesh
}

/// Radius from an optional radius and diameter
///
/// A positive radius wins, then half a positive diameter, then 1.
pub fn resolve_radius(r: Option<f64>, d: Option<f64>) -> f64 {
    match (r, d) {
        (Some(r), _) if r > 0.0 => r,
        (_, Some(d)) if d > 0.0 => d / 2.0,
        _ => 1.0,
    }
}

/// Octahedron-based sphere mesh from radius or diameter
///
/// ```
/// use octsphere::octsphere;
///
/// // 16-sided equator, two subdivision passes
/// let mesh = octsphere(None, Some(4.0), false, 16.0);
/// assert_eq!(mesh.triangle_count(), 8 * 16);
/// assert!((mesh.vertices[0].length() - 2.0).abs() < 1e-12);
/// ```
pub fn octsphere(r: Option<f64>, d: Option<f64>, hemisphere: bool, fragments: f64) -> SphereMesh {
    assemble(resolve_radius(r, d), hemisphere, fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unit_sphere_level_zero_is_octahedron() {
        let mesh = unit_sphere(0, false);
        assert_eq!(mesh.vertices, octahedron().vertices);
        assert_eq!(mesh.triangles, octahedron().triangles);
        assert!(mesh.cap.is_none());
    }

    #[test]
    fn test_unit_hemisphere_counts() {
        let mesh = unit_sphere(0, true);
        assert_eq!(mesh.vertex_count(), 5 + 5);
        assert_eq!(mesh.face_count(), 5);

        let mesh = unit_sphere(2, true);
        assert_eq!(mesh.vertex_count(), 6 * 4 * 4 + 17);
        assert_eq!(mesh.triangle_count(), 64);
        assert_eq!(mesh.cap.as_ref().map(Vec::len), Some(16));
    }

    #[test]
    fn test_assemble_scales() {
        let unit = assemble(1.0, false, 16.0);
        let big = assemble(2.5, false, 16.0);
        assert_eq!(unit.triangles, big.triangles);
        for (a, b) in unit.vertices.iter().zip(&big.vertices) {
            assert_abs_diff_eq!(a.distance(*b / 2.5), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_resolve_radius() {
        assert_eq!(resolve_radius(Some(3.0), Some(10.0)), 3.0);
        assert_eq!(resolve_radius(None, Some(10.0)), 5.0);
        assert_eq!(resolve_radius(Some(0.0), Some(10.0)), 5.0);
        assert_eq!(resolve_radius(Some(-1.0), None), 1.0);
        assert_eq!(resolve_radius(None, None), 1.0);
    }
}
